//! Console handlers for the three catalog listings.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use kiosk_client::ApiClient;

use crate::presentation::formatters::{capitalize, format_date_iso, format_price};
use crate::types::OutputFormat;

pub async fn dates(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let dates = client
        .dates()
        .await
        .with_context(|| format!("fetching available dates from {}", client.base_url()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&dates)?);
        }
        OutputFormat::Plain => {
            println!("{}", "Available Dates".bold());
            if dates.is_empty() {
                println!("  (none)");
            }
            for date in dates {
                println!("  {}", format_date_iso(date));
            }
        }
    }

    Ok(())
}

pub async fn prices(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let prices = client
        .prices()
        .await
        .with_context(|| format!("fetching ticket prices from {}", client.base_url()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&prices)?);
        }
        OutputFormat::Plain => {
            println!("{}", "Ticket Prices".bold());
            for (category, price) in prices.iter() {
                println!("  {}: {}", capitalize(category), format_price(price));
            }
        }
    }

    Ok(())
}

pub async fn shows(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let shows = client
        .shows()
        .await
        .with_context(|| format!("fetching shows from {}", client.base_url()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&shows)?);
        }
        OutputFormat::Plain => {
            println!("{}", "Shows".bold());
            if shows.is_empty() {
                println!("  (none scheduled)");
            }
            for show in shows {
                println!(
                    "  [{}] {} - {}",
                    show.id,
                    show.name,
                    format_price(show.price)
                );
            }
        }
    }

    Ok(())
}
