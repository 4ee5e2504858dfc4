//! Console handler for aggregate booking statistics.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use kiosk_client::ApiClient;

use crate::presentation::formatters::{format_date_iso, format_price};
use crate::types::OutputFormat;

pub async fn handle(client: &ApiClient, format: OutputFormat) -> Result<()> {
    let summary = client
        .analytics()
        .await
        .with_context(|| format!("fetching analytics from {}", client.base_url()))?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Plain => {
            println!("{}", "Booking Analytics".bold());
            println!("  Total Bookings: {}", summary.total_bookings);
            println!("  Total Revenue: {}", format_price(summary.total_revenue));
            if let Some(popular) = &summary.popular_date {
                println!(
                    "  Most Popular Date: {} (Bookings: {})",
                    format_date_iso(popular.date),
                    popular.count
                );
            }
        }
    }

    Ok(())
}
