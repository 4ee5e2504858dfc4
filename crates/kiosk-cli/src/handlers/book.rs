//! One-shot booking from the command line.
//!
//! Mirrors the interactive flow: submit, then optionally pay with the
//! returned payment id. Backend rejections are surfaced verbatim; transport
//! failures collapse to the same generic message the TUI shows.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use kiosk_client::ApiClient;
use kiosk_engine::{GENERIC_BOOKING_ERROR, MISSING_DATE_MESSAGE};
use kiosk_types::{
    Booking, BookingRequest, PaymentOutcome, PaymentStatus, ShowId, TicketSelection,
};

use crate::presentation::formatters::{capitalize, format_date_iso, format_price};
use crate::types::OutputFormat;

pub async fn handle(
    client: &ApiClient,
    date: Option<String>,
    tickets: Vec<String>,
    show: Option<String>,
    pay: bool,
    format: OutputFormat,
) -> Result<()> {
    // Same local guard as the interactive form: a dateless submission never
    // reaches the backend.
    let Some(date) = date else {
        bail!("{}", MISSING_DATE_MESSAGE);
    };
    let date = parse_date(&date)?;

    let request = BookingRequest {
        date,
        tickets: parse_tickets(&tickets)?,
        show: show.map(ShowId::new),
    };

    let booking = match client.book(&request).await {
        Ok(booking) => booking,
        Err(kiosk_client::Error::Rejected(message)) => bail!("{}", message),
        Err(_) => bail!("{}", GENERIC_BOOKING_ERROR),
    };

    let payment_status = if pay {
        let outcome = match client.process_payment(&booking.payment_id).await {
            Ok(receipt) => PaymentOutcome::from_receipt(&receipt),
            Err(_) => PaymentOutcome::Failed,
        };
        match outcome {
            PaymentOutcome::Succeeded => PaymentStatus::Completed,
            PaymentOutcome::Failed => PaymentStatus::Failed,
        }
    } else {
        PaymentStatus::Pending
    };

    match format {
        OutputFormat::Json => print_json(&booking, payment_status)?,
        OutputFormat::Plain => print_summary(&booking, payment_status),
    }

    if payment_status == PaymentStatus::Failed {
        bail!("Payment failed. Please try again.");
    }

    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| kiosk_types::Error::InvalidDate(raw.to_string()).into())
}

/// Parse repeated `--ticket CATEGORY=COUNT` arguments.
fn parse_tickets(pairs: &[String]) -> Result<TicketSelection> {
    pairs
        .iter()
        .map(|pair| {
            let invalid = || kiosk_types::Error::InvalidQuantity(pair.clone());
            let (category, count) = pair.split_once('=').ok_or_else(invalid)?;
            let count: u32 = count.parse().map_err(|_| invalid())?;
            Ok((category.to_string(), count))
        })
        .collect()
}

fn print_summary(booking: &Booking, payment_status: PaymentStatus) {
    println!("{}", "Booking Summary".bold());
    println!("Date: {}", format_date_iso(booking.date));
    for (category, quantity) in booking.tickets.iter() {
        if quantity > 0 {
            println!("{} tickets: {}", capitalize(category), quantity);
        }
    }
    println!("Total Cost: {}", format_price(booking.total_cost));
    match payment_status {
        PaymentStatus::Completed => println!("{}", "Payment completed successfully!".green()),
        PaymentStatus::Failed => println!("{}", "Payment failed. Please try again.".red()),
        PaymentStatus::Pending => {
            println!("Payment pending (id: {})", booking.payment_id)
        }
        PaymentStatus::None => {}
    }
}

fn print_json(booking: &Booking, payment_status: PaymentStatus) -> Result<()> {
    let output = serde_json::json!({
        "booking": booking,
        "payment_status": payment_status,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
