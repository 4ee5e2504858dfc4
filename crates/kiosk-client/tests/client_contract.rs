//! Contract tests for the backend client against the scripted mock backend.

use chrono::NaiveDate;
use kiosk_client::{ApiClient, Error};
use kiosk_testing::{BackendScript, MockBackend};
use kiosk_types::{BookingRequest, PaymentOutcome, ShowId, TicketSelection};

fn client_for(backend: &MockBackend) -> ApiClient {
    ApiClient::new(backend.base_url())
}

#[tokio::test]
async fn catalog_reads_round_trip() -> anyhow::Result<()> {
    let backend = MockBackend::start_default()?;
    let client = client_for(&backend);

    let dates = client.dates().await?;
    assert_eq!(dates.len(), 7);
    assert_eq!(dates[0], NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
    // Contract promises an ordered sequence
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    let prices = client.prices().await?;
    assert_eq!(prices.get("adult"), Some(15.0));
    assert_eq!(prices.get("child"), Some(8.0));
    assert_eq!(prices.get("senior"), Some(10.0));

    let shows = client.shows().await?;
    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].id, ShowId::new("1"));

    let analytics = client.analytics().await?;
    assert_eq!(analytics.total_bookings, 4);
    assert_eq!(analytics.popular_date.unwrap().count, 3);

    Ok(())
}

#[tokio::test]
async fn booking_returns_backend_computed_total() -> anyhow::Result<()> {
    let backend = MockBackend::start_default()?;
    let client = client_for(&backend);

    let request = BookingRequest {
        date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        tickets: [("adult".to_string(), 2), ("child".to_string(), 1)]
            .into_iter()
            .collect::<TicketSelection>(),
        show: None,
    };
    let booking = client.book(&request).await?;

    // 2 x 15 + 1 x 8, computed by the backend, never locally
    assert_eq!(booking.total_cost, 38.0);
    assert!(!booking.payment_id.is_empty());
    assert_eq!(booking.date, request.date);

    // The wire request carries show as the empty string, not null
    let recorded = backend.booking_requests();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0]["show"], "");
    Ok(())
}

#[tokio::test]
async fn booking_with_show_adds_show_price() -> anyhow::Result<()> {
    let backend = MockBackend::start_default()?;
    let client = client_for(&backend);

    let request = BookingRequest {
        date: NaiveDate::from_ymd_opt(2024, 7, 2).unwrap(),
        tickets: [("senior".to_string(), 1)]
            .into_iter()
            .collect::<TicketSelection>(),
        show: Some(ShowId::new("2")),
    };
    let booking = client.book(&request).await?;
    assert_eq!(booking.total_cost, 19.5);
    assert_eq!(backend.booking_requests()[0]["show"], "2");
    Ok(())
}

#[tokio::test]
async fn rejection_body_surfaces_the_verbatim_message() -> anyhow::Result<()> {
    let backend = MockBackend::start(BackendScript {
        reject_booking_with: Some("Sold out for this date".to_string()),
        ..BackendScript::default()
    })?;
    let client = client_for(&backend);

    let request = BookingRequest {
        date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        tickets: TicketSelection::new(),
        show: None,
    };
    match client.book(&request).await {
        Err(Error::Rejected(message)) => assert_eq!(message, "Sold out for this date"),
        other => panic!("expected rejection, got {:?}", other.map(|b| b.payment_id)),
    }
    Ok(())
}

#[tokio::test]
async fn non_2xx_is_a_status_error() -> anyhow::Result<()> {
    let backend = MockBackend::start(BackendScript {
        fail_prices: true,
        fail_booking: true,
        ..BackendScript::default()
    })?;
    let client = client_for(&backend);

    match client.prices().await {
        Err(Error::Status(code)) => assert_eq!(code, 500),
        other => panic!("expected status error, got {:?}", other.is_ok()),
    }

    let request = BookingRequest {
        date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        tickets: TicketSelection::new(),
        show: None,
    };
    let err = client.book(&request).await.unwrap_err();
    assert!(err.is_transport());
    Ok(())
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    // Nothing listens here; connection must be refused
    let client = ApiClient::new("http://127.0.0.1:1");
    let err = client.dates().await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn payment_receipt_maps_to_outcome_by_exact_match() -> anyhow::Result<()> {
    let backend = MockBackend::start_default()?;
    let client = client_for(&backend);
    let receipt = client.process_payment("pay-123").await?;
    assert_eq!(
        PaymentOutcome::from_receipt(&receipt),
        PaymentOutcome::Succeeded
    );

    let backend = MockBackend::start(BackendScript {
        payment_status: "Success".to_string(),
        ..BackendScript::default()
    })?;
    let client = client_for(&backend);
    let receipt = client.process_payment("pay-123").await?;
    assert_eq!(
        PaymentOutcome::from_receipt(&receipt),
        PaymentOutcome::Failed
    );
    Ok(())
}
