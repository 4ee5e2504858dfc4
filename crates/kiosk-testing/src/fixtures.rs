//! Canned backend data mirroring the production service's seed set.

use chrono::NaiveDate;

use kiosk_types::{AnalyticsSummary, PopularDate, ShowId, ShowOption};

use crate::backend::BackendScript;

/// Seven consecutive bookable days starting from a fixed date, so test
/// output is deterministic.
pub fn sample_dates() -> Vec<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    (0..7).map(|offset| first + chrono::Days::new(offset)).collect()
}

pub fn sample_prices() -> Vec<(String, f64)> {
    vec![
        ("adult".to_string(), 15.0),
        ("child".to_string(), 8.0),
        ("senior".to_string(), 10.0),
    ]
}

pub fn sample_shows() -> Vec<ShowOption> {
    vec![
        ShowOption {
            id: ShowId::new("1"),
            name: "Dinosaur Night Tour".to_string(),
            price: 12.0,
        },
        ShowOption {
            id: ShowId::new("2"),
            name: "Planetarium Lights".to_string(),
            price: 9.5,
        },
    ]
}

pub fn sample_analytics() -> AnalyticsSummary {
    AnalyticsSummary {
        total_bookings: 4,
        total_revenue: 92.0,
        popular_date: Some(PopularDate {
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            count: 3,
        }),
    }
}

/// The default everything-works script.
pub fn sample_script() -> BackendScript {
    BackendScript {
        dates: sample_dates(),
        prices: sample_prices(),
        shows: sample_shows(),
        analytics: sample_analytics(),
        fail_dates: false,
        fail_prices: false,
        fail_shows: false,
        fail_analytics: false,
        fail_booking: false,
        reject_booking_with: None,
        payment_status: "success".to_string(),
        fail_payment: false,
    }
}
