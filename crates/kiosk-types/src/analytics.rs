use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Aggregate booking statistics, computed entirely server-side.
///
/// The client treats these as opaque display values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_bookings: u64,
    pub total_revenue: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popular_date: Option<PopularDate>,
}

/// The single most-booked date, when the backend has one to report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopularDate {
    pub date: NaiveDate,
    pub count: u64,
}
