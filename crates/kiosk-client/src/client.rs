use chrono::NaiveDate;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use kiosk_types::{
    AnalyticsSummary, Booking, BookingRequest, PaymentReceipt, PriceList, ShowOption,
};

use crate::error::{Error, Result};

/// Where the backend lives when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Thin client over the six backend contracts.
///
/// No retries, no caching, no health checks: each call either resolves with
/// its payload or fails with one `Error`, and the caller decides what that
/// means for the view state.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

/// A 2xx `/api/book` body is either the booking or a structured rejection.
#[derive(Deserialize)]
#[serde(untagged)]
enum BookResponse {
    Rejected { error: String },
    Accepted(Booking),
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /api/dates — ordered available calendar dates
    pub async fn dates(&self) -> Result<Vec<NaiveDate>> {
        self.get_json("/api/dates").await
    }

    /// GET /api/prices — category name to unit price
    pub async fn prices(&self) -> Result<PriceList> {
        self.get_json("/api/prices").await
    }

    /// GET /api/shows — optional add-on events
    pub async fn shows(&self) -> Result<Vec<ShowOption>> {
        self.get_json("/api/shows").await
    }

    /// GET /api/analytics — server-side aggregates
    pub async fn analytics(&self) -> Result<AnalyticsSummary> {
        self.get_json("/api/analytics").await
    }

    /// POST /api/book — submit a booking.
    ///
    /// A 2xx body carrying `{error}` comes back as `Error::Rejected` with
    /// the backend's message untouched.
    pub async fn book(&self, request: &BookingRequest) -> Result<Booking> {
        let response = self
            .http
            .post(self.url("/api/book"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<BookResponse>(&body)? {
            BookResponse::Accepted(booking) => Ok(booking),
            BookResponse::Rejected { error } => Err(Error::Rejected(error)),
        }
    }

    /// POST /api/payment/process — settle a booking by its payment id.
    ///
    /// Returns the raw receipt; deciding what counts as success is the
    /// state machine's job, not the wire layer's.
    pub async fn process_payment(&self, payment_id: &str) -> Result<PaymentReceipt> {
        let response = self
            .http
            .post(self.url("/api/payment/process"))
            .json(&serde_json::json!({ "payment_id": payment_id }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.http.get(self.url(path)).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
