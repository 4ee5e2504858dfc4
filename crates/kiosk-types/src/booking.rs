use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};

use crate::catalog::{PriceList, ShowId};

/// User-chosen quantities per ticket category, prior to submission.
///
/// Invariant: the key set tracks the fetched price list — every category the
/// backend prices has an entry here (zero until edited), and nothing else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketSelection(BTreeMap<String, u32>);

impl TicketSelection {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Zero-initialized selection for every category in the price list.
    pub fn zeroed_from(prices: &PriceList) -> Self {
        Self(prices.categories().map(|c| (c.to_string(), 0)).collect())
    }

    /// Re-key this selection against a refreshed price list: quantities for
    /// retained categories survive, new categories start at zero, removed
    /// categories are dropped.
    pub fn synced_with(&self, prices: &PriceList) -> Self {
        Self(
            prices
                .categories()
                .map(|c| (c.to_string(), self.quantity(c)))
                .collect(),
        )
    }

    pub fn quantity(&self, category: &str) -> u32 {
        self.0.get(category).copied().unwrap_or(0)
    }

    /// Replace one category's quantity, leaving all others untouched.
    /// Categories not present (not priced by the backend) are ignored.
    pub fn set_quantity(&mut self, category: &str, quantity: u32) {
        if let Some(slot) = self.0.get_mut(category) {
            *slot = quantity;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.0.iter().map(|(category, qty)| (category.as_str(), *qty))
    }

    pub fn total_tickets(&self) -> u32 {
        self.0.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, u32)> for TicketSelection {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outbound booking submission (POST /api/book).
///
/// The backend expects `show` to be the show id or the empty string, so
/// `None` serializes as `""` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub tickets: TicketSelection,
    #[serde(serialize_with = "show_or_empty")]
    pub show: Option<ShowId>,
}

fn show_or_empty<S: Serializer>(show: &Option<ShowId>, ser: S) -> Result<S::Ok, S::Error> {
    match show {
        Some(id) => ser.serialize_str(id.as_str()),
        None => ser.serialize_str(""),
    }
}

/// A confirmed reservation as returned by the backend.
///
/// Opaque to the client beyond display; `total_cost` is backend-computed and
/// must never be recomputed locally, and `payment_id` keys the payment step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub date: NaiveDate,
    pub tickets: TicketSelection,
    pub total_cost: f64,
    pub payment_id: String,
}

/// Raw payment response (POST /api/payment/process)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub status: String,
}

/// The two ways a payment attempt can end, as the view sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Succeeded,
    Failed,
}

impl PaymentOutcome {
    /// Succeeds only on the exact string `"success"`; any other status,
    /// including differently-cased variants, fails the payment.
    pub fn from_receipt(receipt: &PaymentReceipt) -> Self {
        if receipt.status == "success" {
            PaymentOutcome::Succeeded
        } else {
            PaymentOutcome::Failed
        }
    }
}

/// Client-tracked stage of the payment sub-flow, distinct from any
/// backend-side payment record. Only meaningful while a booking is held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    #[default]
    None,
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::None => write!(f, "none"),
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Completed => write!(f, "completed"),
            PaymentStatus::Failed => write!(f, "failed"),
        }
    }
}
