use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ticket prices as published by the backend.
///
/// Categories are backend-defined ("adult", "child", "senior", ...) and must
/// never be hardcoded on the client; the selection form derives its rows from
/// whatever this map contains. Ordered so rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceList(BTreeMap<String, f64>);

impl PriceList {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, category: impl Into<String>, unit_price: f64) {
        self.0.insert(category.into(), unit_price);
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0.get(category).copied()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(category, price)| (category.as_str(), *price))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for PriceList {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Backend-assigned show identifier (opaque to the client)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShowId(String);

impl ShowId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ShowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An optional add-on event offered alongside the ticket categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShowOption {
    pub id: ShowId,
    pub name: String,
    pub price: f64,
}

/// Everything the booking form needs from the backend before the user can
/// make a selection. Each slot is fetched independently; a slot left at its
/// default means that fetch has not succeeded (yet).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub dates: Vec<NaiveDate>,
    pub prices: PriceList,
    pub shows: Vec<ShowOption>,
}

impl Catalog {
    pub fn show(&self, id: &ShowId) -> Option<&ShowOption> {
        self.shows.iter().find(|show| &show.id == id)
    }
}
