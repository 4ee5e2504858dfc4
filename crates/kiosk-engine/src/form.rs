use chrono::NaiveDate;
use kiosk_types::{BookingRequest, PriceList, ShowId, TicketSelection};

/// The user's in-progress selection: a date, per-category quantities and an
/// optional show. Lives for exactly as long as the view; nothing persists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionForm {
    pub date: Option<NaiveDate>,
    pub tickets: TicketSelection,
    pub show: Option<ShowId>,
}

impl SelectionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-key the ticket rows against a (re)fetched price list. Quantities
    /// for categories the backend still prices are kept.
    pub fn sync_categories(&mut self, prices: &PriceList) {
        self.tickets = self.tickets.synced_with(prices);
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn set_quantity(&mut self, category: &str, quantity: u32) {
        self.tickets.set_quantity(category, quantity);
    }

    pub fn select_show(&mut self, show: Option<ShowId>) {
        self.show = show;
    }

    /// Build the outbound request, or nothing when no date is selected.
    /// Quantities and show are optional by contract and default to
    /// zero/none, so only the date gates submission.
    pub fn to_request(&self) -> Option<BookingRequest> {
        let date = self.date?;
        Some(BookingRequest {
            date,
            tickets: self.tickets.clone(),
            show: self.show.clone(),
        })
    }
}
