//! The booking flow state machine.
//!
//! One tagged phase replaces the booking/payment-status field pair the
//! original interface co-varied. The handler feeds events in; every
//! transition here is a pure value-to-value step with no I/O.

use chrono::NaiveDate;
use kiosk_types::{
    Booking, Catalog, PaymentOutcome, PaymentStatus, PriceList, ShowId, ShowOption,
};

use crate::form::SelectionForm;

/// Message shown when a submit fails before reaching the backend.
pub const GENERIC_BOOKING_ERROR: &str = "An error occurred while processing your booking.";

/// Message shown when submit is refused locally because no date is selected.
pub const MISSING_DATE_MESSAGE: &str = "Please select a date.";

/// Where the booking flow currently stands.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BookingPhase {
    /// Form only; nothing submitted yet
    #[default]
    Idle,
    /// Form plus an error message from the last submit
    Rejected { message: String },
    /// A booking is held and can be paid for
    AwaitingPayment { booking: Booking },
    /// Terminal: payment went through
    Paid { booking: Booking },
    /// Terminal: payment was declined or never reached the gateway
    PaymentFailed { booking: Booking },
}

impl BookingPhase {
    /// The held booking, in any phase that has one
    pub fn booking(&self) -> Option<&Booking> {
        match self {
            BookingPhase::AwaitingPayment { booking }
            | BookingPhase::Paid { booking }
            | BookingPhase::PaymentFailed { booking } => Some(booking),
            BookingPhase::Idle | BookingPhase::Rejected { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            BookingPhase::Rejected { message } => Some(message),
            _ => None,
        }
    }

    /// Legacy pair-encoding of this phase, for display
    pub fn payment_status(&self) -> PaymentStatus {
        match self {
            BookingPhase::Idle | BookingPhase::Rejected { .. } => PaymentStatus::None,
            BookingPhase::AwaitingPayment { .. } => PaymentStatus::Pending,
            BookingPhase::Paid { .. } => PaymentStatus::Completed,
            BookingPhase::PaymentFailed { .. } => PaymentStatus::Failed,
        }
    }

    pub fn can_pay(&self) -> bool {
        matches!(self, BookingPhase::AwaitingPayment { .. })
    }
}

/// One of the three independent initialization fetches resolving.
///
/// Each writes a disjoint catalog slot, so completion order is immaterial.
/// A failed fetch produces no event at all: prior state stays untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    DatesLoaded(Vec<NaiveDate>),
    PricesLoaded(PriceList),
    ShowsLoaded(Vec<ShowOption>),
}

/// A local edit to the selection form. Never changes the phase.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    DateSelected(NaiveDate),
    QuantityChanged { category: String, quantity: u32 },
    ShowSelected(Option<ShowId>),
}

/// How a submitted booking request came back.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 2xx body without an error field
    Accepted(Booking),
    /// 2xx body carrying `{error}`; the message is surfaced verbatim
    RejectedByBackend(String),
    /// Network unreachable, non-2xx, or undecodable body
    TransportFailed,
}

/// The complete view state behind the booking page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingState {
    pub catalog: Catalog,
    pub form: SelectionForm,
    pub phase: BookingPhase,
}

impl BookingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_catalog(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::DatesLoaded(dates) => self.catalog.dates = dates,
            CatalogEvent::PricesLoaded(prices) => {
                self.form.sync_categories(&prices);
                self.catalog.prices = prices;
            }
            CatalogEvent::ShowsLoaded(shows) => self.catalog.shows = shows,
        }
    }

    pub fn apply_form(&mut self, event: FormEvent) {
        match event {
            FormEvent::DateSelected(date) => self.form.select_date(date),
            FormEvent::QuantityChanged { category, quantity } => {
                self.form.set_quantity(&category, quantity)
            }
            FormEvent::ShowSelected(show) => self.form.select_show(show),
        }
    }

    /// Begin a submit: yields the request to send, or refuses locally when
    /// no date is selected (the request never leaves the client).
    pub fn prepare_submit(&mut self) -> Option<kiosk_types::BookingRequest> {
        match self.form.to_request() {
            Some(request) => Some(request),
            None => {
                self.phase = BookingPhase::Rejected {
                    message: MISSING_DATE_MESSAGE.to_string(),
                };
                None
            }
        }
    }

    /// A submit discards whatever phase came before it, including terminal
    /// payment states; no history is retained.
    pub fn apply_submit(&mut self, outcome: SubmitOutcome) {
        self.phase = submit_transition(outcome);
    }

    pub fn apply_payment(&mut self, outcome: PaymentOutcome) {
        self.phase = payment_transition(std::mem::take(&mut self.phase), outcome);
    }
}

/// Phase after a submit resolves. Pure; the prior phase is irrelevant by the
/// re-submit rule (a new submission wipes booking and payment state).
pub fn submit_transition(outcome: SubmitOutcome) -> BookingPhase {
    match outcome {
        SubmitOutcome::Accepted(booking) => BookingPhase::AwaitingPayment { booking },
        SubmitOutcome::RejectedByBackend(message) => BookingPhase::Rejected { message },
        SubmitOutcome::TransportFailed => BookingPhase::Rejected {
            message: GENERIC_BOOKING_ERROR.to_string(),
        },
    }
}

/// Phase after a payment resolves. Only meaningful while awaiting payment;
/// a stray outcome in any other phase leaves it unchanged.
pub fn payment_transition(phase: BookingPhase, outcome: PaymentOutcome) -> BookingPhase {
    match phase {
        BookingPhase::AwaitingPayment { booking } => match outcome {
            PaymentOutcome::Succeeded => BookingPhase::Paid { booking },
            PaymentOutcome::Failed => BookingPhase::PaymentFailed { booking },
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_types::TicketSelection;

    fn sample_prices() -> PriceList {
        [
            ("adult".to_string(), 15.0),
            ("child".to_string(), 8.0),
            ("senior".to_string(), 10.0),
        ]
        .into_iter()
        .collect()
    }

    fn sample_booking() -> Booking {
        Booking {
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            tickets: [("adult".to_string(), 2), ("child".to_string(), 1)]
                .into_iter()
                .collect::<TicketSelection>(),
            total_cost: 38.0,
            payment_id: "pay-123".to_string(),
        }
    }

    #[test]
    fn prices_load_zero_initializes_every_category() {
        let mut state = BookingState::new();
        state.apply_catalog(CatalogEvent::PricesLoaded(sample_prices()));

        for category in ["adult", "child", "senior"] {
            assert_eq!(state.form.tickets.quantity(category), 0);
        }
        assert_eq!(state.form.tickets.iter().count(), 3);
    }

    #[test]
    fn catalog_slots_are_disjoint() {
        // Shows landing before dates and prices must not disturb anything.
        let mut state = BookingState::new();
        state.apply_catalog(CatalogEvent::ShowsLoaded(vec![ShowOption {
            id: ShowId::new("1"),
            name: "Night at the Museum".to_string(),
            price: 12.0,
        }]));
        assert!(state.catalog.dates.is_empty());
        assert!(state.catalog.prices.is_empty());

        state.apply_catalog(CatalogEvent::DatesLoaded(vec![
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        ]));
        assert_eq!(state.catalog.shows.len(), 1);
        assert_eq!(state.catalog.dates.len(), 1);
    }

    #[test]
    fn accepted_booking_clears_prior_error_and_awaits_payment() {
        let mut state = BookingState::new();
        state.phase = BookingPhase::Rejected {
            message: "Sold out".to_string(),
        };

        state.apply_submit(SubmitOutcome::Accepted(sample_booking()));

        assert!(state.phase.error_message().is_none());
        assert_eq!(state.phase.payment_status(), PaymentStatus::Pending);
        assert!(state.phase.can_pay());
    }

    #[test]
    fn rejected_booking_never_holds_a_summary() {
        let mut state = BookingState::new();
        state.apply_submit(SubmitOutcome::Accepted(sample_booking()));

        state.apply_submit(SubmitOutcome::RejectedByBackend("Sold out".to_string()));

        assert!(state.phase.booking().is_none());
        assert_eq!(state.phase.error_message(), Some("Sold out"));
        assert_eq!(state.phase.payment_status(), PaymentStatus::None);
    }

    #[test]
    fn transport_failure_surfaces_the_generic_message() {
        let mut state = BookingState::new();
        state.apply_submit(SubmitOutcome::TransportFailed);
        assert_eq!(state.phase.error_message(), Some(GENERIC_BOOKING_ERROR));
    }

    #[test]
    fn payment_outcomes_from_awaiting_payment() {
        let paid = payment_transition(
            BookingPhase::AwaitingPayment {
                booking: sample_booking(),
            },
            PaymentOutcome::Succeeded,
        );
        assert_eq!(paid.payment_status(), PaymentStatus::Completed);

        let failed = payment_transition(
            BookingPhase::AwaitingPayment {
                booking: sample_booking(),
            },
            PaymentOutcome::Failed,
        );
        assert_eq!(failed.payment_status(), PaymentStatus::Failed);
        // The booking summary stays visible either way
        assert!(failed.booking().is_some());
    }

    #[test]
    fn stray_payment_outcome_is_ignored_outside_awaiting_payment() {
        let mut state = BookingState::new();
        state.apply_payment(PaymentOutcome::Succeeded);
        assert_eq!(state.phase, BookingPhase::Idle);
    }

    #[test]
    fn resubmit_from_terminal_payment_state_discards_everything() {
        let mut state = BookingState::new();
        state.apply_submit(SubmitOutcome::Accepted(sample_booking()));
        state.apply_payment(PaymentOutcome::Failed);
        assert_eq!(state.phase.payment_status(), PaymentStatus::Failed);

        let second = Booking {
            payment_id: "pay-456".to_string(),
            ..sample_booking()
        };
        state.apply_submit(SubmitOutcome::Accepted(second));

        assert_eq!(state.phase.payment_status(), PaymentStatus::Pending);
        assert_eq!(
            state.phase.booking().map(|b| b.payment_id.as_str()),
            Some("pay-456")
        );
    }

    #[test]
    fn dateless_submit_is_refused_locally() {
        let mut state = BookingState::new();
        state.apply_catalog(CatalogEvent::PricesLoaded(sample_prices()));

        assert!(state.prepare_submit().is_none());
        assert_eq!(state.phase.error_message(), Some(MISSING_DATE_MESSAGE));
    }

    #[test]
    fn submit_with_date_needs_no_tickets_or_show() {
        let mut state = BookingState::new();
        state.apply_catalog(CatalogEvent::PricesLoaded(sample_prices()));
        state.apply_form(FormEvent::DateSelected(
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        ));

        let request = state.prepare_submit().expect("date selected");
        assert_eq!(request.tickets.total_tickets(), 0);
        assert!(request.show.is_none());
    }
}
