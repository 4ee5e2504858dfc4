// NOTE: museum-kiosk engine rationale
//
// Why explicit tagged phases (not a booking + payment-status field pair)?
// - The original interface co-varied two independent fields; every render
//   site had to know which combinations were legal
// - A tagged variant makes illegal combinations (payment status without a
//   booking) unrepresentable
// - Transitions become pure functions that are unit-testable without any
//   rendering or network in the loop
//
// Why does the engine never talk to the network?
// - The handler owns the ApiClient and feeds outcomes back in as events
// - Request/response orchestration is sequenced by data dependencies only
//   (pay needs the payment_id a submit returned), so the engine only needs
//   to know what happened, never how

pub mod analytics_panel;
pub mod booking_flow;
pub mod form;

pub use analytics_panel::AnalyticsPanel;
pub use booking_flow::{
    BookingPhase, BookingState, CatalogEvent, FormEvent, SubmitOutcome, GENERIC_BOOKING_ERROR,
    MISSING_DATE_MESSAGE,
};
pub use form::SelectionForm;
