//! Presenter for the booking screen.
//!
//! PURE FUNCTIONS that convert engine state into ViewModels. No state is
//! held here (the handler owns it) and no widget is touched here (the
//! renderer owns those); everything display-shaped happens in this module.

use kiosk_engine::{AnalyticsPanel, BookingPhase, BookingState};
use kiosk_types::Booking;

use crate::presentation::formatters::{capitalize, format_date_iso, format_date_long, format_price};
use crate::presentation::view_models::{
    AnalyticsViewModel, FormViewModel, HeaderViewModel, ModalViewModel, OutcomeViewModel,
    PaymentViewModel, ScreenViewModel, StatusBarViewModel, StatusLevel, SummaryViewModel,
    TicketRowViewModel,
};

/// Build the complete screen from current domain state.
///
/// Called by the handler after every event; produces a full snapshot of
/// what the TUI should display.
pub fn build_screen(
    state: &BookingState,
    panel: &AnalyticsPanel,
    backend_url: &str,
    notice: Option<&str>,
    modal: Option<&ModalViewModel>,
) -> ScreenViewModel {
    ScreenViewModel {
        header: HeaderViewModel {
            title: "Museum Ticket Booking".to_string(),
            backend_url: backend_url.to_string(),
        },
        form: build_form(state),
        outcome: build_outcome(&state.phase),
        analytics: build_analytics(panel),
        modal: modal.cloned(),
        status_bar: build_status_bar(panel, notice),
    }
}

fn build_form(state: &BookingState) -> FormViewModel {
    let date_display = match state.form.date {
        Some(date) => format_date_long(date),
        None if state.catalog.dates.is_empty() => "No dates available yet".to_string(),
        None => "Select a date".to_string(),
    };

    let ticket_rows = state
        .catalog
        .prices
        .iter()
        .map(|(category, price)| TicketRowViewModel {
            category: category.to_string(),
            label: format!("{} ({}):", capitalize(category), format_price(price)),
            quantity: state.form.tickets.quantity(category),
        })
        .collect();

    let show_display = match &state.form.show {
        Some(id) => match state.catalog.show(id) {
            Some(show) => format!("{} - {}", show.name, format_price(show.price)),
            None => id.to_string(),
        },
        None => "No show".to_string(),
    };

    FormViewModel {
        date_display,
        date_selected: state.form.date.is_some(),
        ticket_rows,
        show_display,
    }
}

fn build_outcome(phase: &BookingPhase) -> OutcomeViewModel {
    match phase {
        BookingPhase::Idle => OutcomeViewModel::None,
        BookingPhase::Rejected { message } => OutcomeViewModel::Error {
            message: message.clone(),
        },
        BookingPhase::AwaitingPayment { booking } => OutcomeViewModel::Summary(build_summary(
            booking,
            PaymentViewModel::Pending {
                action: "Pay Now".to_string(),
            },
        )),
        BookingPhase::Paid { booking } => OutcomeViewModel::Summary(build_summary(
            booking,
            PaymentViewModel::Completed {
                message: "Payment completed successfully!".to_string(),
            },
        )),
        BookingPhase::PaymentFailed { booking } => OutcomeViewModel::Summary(build_summary(
            booking,
            PaymentViewModel::Failed {
                message: "Payment failed. Please try again.".to_string(),
            },
        )),
    }
}

/// Summary lines echo the booking response; `total_cost` in particular is
/// displayed verbatim, never recomputed from prices.
fn build_summary(booking: &Booking, payment: PaymentViewModel) -> SummaryViewModel {
    SummaryViewModel {
        date_line: format!("Date: {}", format_date_iso(booking.date)),
        ticket_lines: booking
            .tickets
            .iter()
            .map(|(category, quantity)| format!("{} tickets: {}", capitalize(category), quantity))
            .collect(),
        total_line: format!("Total Cost: {}", format_price(booking.total_cost)),
        payment,
    }
}

fn build_analytics(panel: &AnalyticsPanel) -> Option<AnalyticsViewModel> {
    match panel {
        AnalyticsPanel::Hidden => None,
        AnalyticsPanel::Loading => Some(AnalyticsViewModel::Loading),
        AnalyticsPanel::Ready(summary) => {
            let mut lines = vec![
                format!("Total Bookings: {}", summary.total_bookings),
                format!("Total Revenue: {}", format_price(summary.total_revenue)),
            ];
            if let Some(popular) = &summary.popular_date {
                lines.push(format!(
                    "Most Popular Date: {} (Bookings: {})",
                    format_date_long(popular.date),
                    popular.count
                ));
            }
            Some(AnalyticsViewModel::Ready { lines })
        }
        AnalyticsPanel::Unavailable { message } => Some(AnalyticsViewModel::Unavailable {
            message: message.clone(),
        }),
    }
}

fn build_status_bar(panel: &AnalyticsPanel, notice: Option<&str>) -> StatusBarViewModel {
    let analytics_hint = if panel.is_visible() {
        "a hide analytics"
    } else {
        "a show analytics"
    };
    StatusBarViewModel {
        notice: notice.map(|s| s.to_string()),
        key_hints: format!(
            "tab/arrows navigate | enter submit | p pay | {} | q quit",
            analytics_hint
        ),
        level: if notice.is_some() {
            StatusLevel::Warning
        } else {
            StatusLevel::Info
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kiosk_engine::{CatalogEvent, SubmitOutcome};
    use kiosk_types::{PriceList, TicketSelection};

    fn loaded_state() -> BookingState {
        let mut state = BookingState::new();
        let prices: PriceList = [
            ("adult".to_string(), 15.0),
            ("child".to_string(), 8.0),
        ]
        .into_iter()
        .collect();
        state.apply_catalog(CatalogEvent::PricesLoaded(prices));
        state
    }

    fn sample_booking(total: f64) -> Booking {
        Booking {
            date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            tickets: [("adult".to_string(), 2), ("child".to_string(), 1)]
                .into_iter()
                .collect::<TicketSelection>(),
            total_cost: total,
            payment_id: "pay-1".to_string(),
        }
    }

    #[test]
    fn form_rows_follow_the_price_list() {
        let state = loaded_state();
        let screen = build_screen(&state, &AnalyticsPanel::Hidden, "http://b", None, None);

        let labels: Vec<_> = screen.form.ticket_rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Adult ($15):", "Child ($8):"]);
        assert!(screen.form.ticket_rows.iter().all(|r| r.quantity == 0));
    }

    #[test]
    fn total_line_echoes_the_response_verbatim() {
        let mut state = loaded_state();
        state.apply_submit(SubmitOutcome::Accepted(sample_booking(25.0)));

        let screen = build_screen(&state, &AnalyticsPanel::Hidden, "http://b", None, None);
        match screen.outcome {
            OutcomeViewModel::Summary(summary) => {
                assert_eq!(summary.total_line, "Total Cost: $25");
                assert_eq!(
                    summary.ticket_lines,
                    vec!["Adult tickets: 2", "Child tickets: 1"]
                );
                assert!(matches!(summary.payment, PaymentViewModel::Pending { .. }));
            }
            other => panic!("expected summary, got {:?}", other),
        }
    }

    #[test]
    fn rejection_renders_the_message_and_no_summary() {
        let mut state = loaded_state();
        state.apply_submit(SubmitOutcome::RejectedByBackend("Sold out".to_string()));

        let screen = build_screen(&state, &AnalyticsPanel::Hidden, "http://b", None, None);
        match screen.outcome {
            OutcomeViewModel::Error { message } => assert_eq!(message, "Sold out"),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn hidden_panel_renders_nothing_loading_renders_placeholder() {
        let state = loaded_state();
        let screen = build_screen(&state, &AnalyticsPanel::Hidden, "http://b", None, None);
        assert!(screen.analytics.is_none());

        let screen = build_screen(&state, &AnalyticsPanel::Loading, "http://b", None, None);
        assert!(matches!(screen.analytics, Some(AnalyticsViewModel::Loading)));
    }
}
