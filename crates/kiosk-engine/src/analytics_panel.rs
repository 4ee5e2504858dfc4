//! Toggleable analytics panel state.
//!
//! Opening the panel always starts a fresh fetch; closing it discards the
//! summary, so nothing is ever reused across toggles. A failed fetch lands
//! on a visible `Unavailable` state rather than loading forever.

use kiosk_types::AnalyticsSummary;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum AnalyticsPanel {
    #[default]
    Hidden,
    Loading,
    Ready(AnalyticsSummary),
    Unavailable { message: String },
}

impl AnalyticsPanel {
    pub fn is_visible(&self) -> bool {
        !matches!(self, AnalyticsPanel::Hidden)
    }

    /// Flip visibility. Returns the new state and whether a fetch must be
    /// started (exactly when the panel just became visible).
    pub fn toggled(self) -> (AnalyticsPanel, bool) {
        match self {
            AnalyticsPanel::Hidden => (AnalyticsPanel::Loading, true),
            _ => (AnalyticsPanel::Hidden, false),
        }
    }

    /// Resolve an in-flight fetch. Ignored unless the panel is still
    /// loading — the user may have closed it while the request was out.
    pub fn resolve(self, result: Result<AnalyticsSummary, String>) -> AnalyticsPanel {
        match self {
            AnalyticsPanel::Loading => match result {
                Ok(summary) => AnalyticsPanel::Ready(summary),
                Err(message) => AnalyticsPanel::Unavailable { message },
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> AnalyticsSummary {
        AnalyticsSummary {
            total_bookings: 4,
            total_revenue: 92.0,
            popular_date: None,
        }
    }

    #[test]
    fn every_reopen_requires_a_fresh_fetch() {
        let (panel, fetch) = AnalyticsPanel::Hidden.toggled();
        assert!(fetch);
        let panel = panel.resolve(Ok(sample_summary()));
        assert!(matches!(panel, AnalyticsPanel::Ready(_)));

        // Close: the summary is discarded, not memoized.
        let (panel, fetch) = panel.toggled();
        assert!(!fetch);
        assert_eq!(panel, AnalyticsPanel::Hidden);

        // Reopen: back to Loading with a new fetch.
        let (panel, fetch) = panel.toggled();
        assert!(fetch);
        assert_eq!(panel, AnalyticsPanel::Loading);
    }

    #[test]
    fn failure_is_visible_not_an_endless_placeholder() {
        let (panel, _) = AnalyticsPanel::Hidden.toggled();
        let panel = panel.resolve(Err("backend unreachable".to_string()));
        assert_eq!(
            panel,
            AnalyticsPanel::Unavailable {
                message: "backend unreachable".to_string()
            }
        );
    }

    #[test]
    fn late_result_after_close_is_dropped() {
        let (panel, _) = AnalyticsPanel::Hidden.toggled();
        let (panel, _) = panel.toggled(); // closed before the response
        let panel = panel.resolve(Ok(sample_summary()));
        assert_eq!(panel, AnalyticsPanel::Hidden);
    }
}
