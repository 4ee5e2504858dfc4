//! Widget wrappers for the booking screen.
//!
//! Each view maps one ViewModel to ratatui widgets; all display decisions
//! were already made by the presenter.

mod analytics;
mod form;
mod outcome;
mod status_bar;

pub use analytics::AnalyticsPanelView;
pub use form::{FormFocus, FormView};
pub use outcome::OutcomeView;
pub use status_bar::StatusBarView;

use ratatui::style::Color;

use crate::presentation::view_models::StatusLevel;

pub fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Success => Color::Green,
        StatusLevel::Warning => Color::Yellow,
        StatusLevel::Error => Color::Red,
    }
}
