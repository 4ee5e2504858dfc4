//! ViewModels for the booking screen.
//!
//! These define the complete data contract for the renderer: primitives and
//! pre-formatted strings only, every display decision already made by the
//! presenter. The renderer maps them to widgets and nothing else.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Complete screen state for one render pass
#[derive(Debug, Clone, Serialize)]
pub struct ScreenViewModel {
    pub header: HeaderViewModel,
    pub form: FormViewModel,
    pub outcome: OutcomeViewModel,
    /// None while the analytics panel is hidden
    pub analytics: Option<AnalyticsViewModel>,
    /// Blocking acknowledgement the user must dismiss (payment result)
    pub modal: Option<ModalViewModel>,
    pub status_bar: StatusBarViewModel,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderViewModel {
    pub title: String,
    pub backend_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormViewModel {
    pub date_display: String,
    pub date_selected: bool,
    pub ticket_rows: Vec<TicketRowViewModel>,
    pub show_display: String,
}

/// One selectable ticket category row
#[derive(Debug, Clone, Serialize)]
pub struct TicketRowViewModel {
    /// Backend category key, used to address quantity edits
    pub category: String,
    /// "Adult ($15):"
    pub label: String,
    pub quantity: u32,
}

/// What sits below the form: nothing, an error, or the booking summary
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeViewModel {
    None,
    Error { message: String },
    Summary(SummaryViewModel),
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryViewModel {
    pub date_line: String,
    /// "Adult tickets: 2" per category, in price-list order
    pub ticket_lines: Vec<String>,
    /// "Total Cost: $38" — verbatim from the booking response
    pub total_line: String,
    pub payment: PaymentViewModel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PaymentViewModel {
    Pending { action: String },
    Completed { message: String },
    Failed { message: String },
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalyticsViewModel {
    Loading,
    Ready { lines: Vec<String> },
    Unavailable { message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct ModalViewModel {
    pub message: String,
    pub level: StatusLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusBarViewModel {
    /// Latest non-fatal notice (e.g. a catalog fetch that failed)
    pub notice: Option<String>,
    pub key_hints: String,
    pub level: StatusLevel,
}
