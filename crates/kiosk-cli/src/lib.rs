// NOTE: museum-kiosk CLI architecture
//
// Why is every backend value displayed verbatim (never recomputed)?
// - Pricing and availability are backend-owned; the client re-deriving a
//   total would drift the moment the backend changes a price rule
// - The summary therefore echoes total_cost exactly as the response carried
//   it
//
// Why a handler thread + renderer thread for the TUI (not one loop)?
// - The renderer owns the terminal and must keep drawing while a request is
//   in flight
// - The handler owns all domain state and the HTTP client; the renderer only
//   ever sees complete ScreenViewModels
// - Signals (user intents) flow back over a second channel, so the renderer
//   makes no domain decisions at all

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{CatalogCommand, Cli, Commands};
pub use commands::run;
