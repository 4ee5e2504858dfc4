//! Renderers: map ViewModels to a concrete output surface.
//!
//! The TUI renderer owns terminal setup and UI-only state (focus, quit flag)
//! and exchanges messages with the handler over channels.

mod tui;

pub use tui::{TuiEvent, TuiRenderer, UiSignal};
