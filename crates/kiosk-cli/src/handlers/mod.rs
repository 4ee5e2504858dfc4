pub mod analytics;
pub mod book;
pub mod catalog;
pub mod tui;
