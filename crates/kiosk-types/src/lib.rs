pub mod analytics;
pub mod booking;
pub mod catalog;
pub mod error;

pub use analytics::*;
pub use booking::*;
pub use catalog::*;
pub use error::{Error, Result};
