pub mod client;
pub mod error;

pub use client::{ApiClient, DEFAULT_BACKEND_URL};
pub use error::{Error, Result};
