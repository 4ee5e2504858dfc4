use std::fmt;

/// Result type for kiosk-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// A ticket argument was not CATEGORY=COUNT with a whole-number count
    InvalidQuantity(String),
    /// A calendar date string was not ISO-8601
    InvalidDate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidQuantity(raw) => {
                write!(f, "invalid ticket '{}': expected CATEGORY=COUNT", raw)
            }
            Error::InvalidDate(raw) => {
                write!(f, "invalid date '{}': expected YYYY-MM-DD", raw)
            }
        }
    }
}

impl std::error::Error for Error {}
