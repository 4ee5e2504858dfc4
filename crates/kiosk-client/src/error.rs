use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything a backend call can come back with, beyond a good payload.
///
/// `Rejected` is the one application-level case: the booking endpoint
/// answered 2xx with an `{error}` body whose message is meant for the user
/// verbatim. Everything else is a transport failure as far as the views are
/// concerned.
#[derive(Debug)]
pub enum Error {
    /// Network-level failure (unreachable, timed out, connection reset)
    Transport(reqwest::Error),
    /// Backend answered with a non-2xx status
    Status(u16),
    /// Body arrived but was not the shape the contract promises
    Decode(serde_json::Error),
    /// Booking rejected by the backend with a structured error message
    Rejected(String),
}

impl Error {
    /// True for everything the UI lumps together as "an error occurred",
    /// as opposed to a rejection message to surface verbatim.
    pub fn is_transport(&self) -> bool {
        !matches!(self, Error::Rejected(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "transport error: {}", err),
            Error::Status(code) => write!(f, "backend answered with status {}", code),
            Error::Decode(err) => write!(f, "malformed backend response: {}", err),
            Error::Rejected(message) => write!(f, "booking rejected: {}", message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Decode(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}
