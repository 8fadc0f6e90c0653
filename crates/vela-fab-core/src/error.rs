//! Error types for the Vela FAB core primitives.

use std::fmt;

/// Frame-clock errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerError {
    /// The clock ID is invalid or has already been released.
    InvalidClockId,
}

impl fmt::Display for TickerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidClockId => write!(f, "Invalid or released clock ID"),
        }
    }
}

impl std::error::Error for TickerError {}

/// A specialized Result type for ticker operations.
pub type Result<T> = std::result::Result<T, TickerError>;
