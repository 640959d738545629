//! Error types for date parsing and validation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// Input text is not a `YYYY-MM-DD` date.
    Parse(String),
    /// Fields parsed but do not name a real calendar day.
    InvalidDate(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for TimeError {}
