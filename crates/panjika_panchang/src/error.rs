use std::error::Error;
use std::fmt::{Display, Formatter};

use panjika_core::EngineError;

/// Errors that abort a run.
#[derive(Debug)]
#[non_exhaustive]
pub enum PanchangError {
    /// The position provider failed for some day.
    Engine(EngineError),
    /// The report could not be serialized or written.
    Report(String),
}

impl Display for PanchangError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(e) => write!(f, "ephemeris error: {e}"),
            Self::Report(msg) => write!(f, "report error: {msg}"),
        }
    }
}

impl Error for PanchangError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            Self::Report(_) => None,
        }
    }
}

impl From<EngineError> for PanchangError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

impl From<serde_json::Error> for PanchangError {
    fn from(e: serde_json::Error) -> Self {
        Self::Report(e.to_string())
    }
}

impl From<std::io::Error> for PanchangError {
    fn from(e: std::io::Error) -> Self {
        Self::Report(e.to_string())
    }
}
