//! Error types for time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from calendar parsing and conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeError {
    /// A date/time string could not be parsed or is out of range.
    InvalidDate(&'static str),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
        }
    }
}

impl Error for TimeError {}
