//! Error types for the muhurta search.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_vedic::VedicError;

/// Errors from the window search.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MuhurtaError {
    /// The requested date range is inverted or exceeds the 90-day limit.
    InvalidRange(&'static str),
    /// Underlying calculation failure (location, epoch).
    Computation(VedicError),
}

impl Display for MuhurtaError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
            Self::Computation(e) => write!(f, "computation error: {e}"),
        }
    }
}

impl Error for MuhurtaError {}

impl From<VedicError> for MuhurtaError {
    fn from(e: VedicError) -> Self {
        Self::Computation(e)
    }
}
