//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_ephem::EphemError;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from the ephemeris (epoch out of range).
    Ephem(EphemError),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Iterative algorithm did not converge.
    NoConvergence(&'static str),
    /// Invalid input value (index out of its closed range, bad argument).
    InvalidInput(&'static str),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephem(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for VedicError {}

impl From<EphemError> for VedicError {
    fn from(e: EphemError) -> Self {
        Self::Ephem(e)
    }
}
