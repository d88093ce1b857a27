//! Unified error taxonomy for the public operations.
//!
//! All variants are client-facing invalid-input conditions. The core is
//! deterministic, so no variant is ever worth retrying: a failure repeats
//! identically on the same inputs.

use std::error::Error;
use std::fmt::{Display, Formatter};

use jyotish_muhurta::MuhurtaError;
use jyotish_vedic::VedicError;

/// Errors surfaced by the facade.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum JyotishError {
    /// Astronomical computation failed: epoch outside the ephemeris range,
    /// polar-latitude house degeneracy, invalid location.
    Computation(VedicError),
    /// Search window too large or inverted.
    InvalidRange(&'static str),
    /// An input value outside its closed domain (mansion/sign numbers).
    InvalidInput(&'static str),
}

impl Display for JyotishError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Computation(e) => write!(f, "computation error: {e}"),
            Self::InvalidRange(msg) => write!(f, "invalid range: {msg}"),
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
        }
    }
}

impl Error for JyotishError {}

impl From<VedicError> for JyotishError {
    fn from(e: VedicError) -> Self {
        Self::Computation(e)
    }
}

impl From<MuhurtaError> for JyotishError {
    fn from(e: MuhurtaError) -> Self {
        match e {
            MuhurtaError::InvalidRange(msg) => Self::InvalidRange(msg),
            MuhurtaError::Computation(v) => Self::Computation(v),
            _ => unreachable!("MuhurtaError has no other variants"),
        }
    }
}
