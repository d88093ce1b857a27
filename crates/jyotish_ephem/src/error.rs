//! Error types for the ephemeris.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from ephemeris evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemError {
    /// The requested epoch lies outside the supported 1800..2200 range.
    EpochOutOfRange { jd: f64 },
}

impl Display for EphemError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EpochOutOfRange { jd } => {
                write!(f, "epoch out of supported ephemeris range: JD {jd}")
            }
        }
    }
}

impl Error for EphemError {}
