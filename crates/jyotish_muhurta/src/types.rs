//! Search result records and filters.

use serde::{Deserialize, Serialize};

use jyotish_time::Moment;
use jyotish_vedic::{Karana, Nakshatra, Tithi, Vaar, Yoga};

use crate::rules::EventKind;

/// Quality tier of a window, from its numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quality {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl Quality {
    /// Tier for a score: ≥80 excellent, ≥60 good, ≥40 moderate, else poor.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Excellent
        } else if score >= 60.0 {
            Self::Good
        } else if score >= 40.0 {
            Self::Moderate
        } else {
            Self::Poor
        }
    }
}

/// One auspicious time window. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuhurtaWindow {
    pub start: Moment,
    pub end: Moment,
    /// Score in [0, 100].
    pub score: f64,
    pub quality: Quality,
    pub event: EventKind,

    /// The day's panchang elements at the window.
    pub tithi: Tithi,
    pub nakshatra: Nakshatra,
    pub yoga: Yoga,
    pub karana: Karana,
    pub vaar: Vaar,

    /// Factors that raised the score.
    pub positive_factors: Vec<String>,
    /// Factors that lowered the score.
    pub negative_factors: Vec<String>,
    /// Advisory notes (avoided lunar month, etc.).
    pub warnings: Vec<String>,
}

/// Caller-controlled search filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Exclude windows overlapping Rahu Kalam. Default true.
    pub avoid_rahu_kalam: bool,
    /// Exclude windows overlapping Yamagandam. Default true.
    /// Gulika Kalam is always excluded.
    pub avoid_yamagandam: bool,
    /// Extra 1-based nakshatra numbers that disqualify a whole day.
    pub exclude_nakshatras: Vec<u8>,
    /// Extra 1-based tithi numbers that disqualify a whole day.
    pub exclude_tithis: Vec<u8>,
    /// Maximum windows returned. Default 20.
    pub max_results: usize,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            avoid_rahu_kalam: true,
            avoid_yamagandam: true,
            exclude_nakshatras: Vec::new(),
            exclude_tithis: Vec::new(),
            max_results: 20,
        }
    }
}

/// Result of a muhurta search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuhurtaSearch {
    pub event: EventKind,
    pub search_start: Moment,
    pub search_end: Moment,
    pub latitude_deg: f64,
    pub longitude_deg: f64,

    /// Ranked windows, best first.
    pub windows: Vec<MuhurtaWindow>,
    pub total_found: usize,
    /// The top-ranked window, duplicated for convenience.
    pub best_window: Option<MuhurtaWindow>,

    pub filters: SearchFilters,
}
