//! Convenience facade for the jyotish calculation core.
//!
//! Exposes the four public operations the HTTP layer consumes —
//! [`calculate_chart`], [`calculate_daily_calendar`], [`find_windows`],
//! and [`score_compatibility`] — with a unified error taxonomy, plus the
//! coordinate validator and the cache-key helper for the external
//! key-value cache collaborator.
//!
//! # Quick start
//!
//! ```rust
//! use jyotish_rs::*;
//!
//! let birth: Moment = "1990-05-15T14:30:00Z".parse().unwrap();
//! let chart = calculate_chart(&birth, 28.6139, 77.209, "lahiri").unwrap();
//! println!("Moon in {}", chart.moon().rashi.name());
//! ```

pub mod api;
pub mod cache;
pub mod error;

pub use api::{
    CompatibilityResult, calculate_chart, calculate_daily_calendar, find_windows,
    score_compatibility, validate_coordinates,
};
pub use cache::{KeyValueCache, cache_key};
pub use error::JyotishError;

// Re-export the core types so callers need only `use jyotish_rs::*`.
pub use jyotish_kundali::{Ascendant, GrahaPosition, HouseCusp, Kundali};
pub use jyotish_kuta::{AshtakootaMatch, NorthRecommendation, SouthIndianMatch, SouthRecommendation};
pub use jyotish_muhurta::{EventKind, MuhurtaSearch, MuhurtaWindow, Quality, SearchFilters};
pub use jyotish_panchang::Panchang;
pub use jyotish_time::Moment;
pub use jyotish_vedic::{
    Ayanamsha, DashaLevel, DashaPeriod, Graha, Karana, Masa, Nakshatra, Paksha, Rashi, Samvatsara,
    Tithi, Vaar, Yoga,
};
