//! Muhurta (auspicious time window) search.
//!
//! Walks a bounded date range, scores each day's panchang against
//! event-specific rule tables, removes the inauspicious sub-day intervals
//! from the daylight span, and ranks the surviving windows.
//!
//! Also provides the Choghadiya and Hora day-segment systems.

pub mod error;
pub mod rules;
pub mod search;
pub mod segments;
pub mod types;

pub use error::MuhurtaError;
pub use rules::{EventKind, EventRules};
pub use search::{MAX_RANGE_DAYS, find_muhurta};
pub use segments::{
    Choghadiya, ChoghadiyaNature, ChoghadiyaSegment, DayChoghadiya, DayHoras, HoraSegment,
    choghadiya_for_date, horas_for_date,
};
pub use types::{MuhurtaSearch, MuhurtaWindow, Quality, SearchFilters};
