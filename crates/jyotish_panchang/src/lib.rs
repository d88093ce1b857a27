//! Panchang (daily calendar) computation.
//!
//! Derives the five daily elements — tithi, nakshatra, yoga, karana,
//! vaar — together with sunrise/sunset/moonrise/moonset and the three
//! inauspicious day intervals (Rahu Kalam, Yamagandam, Gulika Kalam)
//! for a date and location.
//!
//! Every result is a pure function of (date, location, ayanamsha): safe
//! to memoize by that key, byte-identical on repeat calls.

pub mod kalam;
pub mod panchang;
pub mod types;

pub use kalam::{KalamKind, kalam_interval};
pub use panchang::{calculate_panchang, monthly_panchang};
pub use types::{
    Kalam, KaranaDetail, MoonTiming, NakshatraDetail, Panchang, SunTiming, TithiDetail,
    YogaDetail,
};
