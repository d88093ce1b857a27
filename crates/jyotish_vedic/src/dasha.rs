//! Vimshottari dasha (planetary period) timeline.
//!
//! The Vimshottari system allocates 120 years across 9 rulers in a fixed
//! cycle. The Moon's nakshatra at birth picks the entry ruler, and the
//! fraction of the nakshatra arc already traversed truncates the first
//! period. Sub-periods redistribute a parent period across the same cycle
//! starting from the parent's own ruler.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN, nakshatra_from_longitude};

/// Year length used for dasha period arithmetic.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Total Vimshottari cycle length in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// The 9-ruler Vimshottari cycle, entry order.
pub const VIMSHOTTARI_GRAHAS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Nesting level of a dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashaLevel {
    /// Major period (level 1).
    Mahadasha,
    /// Sub-period (level 2).
    Antardasha,
    /// Sub-sub-period (level 3).
    Pratyantardasha,
}

impl DashaLevel {
    /// 1-based level number.
    pub const fn number(self) -> u8 {
        match self {
            Self::Mahadasha => 1,
            Self::Antardasha => 2,
            Self::Pratyantardasha => 3,
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// Ruling graha.
    pub graha: Graha,
    /// Start, JD UTC (inclusive).
    pub start_jd: f64,
    /// End, JD UTC (exclusive).
    pub end_jd: f64,
    /// Nesting level.
    pub level: DashaLevel,
    /// Duration in years of 365.25 days.
    pub duration_years: f64,
}

impl DashaPeriod {
    /// Duration in days.
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }
}

/// Level-1 Vimshottari timeline from the Moon's sidereal longitude at birth.
///
/// The first period is the entry ruler's allocation truncated by the
/// fraction of the birth nakshatra already elapsed; subsequent periods are
/// full-length in cycle order. Periods are emitted while they *start*
/// within `horizon_years` of birth.
pub fn vimshottari_timeline(
    moon_sidereal_lon: f64,
    birth_jd: f64,
    horizon_years: f64,
) -> Vec<DashaPeriod> {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let start_idx = (info.nakshatra.index() % 9) as usize;

    let fraction_passed = info.degrees_in_nakshatra / NAKSHATRA_SPAN;
    let entry_graha = VIMSHOTTARI_GRAHAS[start_idx];
    let first_years = entry_graha.vimshottari_years() * (1.0 - fraction_passed);

    let mut periods = Vec::with_capacity(10);
    let mut cursor = birth_jd;

    let end = cursor + first_years * DAYS_PER_YEAR;
    periods.push(DashaPeriod {
        graha: entry_graha,
        start_jd: cursor,
        end_jd: end,
        level: DashaLevel::Mahadasha,
        duration_years: first_years,
    });
    cursor = end;

    for i in 1..10 {
        if (cursor - birth_jd) / DAYS_PER_YEAR > horizon_years {
            break;
        }
        let graha = VIMSHOTTARI_GRAHAS[(start_idx + i) % 9];
        let years = graha.vimshottari_years();
        let end = cursor + years * DAYS_PER_YEAR;
        periods.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
            level: DashaLevel::Mahadasha,
            duration_years: years,
        });
        cursor = end;
    }

    periods
}

/// Sub-periods of a parent period: the 9-ruler cycle starting from the
/// parent's own ruler, each child proportional to its ruler's allocation.
///
/// The final child's end is snapped to the parent's end so the children
/// always sum exactly to the parent duration. Returns an empty list for a
/// level-3 parent (no deeper level is defined).
pub fn sub_periods(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };

    let parent_days = parent.duration_days();
    let parent_pos = VIMSHOTTARI_GRAHAS
        .iter()
        .position(|&g| g == parent.graha)
        .unwrap_or(0);

    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;

    for i in 0..9 {
        let graha = VIMSHOTTARI_GRAHAS[(parent_pos + i) % 9];
        let ratio = graha.vimshottari_years() / VIMSHOTTARI_TOTAL_YEARS;
        let days = parent_days * ratio;
        let end = cursor + days;
        children.push(DashaPeriod {
            graha,
            start_jd: cursor,
            end_jd: end,
            level: child_level,
            duration_years: days / DAYS_PER_YEAR,
        });
        cursor = end;
    }

    // Absorb floating-point drift into the last child.
    if let Some(last) = children.last_mut() {
        last.end_jd = parent.end_jd;
        last.duration_years = (last.end_jd - last.start_jd) / DAYS_PER_YEAR;
    }

    children
}
