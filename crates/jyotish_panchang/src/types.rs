//! Panchang result records.

use serde::{Deserialize, Serialize};

use jyotish_time::Moment;
use jyotish_vedic::{
    Ayanamsha, Graha, Karana, Masa, Nakshatra, Paksha, Samvatsara, Tithi, Vaar, Yoga, YogaNature,
};

use crate::kalam::KalamKind;

/// Tithi element with its estimated end time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiDetail {
    /// 1-based tithi number, 1..=30.
    pub number: u8,
    /// Tithi name.
    pub tithi: Tithi,
    /// Bright or dark fortnight.
    pub paksha: Paksha,
    /// Percentage of the tithi already elapsed at the reference moment.
    pub percent_elapsed: f64,
    /// Estimated end (linear extrapolation at the mean relative rate).
    pub end: Moment,
}

/// Moon's nakshatra element with its estimated end time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraDetail {
    /// 1-based nakshatra number, 1..=27.
    pub number: u8,
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// Pada (quarter), 1-4.
    pub pada: u8,
    /// Vimshottari lord of the nakshatra.
    pub lord: Graha,
    /// Estimated end (linear extrapolation at the Moon's mean rate).
    pub end: Moment,
}

/// Yoga element with its estimated end time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaDetail {
    /// 1-based yoga number, 1..=27.
    pub number: u8,
    /// The yoga.
    pub yoga: Yoga,
    /// Fixed nature from the 27-entry table.
    pub nature: YogaNature,
    /// Estimated end (linear extrapolation at the combined mean rate).
    pub end: Moment,
}

/// Karana (half-tithi) element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaDetail {
    /// 1-based half-tithi slot in the synodic month, 1..=60.
    pub number: u8,
    /// The karana occupying the slot.
    pub karana: Karana,
    /// Whether the karana is one of the four fixed ones.
    pub fixed: bool,
}

/// Sun-related timings for the day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunTiming {
    pub sunrise: Moment,
    pub sunset: Moment,
    /// Midpoint of sunrise and sunset.
    pub noon: Moment,
    /// Daylight span in hours.
    pub day_length_hours: f64,
}

/// Moon-related timings for the day. Either event may not occur.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonTiming {
    pub moonrise: Option<Moment>,
    pub moonset: Option<Moment>,
}

/// One inauspicious sub-day interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Kalam {
    /// Which interval this is.
    pub kind: KalamKind,
    pub start: Moment,
    pub end: Moment,
}

/// Complete panchang for a date and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panchang {
    /// The civil date (midnight UTC).
    pub date: Moment,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// Ayanamsha system used.
    pub ayanamsha: Ayanamsha,

    pub tithi: TithiDetail,
    pub nakshatra: NakshatraDetail,
    pub yoga: YogaDetail,
    pub karana: KaranaDetail,

    /// Weekday.
    pub vaar: Vaar,
    /// Ruling planet of the weekday.
    pub vaar_lord: Graha,

    pub sun_timing: SunTiming,
    pub moon_timing: MoonTiming,

    pub rahu_kalam: Kalam,
    pub yamagandam: Kalam,
    pub gulika_kalam: Kalam,

    /// Lunar month (from the Moon's rashi).
    pub masa: Masa,
    /// Fortnight half, duplicated from the tithi for quick access.
    pub paksha: Paksha,
    /// Year of the 60-year cycle.
    pub samvatsara: Samvatsara,
}
