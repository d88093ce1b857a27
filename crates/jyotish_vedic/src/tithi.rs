//! Tithi (lunar day) classification.
//!
//! A tithi is one of 30 equal 12° segments of the Moon−Sun elongation.
//! Tithis 1-15 form the Shukla (bright) paksha ending at Purnima; 16-30
//! form the Krishna (dark) paksha ending at Amavasya.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Angular span of one tithi in degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Bright (waxing) fortnight, tithis 1-15.
    Shukla,
    /// Dark (waning) fortnight, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// Tithi names. The 14 ordinary names repeat in both pakshas; the
/// fortnights close with Purnima (full) and Amavasya (new) respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    Pratipada,
    Dwitiya,
    Tritiya,
    Chaturthi,
    Panchami,
    Shashthi,
    Saptami,
    Ashtami,
    Navami,
    Dashami,
    Ekadashi,
    Dwadashi,
    Trayodashi,
    Chaturdashi,
    Purnima,
    Amavasya,
}

/// The 16 distinct tithi names.
pub const ALL_TITHIS: [Tithi; 16] = [
    Tithi::Pratipada,
    Tithi::Dwitiya,
    Tithi::Tritiya,
    Tithi::Chaturthi,
    Tithi::Panchami,
    Tithi::Shashthi,
    Tithi::Saptami,
    Tithi::Ashtami,
    Tithi::Navami,
    Tithi::Dashami,
    Tithi::Ekadashi,
    Tithi::Dwadashi,
    Tithi::Trayodashi,
    Tithi::Chaturdashi,
    Tithi::Purnima,
    Tithi::Amavasya,
];

impl Tithi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pratipada => "Pratipada",
            Self::Dwitiya => "Dwitiya",
            Self::Tritiya => "Tritiya",
            Self::Chaturthi => "Chaturthi",
            Self::Panchami => "Panchami",
            Self::Shashthi => "Shashthi",
            Self::Saptami => "Saptami",
            Self::Ashtami => "Ashtami",
            Self::Navami => "Navami",
            Self::Dashami => "Dashami",
            Self::Ekadashi => "Ekadashi",
            Self::Dwadashi => "Dwadashi",
            Self::Trayodashi => "Trayodashi",
            Self::Chaturdashi => "Chaturdashi",
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
        }
    }

    /// Name for a 1-based tithi number (1..=30).
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            15 => Some(Self::Purnima),
            30 => Some(Self::Amavasya),
            1..=29 => Some(ALL_TITHIS[((number - 1) % 15) as usize]),
            _ => None,
        }
    }
}

/// Tithi classification of a Moon−Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiInfo {
    /// 1-based tithi number, 1..=30.
    pub number: u8,
    /// The tithi name.
    pub tithi: Tithi,
    /// Bright or dark fortnight.
    pub paksha: Paksha,
    /// Percentage of the 12° slot already traversed, [0, 100).
    pub percent_elapsed: f64,
}

/// Classify a Moon−Sun elongation into a tithi.
///
/// `elongation_deg` = (moon − sun) longitude difference; reduced modulo
/// 360 here, so any real input is accepted.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = normalize_360(elongation_deg);
    let number = ((elong / TITHI_SEGMENT_DEG).floor() as u8).min(29) + 1;
    let paksha = if number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    let percent_elapsed = (elong % TITHI_SEGMENT_DEG) / TITHI_SEGMENT_DEG * 100.0;
    TithiInfo {
        number,
        tithi: Tithi::from_number(number).unwrap_or(Tithi::Pratipada),
        paksha,
        percent_elapsed,
    }
}
