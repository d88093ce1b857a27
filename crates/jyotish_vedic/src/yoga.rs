//! Yoga (luni-solar combination) classification.
//!
//! A yoga is one of 27 equal 13°20′ segments of the *sum* of the sidereal
//! longitudes of the Sun and Moon. Unlike the tithi, the ayanamsha does
//! not cancel in the sum, so sidereal longitudes are required.
//!
//! Each yoga carries a fixed auspicious/inauspicious nature used by the
//! muhurta scoring rules.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Angular span of one yoga in degrees: 360/27.
pub const YOGA_SEGMENT_DEG: f64 = 360.0 / 27.0;

/// Fixed nature of a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YogaNature {
    Auspicious,
    Inauspicious,
}

/// The 27 yogas from Vishkambha to Vaidhriti.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarman,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyan,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha, 26 = Vaidhriti).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarman,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyan,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarman => "Sukarman",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyan => "Variyan",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (Vishkambha=0 .. Vaidhriti=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based yoga number (1..=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Fixed auspicious/inauspicious nature.
    pub const fn nature(self) -> YogaNature {
        match self {
            Self::Vishkambha
            | Self::Atiganda
            | Self::Shula
            | Self::Ganda
            | Self::Vyaghata
            | Self::Vajra
            | Self::Vyatipata
            | Self::Parigha
            | Self::Vaidhriti => YogaNature::Inauspicious,
            _ => YogaNature::Auspicious,
        }
    }
}

/// Classify the sum of the sidereal Sun and Moon longitudes into a yoga.
pub fn yoga_from_sum(sidereal_sum_deg: f64) -> Yoga {
    let sum = normalize_360(sidereal_sum_deg);
    let idx = ((sum / YOGA_SEGMENT_DEG).floor() as u8).min(26);
    ALL_YOGAS[idx as usize]
}
