//! Rashi (zodiac sign) classification.
//!
//! The ecliptic is divided into 12 equal signs of 30° starting from Mesha
//! (Aries) at 0° sidereal. Longitudes are reduced modulo 360 before any
//! integer division, so the lookup is exact at the 0°/360° seam.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// The 12 rashis starting from Mesha (Aries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

/// Rashi element classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RashiElement {
    Fire,
    Earth,
    Air,
    Water,
}

impl Rashi {
    /// Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrishchika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// Western (English) name.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Mesha => 0,
            Self::Vrishabha => 1,
            Self::Mithuna => 2,
            Self::Karka => 3,
            Self::Simha => 4,
            Self::Kanya => 5,
            Self::Tula => 6,
            Self::Vrischika => 7,
            Self::Dhanu => 8,
            Self::Makara => 9,
            Self::Kumbha => 10,
            Self::Meena => 11,
        }
    }

    /// 1-based sign number (Mesha=1 .. Meena=12), the convention used by
    /// chart and compatibility records.
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Rashi from a 1-based number. None outside 1..=12.
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=12).contains(&n) {
            Some(ALL_RASHIS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Element: Fire 0,4,8 / Earth 1,5,9 / Air 2,6,10 / Water 3,7,11.
    pub const fn element(self) -> RashiElement {
        match self.index() % 4 {
            0 => RashiElement::Fire,
            1 => RashiElement::Earth,
            2 => RashiElement::Air,
            _ => RashiElement::Water,
        }
    }

    /// Planetary lord of the sign.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Mesha | Self::Vrischika => Graha::Mangal,
            Self::Vrishabha | Self::Tula => Graha::Shukra,
            Self::Mithuna | Self::Kanya => Graha::Buddh,
            Self::Karka => Graha::Chandra,
            Self::Simha => Graha::Surya,
            Self::Dhanu | Self::Meena => Graha::Guru,
            Self::Makara | Self::Kumbha => Graha::Shani,
        }
    }
}

/// Rashi position of a longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RashiInfo {
    /// The rashi.
    pub rashi: Rashi,
    /// Decimal degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
}

/// Determine the rashi from a sidereal ecliptic longitude.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Clamp guards the floating-point edge at exactly 360.0.
    let idx = ((lon / 30.0).floor() as u8).min(11);
    RashiInfo {
        rashi: ALL_RASHIS[idx as usize],
        degrees_in_rashi: lon - (idx as f64) * 30.0,
    }
}
