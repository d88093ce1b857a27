//! Chart value objects.

use serde::{Deserialize, Serialize};

use jyotish_time::Moment;
use jyotish_vedic::{Ayanamsha, Graha, Nakshatra, Rashi};

/// A graha's position in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrahaPosition {
    /// The graha.
    pub graha: Graha,
    /// Sidereal ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Longitude rate in degrees per day; negative ⇒ retrograde.
    pub speed_deg_per_day: f64,
    /// Whether the graha is in retrograde motion.
    pub retrograde: bool,
    /// Occupied rashi.
    pub rashi: Rashi,
    /// Degrees within the rashi [0, 30).
    pub degree_in_rashi: f64,
    /// Occupied nakshatra.
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Vimshottari lord of the occupied nakshatra.
    pub nakshatra_lord: Graha,
}

/// A house cusp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// House number, 1-12.
    pub number: u8,
    /// Sidereal cusp longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Rashi on the cusp.
    pub rashi: Rashi,
    /// Degrees within the rashi [0, 30).
    pub degree_in_rashi: f64,
}

/// The ascendant (lagna).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    /// Sidereal longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Rising rashi.
    pub rashi: Rashi,
    /// Nakshatra on the ascendant.
    pub nakshatra: Nakshatra,
}

/// A complete natal chart. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kundali {
    /// Birth moment (UTC, with display-only offset).
    pub moment: Moment,
    /// Birth latitude in degrees.
    pub latitude_deg: f64,
    /// Birth longitude in degrees.
    pub longitude_deg: f64,
    /// Ayanamsha system used.
    pub ayanamsha: Ayanamsha,
    /// Ayanamsha value applied, in degrees.
    pub ayanamsha_value_deg: f64,
    /// The ascendant.
    pub ascendant: Ascendant,
    /// The 9 grahas in traditional order (Surya .. Rahu, Ketu).
    pub grahas: Vec<GrahaPosition>,
    /// The 12 equal house cusps.
    pub houses: Vec<HouseCusp>,
    /// Moon's 1-based rashi number (quick reference).
    pub moon_rashi: u8,
    /// Moon's 1-based nakshatra number (quick reference).
    pub moon_nakshatra: u8,
    /// Sun's 1-based rashi number (quick reference).
    pub sun_rashi: u8,
}

impl Kundali {
    /// Position of a specific graha.
    pub fn graha(&self, graha: Graha) -> Option<&GrahaPosition> {
        self.grahas.iter().find(|p| p.graha == graha)
    }

    /// The Moon's position (always present in a constructed chart).
    pub fn moon(&self) -> &GrahaPosition {
        &self.grahas[Graha::Chandra.index() as usize]
    }
}
