//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13°20′, each with
//! 4 padas (quarters) of 3°20′. Longitudes are reduced modulo 360 before
//! classification, so the lookup agrees exactly at the 0°/360° seam.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::util::normalize_360;

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based mansion number (Ashwini=1 .. Revati=27), the convention
    /// used by chart and compatibility records.
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Nakshatra from a 1-based number. None outside 1..=27.
    pub fn from_number(n: u8) -> Option<Self> {
        if (1..=27).contains(&n) {
            Some(ALL_NAKSHATRAS[(n - 1) as usize])
        } else {
            None
        }
    }

    /// Vimshottari lord: the 9-ruler cycle repeated three times across
    /// the 27 mansions.
    pub const fn lord(self) -> Graha {
        match self.index() % 9 {
            0 => Graha::Ketu,
            1 => Graha::Shukra,
            2 => Graha::Surya,
            3 => Graha::Chandra,
            4 => Graha::Mangal,
            5 => Graha::Rahu,
            6 => Graha::Guru,
            7 => Graha::Shani,
            _ => Graha::Buddh,
        }
    }
}

/// Result of a nakshatra lookup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    /// The nakshatra.
    pub nakshatra: Nakshatra,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Decimal degrees within the nakshatra [0, 13.333..).
    pub degrees_in_nakshatra: f64,
}

/// Determine nakshatra and pada from a sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let idx = ((lon / NAKSHATRA_SPAN).floor() as u8).min(26);
    let degrees_in = lon - (idx as f64) * NAKSHATRA_SPAN;
    let pada_idx = ((degrees_in / PADA_SPAN).floor() as u8).min(3);
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[idx as usize],
        pada: pada_idx + 1,
        degrees_in_nakshatra: degrees_in,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn all_count() {
        assert_eq!(ALL_NAKSHATRAS.len(), 27);
    }

    #[test]
    fn indices_sequential() {
        for (i, n) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(n.index() as usize, i);
            assert_eq!(n.number() as usize, i + 1);
        }
    }

    #[test]
    fn from_number_roundtrip() {
        for n in ALL_NAKSHATRAS {
            assert_eq!(Nakshatra::from_number(n.number()), Some(n));
        }
        assert_eq!(Nakshatra::from_number(0), None);
        assert_eq!(Nakshatra::from_number(28), None);
    }

    #[test]
    fn lords_cycle() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Bharani.lord(), Graha::Shukra);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
    }

    #[test]
    fn at_zero() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
        assert!(info.degrees_in_nakshatra.abs() < 1e-10);
    }

    #[test]
    fn all_boundaries() {
        for i in 0..27u8 {
            let info = nakshatra_from_longitude(i as f64 * NAKSHATRA_SPAN);
            assert_eq!(info.nakshatra.index(), i, "boundary of nakshatra {i}");
            assert_eq!(info.pada, 1);
        }
    }

    #[test]
    fn padas() {
        assert_eq!(nakshatra_from_longitude(0.0).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN + 0.1).pada, 2);
        assert_eq!(nakshatra_from_longitude(2.0 * PADA_SPAN + 0.1).pada, 3);
        assert_eq!(nakshatra_from_longitude(3.0 * PADA_SPAN + 0.1).pada, 4);
    }

    #[test]
    fn wrap() {
        let info = nakshatra_from_longitude(361.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert!((info.degrees_in_nakshatra - 1.0).abs() < 1e-10);
    }

    #[test]
    fn negative() {
        assert_eq!(nakshatra_from_longitude(-1.0).nakshatra, Nakshatra::Revati);
    }

    #[test]
    fn exactly_360() {
        assert_eq!(nakshatra_from_longitude(360.0).nakshatra, Nakshatra::Ashwini);
    }

    proptest! {
        #[test]
        fn lookup_agrees_mod_360(lon in -1.0e4_f64..1.0e4) {
            let a = nakshatra_from_longitude(lon);
            let b = nakshatra_from_longitude(lon.rem_euclid(360.0));
            prop_assert_eq!(a.nakshatra, b.nakshatra);
            prop_assert_eq!(a.pada, b.pada);
        }

        #[test]
        fn number_always_in_range(lon in -1.0e4_f64..1.0e4) {
            let info = nakshatra_from_longitude(lon);
            prop_assert!((1..=27).contains(&info.nakshatra.number()));
            prop_assert!((1..=4).contains(&info.pada));
        }
    }
}
