//! Inauspicious sub-day intervals.
//!
//! Each interval occupies one of 8 equal segments of the sunrise–sunset
//! span, selected by a fixed per-weekday table (Sunday first). The three
//! tables are independent; the selected segments never coincide on the
//! same day.

use serde::{Deserialize, Serialize};

use jyotish_time::Moment;
use jyotish_vedic::Vaar;

use crate::types::{Kalam, SunTiming};

/// 1-based day-eighth occupied by Rahu Kalam, indexed by weekday.
const RAHU_KALAM_SEGMENT: [u8; 7] = [8, 2, 7, 5, 6, 4, 3];

/// 1-based day-eighth occupied by Yamagandam, indexed by weekday.
const YAMAGANDAM_SEGMENT: [u8; 7] = [5, 4, 3, 2, 1, 7, 6];

/// 1-based day-eighth occupied by Gulika Kalam, indexed by weekday.
const GULIKA_SEGMENT: [u8; 7] = [7, 6, 5, 4, 3, 2, 1];

/// The three inauspicious interval types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KalamKind {
    RahuKalam,
    Yamagandam,
    GulikaKalam,
}

impl KalamKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::RahuKalam => "Rahu Kalam",
            Self::Yamagandam => "Yamagandam",
            Self::GulikaKalam => "Gulika Kalam",
        }
    }

    /// Segment table for this interval type.
    const fn segments(self) -> &'static [u8; 7] {
        match self {
            Self::RahuKalam => &RAHU_KALAM_SEGMENT,
            Self::Yamagandam => &YAMAGANDAM_SEGMENT,
            Self::GulikaKalam => &GULIKA_SEGMENT,
        }
    }
}

/// Compute one inauspicious interval for a day.
pub fn kalam_interval(kind: KalamKind, vaar: Vaar, sun: &SunTiming) -> Kalam {
    let rise_jd = sun.sunrise.to_jd();
    let set_jd = sun.sunset.to_jd();
    let segment_days = (set_jd - rise_jd) / 8.0;

    let segment = kind.segments()[vaar.index() as usize];
    let start_jd = rise_jd + segment_days * (segment - 1) as f64;

    Kalam {
        kind,
        start: Moment::from_jd(start_jd),
        end: Moment::from_jd(start_jd + segment_days),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sun_6_to_18() -> SunTiming {
        let sunrise = Moment::new(2024, 3, 24, 6, 0, 0.0);
        let sunset = Moment::new(2024, 3, 24, 18, 0, 0.0);
        SunTiming {
            sunrise,
            sunset,
            noon: Moment::new(2024, 3, 24, 12, 0, 0.0),
            day_length_hours: 12.0,
        }
    }

    #[test]
    fn sunday_rahu_kalam_is_last_eighth() {
        // Sunday segment 8: 16:30-18:00 for a 06:00-18:00 day.
        let k = kalam_interval(KalamKind::RahuKalam, Vaar::Ravivara, &sun_6_to_18());
        assert_eq!((k.start.hour, k.start.minute), (16, 30));
        assert_eq!((k.end.hour, k.end.minute), (18, 0));
    }

    #[test]
    fn monday_rahu_kalam_is_second_eighth() {
        // Monday segment 2: 07:30-09:00.
        let k = kalam_interval(KalamKind::RahuKalam, Vaar::Somavara, &sun_6_to_18());
        assert_eq!((k.start.hour, k.start.minute), (7, 30));
        assert_eq!((k.end.hour, k.end.minute), (9, 0));
    }

    #[test]
    fn thursday_yamagandam_first_eighth() {
        // Thursday segment 1: starts at sunrise.
        let k = kalam_interval(KalamKind::Yamagandam, Vaar::Guruvara, &sun_6_to_18());
        assert_eq!((k.start.hour, k.start.minute), (6, 0));
    }

    #[test]
    fn gulika_descends_with_weekday() {
        let sun = sun_6_to_18();
        // Gulika table is [7,6,5,4,3,2,1]: Saturday gets segment 1.
        let sat = kalam_interval(KalamKind::GulikaKalam, Vaar::Shanivara, &sun);
        assert_eq!((sat.start.hour, sat.start.minute), (6, 0));
        let sun_day = kalam_interval(KalamKind::GulikaKalam, Vaar::Ravivara, &sun);
        assert_eq!((sun_day.start.hour, sun_day.start.minute), (15, 0));
    }

    #[test]
    fn duration_is_one_eighth_of_day() {
        let k = kalam_interval(KalamKind::RahuKalam, Vaar::Budhavara, &sun_6_to_18());
        let dur_hours = (k.end.to_jd() - k.start.to_jd()) * 24.0;
        assert!((dur_hours - 1.5).abs() < 1e-9);
    }

    #[test]
    fn interval_inside_daylight() {
        let sun = sun_6_to_18();
        for kind in [KalamKind::RahuKalam, KalamKind::Yamagandam, KalamKind::GulikaKalam] {
            for vaar in jyotish_vedic::ALL_VAARS {
                let k = kalam_interval(kind, vaar, &sun);
                assert!(k.start.to_jd() >= sun.sunrise.to_jd() - 1e-9);
                assert!(k.end.to_jd() <= sun.sunset.to_jd() + 1e-9);
            }
        }
    }
}
