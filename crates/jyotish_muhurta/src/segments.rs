//! Choghadiya and Hora day-segment systems.
//!
//! Choghadiya splits daylight (and a nominal 12-hour night) into 8
//! segments whose names rotate with the weekday. Hora assigns each of 12
//! day and 12 night divisions a planetary lord following the Chaldean
//! order from the weekday lord.

use serde::{Deserialize, Serialize};

use jyotish_panchang::calculate_panchang;
use jyotish_time::Moment;
use jyotish_vedic::{Ayanamsha, Graha, VedicError};

/// Nominal night span used for the night segments, in days.
const NOMINAL_NIGHT_DAYS: f64 = 0.5;

/// The 7 choghadiya names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choghadiya {
    Udveg,
    Chal,
    Labh,
    Amrit,
    Kaal,
    Shubh,
    Rog,
}

/// Nature of a choghadiya segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChoghadiyaNature {
    Excellent,
    Good,
    Average,
    Inauspicious,
}

impl Choghadiya {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Udveg => "Udveg",
            Self::Chal => "Chal",
            Self::Labh => "Labh",
            Self::Amrit => "Amrit",
            Self::Kaal => "Kaal",
            Self::Shubh => "Shubh",
            Self::Rog => "Rog",
        }
    }

    pub const fn nature(self) -> ChoghadiyaNature {
        match self {
            Self::Amrit => ChoghadiyaNature::Excellent,
            Self::Shubh | Self::Labh => ChoghadiyaNature::Good,
            Self::Chal => ChoghadiyaNature::Average,
            Self::Rog | Self::Kaal | Self::Udveg => ChoghadiyaNature::Inauspicious,
        }
    }
}

/// Day-time choghadiya rotation (the 8th repeats the 1st).
const DAY_SEQUENCE: [Choghadiya; 8] = [
    Choghadiya::Udveg,
    Choghadiya::Chal,
    Choghadiya::Labh,
    Choghadiya::Amrit,
    Choghadiya::Kaal,
    Choghadiya::Shubh,
    Choghadiya::Rog,
    Choghadiya::Udveg,
];

/// Night-time choghadiya rotation.
const NIGHT_SEQUENCE: [Choghadiya; 8] = [
    Choghadiya::Shubh,
    Choghadiya::Amrit,
    Choghadiya::Chal,
    Choghadiya::Rog,
    Choghadiya::Kaal,
    Choghadiya::Labh,
    Choghadiya::Udveg,
    Choghadiya::Shubh,
];

/// Chaldean hora lord order.
const HORA_LORDS: [Graha; 7] = [
    Graha::Surya,
    Graha::Shukra,
    Graha::Buddh,
    Graha::Chandra,
    Graha::Shani,
    Graha::Guru,
    Graha::Mangal,
];

/// One choghadiya segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChoghadiyaSegment {
    pub choghadiya: Choghadiya,
    pub nature: ChoghadiyaNature,
    pub start: Moment,
    pub end: Moment,
}

/// Choghadiya table for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayChoghadiya {
    pub date: Moment,
    pub sunrise: Moment,
    pub sunset: Moment,
    /// 8 daylight segments.
    pub day_segments: Vec<ChoghadiyaSegment>,
    /// 8 night segments (nominal 12-hour night).
    pub night_segments: Vec<ChoghadiyaSegment>,
}

/// One planetary hora.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoraSegment {
    /// 1-based position within its half of the day.
    pub number: u8,
    pub lord: Graha,
    pub start: Moment,
    pub end: Moment,
}

/// Hora table for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayHoras {
    pub date: Moment,
    /// Lord of the weekday; the first day hora belongs to it.
    pub weekday_lord: Graha,
    /// 12 daylight horas.
    pub day_horas: Vec<HoraSegment>,
    /// 12 night horas (nominal 12-hour night).
    pub night_horas: Vec<HoraSegment>,
}

fn segments_from(
    sequence: &[Choghadiya; 8],
    weekday: u8,
    start_jd: f64,
    segment_days: f64,
) -> Vec<ChoghadiyaSegment> {
    (0..8)
        .map(|i| {
            let name = sequence[((weekday as usize) + i) % 8];
            let s = start_jd + i as f64 * segment_days;
            ChoghadiyaSegment {
                choghadiya: name,
                nature: name.nature(),
                start: Moment::from_jd(s),
                end: Moment::from_jd(s + segment_days),
            }
        })
        .collect()
}

/// Choghadiya segments for a date and location.
pub fn choghadiya_for_date(
    date: &Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    system: Ayanamsha,
) -> Result<DayChoghadiya, VedicError> {
    let panchang = calculate_panchang(date, latitude_deg, longitude_deg, system)?;
    let weekday = panchang.vaar.index();

    let sunrise_jd = panchang.sun_timing.sunrise.to_jd();
    let sunset_jd = panchang.sun_timing.sunset.to_jd();
    let day_segment = (sunset_jd - sunrise_jd) / 8.0;
    let night_segment = NOMINAL_NIGHT_DAYS / 8.0;

    Ok(DayChoghadiya {
        date: panchang.date,
        sunrise: panchang.sun_timing.sunrise,
        sunset: panchang.sun_timing.sunset,
        day_segments: segments_from(&DAY_SEQUENCE, weekday, sunrise_jd, day_segment),
        night_segments: segments_from(&NIGHT_SEQUENCE, weekday, sunset_jd, night_segment),
    })
}

fn horas_from(start_index: usize, start_jd: f64, hora_days: f64) -> Vec<HoraSegment> {
    (0..12)
        .map(|i| {
            let s = start_jd + i as f64 * hora_days;
            HoraSegment {
                number: i as u8 + 1,
                lord: HORA_LORDS[(start_index + i) % 7],
                start: Moment::from_jd(s),
                end: Moment::from_jd(s + hora_days),
            }
        })
        .collect()
}

/// Planetary horas for a date and location.
pub fn horas_for_date(
    date: &Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    system: Ayanamsha,
) -> Result<DayHoras, VedicError> {
    let panchang = calculate_panchang(date, latitude_deg, longitude_deg, system)?;
    let weekday_lord = panchang.vaar.lord();
    let start_index = HORA_LORDS
        .iter()
        .position(|&g| g == weekday_lord)
        .unwrap_or(0);

    let sunrise_jd = panchang.sun_timing.sunrise.to_jd();
    let sunset_jd = panchang.sun_timing.sunset.to_jd();
    let day_hora = (sunset_jd - sunrise_jd) / 12.0;
    let night_hora = NOMINAL_NIGHT_DAYS / 12.0;

    Ok(DayHoras {
        date: panchang.date,
        weekday_lord,
        day_horas: horas_from(start_index, sunrise_jd, day_hora),
        night_horas: horas_from(start_index + 12, sunset_jd, night_hora),
    })
}
