//! Daily panchang computation.

use jyotish_ephem::{Body, ecliptic_lon_lat};
use jyotish_time::{Moment, calendar_to_jd};
use jyotish_vedic::{
    Ayanamsha, GeoLocation, NAKSHATRA_SPAN, RiseBody, RiseSetEvent, RiseSetResult, TITHI_SEGMENT_DEG,
    VedicError, YOGA_SEGMENT_DEG, approximate_local_noon_jd, compute_rise_set, karana_from_tithi,
    masa_from_moon_rashi, nakshatra_from_longitude, rashi_from_longitude, samvatsara_from_year,
    sidereal_longitude, tithi_from_elongation, vaar_from_jd, yoga_from_sum,
};

use crate::kalam::{KalamKind, kalam_interval};
use crate::types::{
    KaranaDetail, MoonTiming, NakshatraDetail, Panchang, SunTiming, TithiDetail, YogaDetail,
};

/// Mean Moon−Sun relative motion, degrees per day (tithi end estimate).
const RELATIVE_RATE_DEG_PER_DAY: f64 = 12.2;

/// Mean lunar motion, degrees per day (nakshatra end estimate).
const MOON_RATE_DEG_PER_DAY: f64 = 13.2;

/// Mean combined Sun+Moon motion, degrees per day (yoga end estimate).
const COMBINED_RATE_DEG_PER_DAY: f64 = 14.2;

fn validate_coordinates(latitude_deg: f64, longitude_deg: f64) -> Result<(), VedicError> {
    if !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(VedicError::InvalidLocation("latitude outside [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(VedicError::InvalidLocation("longitude outside [-180, 180]"));
    }
    Ok(())
}

/// Sunrise/sunset for the civil day, with the documented degraded mode:
/// if the horizon search fails (polar day/night, convergence failure),
/// fall back to fixed 06:00/18:00 local mean solar time and log a warning.
fn sun_timing(jd_midnight: f64, location: &GeoLocation) -> SunTiming {
    let noon_jd = approximate_local_noon_jd(jd_midnight, location.longitude_deg);
    let local_offset_days = -location.longitude_deg / 360.0;

    let sunrise_jd = match compute_rise_set(RiseBody::Sun, RiseSetEvent::Rise, location, noon_jd) {
        Ok(RiseSetResult::Event { jd }) => jd,
        _ => {
            tracing::warn!(
                latitude = location.latitude_deg,
                "sunrise search failed, using fixed 06:00 local"
            );
            jd_midnight + 0.25 + local_offset_days
        }
    };
    let sunset_jd = match compute_rise_set(RiseBody::Sun, RiseSetEvent::Set, location, noon_jd) {
        Ok(RiseSetResult::Event { jd }) => jd,
        _ => {
            tracing::warn!(
                latitude = location.latitude_deg,
                "sunset search failed, using fixed 18:00 local"
            );
            jd_midnight + 0.75 + local_offset_days
        }
    };

    SunTiming {
        sunrise: Moment::from_jd(sunrise_jd),
        sunset: Moment::from_jd(sunset_jd),
        noon: Moment::from_jd((sunrise_jd + sunset_jd) / 2.0),
        day_length_hours: (sunset_jd - sunrise_jd) * 24.0,
    }
}

/// Moonrise/moonset for the civil day. Failures are tolerated silently:
/// either event may simply not occur on a given date.
fn moon_timing(jd_midnight: f64, location: &GeoLocation) -> MoonTiming {
    let noon_jd = approximate_local_noon_jd(jd_midnight, location.longitude_deg);
    let event_moment = |event| match compute_rise_set(RiseBody::Moon, event, location, noon_jd) {
        Ok(RiseSetResult::Event { jd }) => Some(Moment::from_jd(jd)),
        _ => None,
    };
    MoonTiming {
        moonrise: event_moment(RiseSetEvent::Rise),
        moonset: event_moment(RiseSetEvent::Set),
    }
}

/// Calculate the complete panchang for a date and location.
///
/// The time component of `date` is ignored; all elements are evaluated at
/// the day's sunrise, which anchors the traditional day.
pub fn calculate_panchang(
    date: &Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    system: Ayanamsha,
) -> Result<Panchang, VedicError> {
    validate_coordinates(latitude_deg, longitude_deg)?;
    let location = GeoLocation::new(latitude_deg, longitude_deg, 0.0);

    let day_start = date.date_start();
    let jd_midnight = day_start.to_jd();

    // Sunrise anchors every other element.
    let sun_timing = sun_timing(jd_midnight, &location);
    let moon_timing = moon_timing(jd_midnight, &location);
    let jd = sun_timing.sunrise.to_jd();

    let (sun_trop, _) = ecliptic_lon_lat(Body::Sun, jd)?;
    let (moon_trop, _) = ecliptic_lon_lat(Body::Moon, jd)?;
    let sun_sid = sidereal_longitude(sun_trop, system, jd);
    let moon_sid = sidereal_longitude(moon_trop, system, jd);

    // Tithi: 12° segments of the Moon−Sun elongation.
    let elong = (moon_sid - sun_sid).rem_euclid(360.0);
    let tithi_info = tithi_from_elongation(elong);
    let tithi_remaining_deg = TITHI_SEGMENT_DEG - (elong % TITHI_SEGMENT_DEG);
    let tithi = TithiDetail {
        number: tithi_info.number,
        tithi: tithi_info.tithi,
        paksha: tithi_info.paksha,
        percent_elapsed: tithi_info.percent_elapsed,
        end: Moment::from_jd(jd + tithi_remaining_deg / RELATIVE_RATE_DEG_PER_DAY),
    };

    // Nakshatra: the Moon's mansion.
    let nak_info = nakshatra_from_longitude(moon_sid);
    let nak_remaining_deg = NAKSHATRA_SPAN - nak_info.degrees_in_nakshatra;
    let nakshatra = NakshatraDetail {
        number: nak_info.nakshatra.number(),
        nakshatra: nak_info.nakshatra,
        pada: nak_info.pada,
        lord: nak_info.nakshatra.lord(),
        end: Moment::from_jd(jd + nak_remaining_deg / MOON_RATE_DEG_PER_DAY),
    };

    // Yoga: 13°20′ segments of the sidereal Sun+Moon sum.
    let sum = (sun_sid + moon_sid).rem_euclid(360.0);
    let yoga_name = yoga_from_sum(sum);
    let yoga_remaining_deg = YOGA_SEGMENT_DEG - (sum % YOGA_SEGMENT_DEG);
    let yoga = YogaDetail {
        number: yoga_name.number(),
        yoga: yoga_name,
        nature: yoga_name.nature(),
        end: Moment::from_jd(jd + yoga_remaining_deg / COMBINED_RATE_DEG_PER_DAY),
    };

    // Karana from the tithi slot.
    let karana_info = karana_from_tithi(tithi.number, tithi.percent_elapsed);
    let karana = KaranaDetail {
        number: karana_info.number,
        karana: karana_info.karana,
        fixed: karana_info.karana.is_fixed(),
    };

    // Weekday of the civil date.
    let vaar = vaar_from_jd(jd_midnight);

    // The three inauspicious intervals.
    let rahu_kalam = kalam_interval(KalamKind::RahuKalam, vaar, &sun_timing);
    let yamagandam = kalam_interval(KalamKind::Yamagandam, vaar, &sun_timing);
    let gulika_kalam = kalam_interval(KalamKind::GulikaKalam, vaar, &sun_timing);

    let masa = masa_from_moon_rashi(rashi_from_longitude(moon_sid).rashi);
    let (samvatsara, _) = samvatsara_from_year(day_start.year);

    Ok(Panchang {
        date: day_start,
        latitude_deg,
        longitude_deg,
        ayanamsha: system,
        paksha: tithi.paksha,
        tithi,
        nakshatra,
        yoga,
        karana,
        vaar,
        vaar_lord: vaar.lord(),
        sun_timing,
        moon_timing,
        rahu_kalam,
        yamagandam,
        gulika_kalam,
        masa,
        samvatsara,
    })
}

/// Panchang for every civil day of a month.
pub fn monthly_panchang(
    year: i32,
    month: u32,
    latitude_deg: f64,
    longitude_deg: f64,
    system: Ayanamsha,
) -> Result<Vec<Panchang>, VedicError> {
    if !(1..=12).contains(&month) {
        return Err(VedicError::InvalidInput("month outside 1..=12"));
    }
    let (next_y, next_m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let days =
        (calendar_to_jd(next_y, next_m, 1.0) - calendar_to_jd(year, month, 1.0)).round() as u32;

    let mut result = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let date = Moment::new(year, month, day, 0, 0, 0.0);
        result.push(calculate_panchang(&date, latitude_deg, longitude_deg, system)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_vedic::Vaar;

    fn delhi_panchang(date: Moment) -> Panchang {
        calculate_panchang(&date, 28.6139, 77.209, Ayanamsha::Lahiri).unwrap()
    }

    #[test]
    fn deterministic_repeat_calls() {
        let date = Moment::new(2024, 3, 24, 0, 0, 0.0);
        let a = delhi_panchang(date);
        let b = delhi_panchang(date);
        assert_eq!(a, b);
    }

    #[test]
    fn time_component_ignored() {
        let midnight = Moment::new(2024, 3, 24, 0, 0, 0.0);
        let evening = Moment::new(2024, 3, 24, 19, 45, 0.0);
        assert_eq!(delhi_panchang(midnight), delhi_panchang(evening));
    }

    #[test]
    fn elements_in_range() {
        let p = delhi_panchang(Moment::new(2024, 6, 10, 0, 0, 0.0));
        assert!((1..=30).contains(&p.tithi.number));
        assert!((1..=27).contains(&p.nakshatra.number));
        assert!((1..=27).contains(&p.yoga.number));
        assert!((1..=60).contains(&p.karana.number));
        assert!((1..=4).contains(&p.nakshatra.pada));
    }

    #[test]
    fn dark_half_after_full_moon() {
        // Full moon was 2024-04-23 23:49 UTC; two days later the dark
        // fortnight is well underway.
        let p = delhi_panchang(Moment::new(2024, 4, 26, 0, 0, 0.0));
        assert_eq!(p.paksha, jyotish_vedic::Paksha::Krishna);
        assert!(
            (16..=19).contains(&p.tithi.number),
            "tithi = {:?}",
            p.tithi
        );
    }

    #[test]
    fn known_new_moon_dark_half() {
        // 2024-04-08 (total solar eclipse day): Amavasya.
        let p = delhi_panchang(Moment::new(2024, 4, 8, 0, 0, 0.0));
        assert_eq!(p.tithi.number, 30, "tithi = {:?}", p.tithi);
    }

    #[test]
    fn weekday_matches_calendar() {
        // 2024-03-24 was a Sunday.
        let p = delhi_panchang(Moment::new(2024, 3, 24, 0, 0, 0.0));
        assert_eq!(p.vaar, Vaar::Ravivara);
    }

    #[test]
    fn end_times_lie_ahead() {
        let p = delhi_panchang(Moment::new(2024, 6, 10, 0, 0, 0.0));
        let sunrise_jd = p.sun_timing.sunrise.to_jd();
        assert!(p.tithi.end.to_jd() > sunrise_jd);
        assert!(p.nakshatra.end.to_jd() > sunrise_jd);
        assert!(p.yoga.end.to_jd() > sunrise_jd);
        // A tithi never lasts more than ~27h past its observation.
        assert!(p.tithi.end.to_jd() - sunrise_jd < 1.2);
    }

    #[test]
    fn kalams_inside_daylight() {
        let p = delhi_panchang(Moment::new(2024, 6, 10, 0, 0, 0.0));
        for k in [&p.rahu_kalam, &p.yamagandam, &p.gulika_kalam] {
            assert!(k.start.to_jd() >= p.sun_timing.sunrise.to_jd() - 1e-9);
            assert!(k.end.to_jd() <= p.sun_timing.sunset.to_jd() + 1e-9);
            let dur = (k.end.to_jd() - k.start.to_jd()) * 24.0;
            assert!((dur - p.sun_timing.day_length_hours / 8.0).abs() < 1e-6);
        }
    }

    #[test]
    fn polar_fallback_six_to_six() {
        // Tromsø in winter: the Sun never rises; the engine degrades to
        // fixed 06:00/18:00 local mean time.
        let p = calculate_panchang(
            &Moment::new(2024, 12, 21, 0, 0, 0.0),
            69.65,
            18.96,
            Ayanamsha::Lahiri,
        )
        .unwrap();
        assert!((p.sun_timing.day_length_hours - 12.0).abs() < 1e-6);
        // 06:00 local mean solar = 06:00 - lon/15 h UTC ≈ 04:44 UTC.
        let expected = p.date.to_jd() + 0.25 - 18.96 / 360.0;
        assert!((p.sun_timing.sunrise.to_jd() - expected).abs() < 1e-9);
    }

    #[test]
    fn monthly_counts_days() {
        let feb = monthly_panchang(2024, 2, 28.6139, 77.209, Ayanamsha::Lahiri).unwrap();
        assert_eq!(feb.len(), 29);
        let apr = monthly_panchang(2024, 4, 28.6139, 77.209, Ayanamsha::Lahiri).unwrap();
        assert_eq!(apr.len(), 30);
    }

    #[test]
    fn monthly_rejects_bad_month() {
        assert!(monthly_panchang(2024, 13, 0.0, 0.0, Ayanamsha::Lahiri).is_err());
    }

    #[test]
    fn bad_coordinates_rejected() {
        let date = Moment::new(2024, 1, 1, 0, 0, 0.0);
        assert!(calculate_panchang(&date, 91.0, 0.0, Ayanamsha::Lahiri).is_err());
        assert!(calculate_panchang(&date, 0.0, -181.0, Ayanamsha::Lahiri).is_err());
    }

    #[test]
    fn paksha_duplicated_from_tithi() {
        let p = delhi_panchang(Moment::new(2024, 7, 5, 0, 0, 0.0));
        assert_eq!(p.paksha, p.tithi.paksha);
    }
}
