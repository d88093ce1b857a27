//! Chart computation.

use jyotish_ephem::ecliptic_state;
use jyotish_time::Moment;
use jyotish_vedic::{
    ALL_GRAHAS, Ayanamsha, DashaPeriod, GeoLocation, Graha, VedicError, ayanamsha_deg,
    ascendant_sidereal_deg, equal_house_cusps, nakshatra_from_longitude, normalize_360,
    rashi_from_longitude, sidereal_longitude, varga_sign, vimshottari_timeline,
};

use crate::types::{Ascendant, GrahaPosition, HouseCusp, Kundali};

/// Build a [`GrahaPosition`] from a sidereal longitude and motion data.
fn position_from_sidereal(
    graha: Graha,
    longitude_deg: f64,
    latitude_deg: f64,
    speed_deg_per_day: f64,
    retrograde: bool,
) -> GrahaPosition {
    let rashi = rashi_from_longitude(longitude_deg);
    let nak = nakshatra_from_longitude(longitude_deg);
    GrahaPosition {
        graha,
        longitude_deg,
        latitude_deg,
        speed_deg_per_day,
        retrograde,
        rashi: rashi.rashi,
        degree_in_rashi: rashi.degrees_in_rashi,
        nakshatra: nak.nakshatra,
        pada: nak.pada,
        nakshatra_lord: nak.nakshatra.lord(),
    }
}

/// Sidereal position of a directly computed graha (not Ketu).
pub fn graha_position(
    graha: Graha,
    jd: f64,
    system: Ayanamsha,
) -> Result<GrahaPosition, VedicError> {
    let body = graha
        .ephemeris_body()
        .ok_or(VedicError::InvalidInput("ketu is derived, not computed"))?;
    let state = ecliptic_state(body, jd)?;
    let sid_lon = sidereal_longitude(state.longitude_deg, system, jd);
    Ok(position_from_sidereal(
        graha,
        sid_lon,
        state.latitude_deg,
        state.speed_deg_per_day,
        state.speed_deg_per_day < 0.0,
    ))
}

/// Ketu from Rahu: exactly 180° opposite, latitude and motion inverted,
/// always flagged retrograde.
fn ketu_from_rahu(rahu: &GrahaPosition) -> GrahaPosition {
    let lon = normalize_360(rahu.longitude_deg + 180.0);
    position_from_sidereal(
        Graha::Ketu,
        lon,
        -rahu.latitude_deg,
        -rahu.speed_deg_per_day,
        true,
    )
}

fn validate_coordinates(latitude_deg: f64, longitude_deg: f64) -> Result<(), VedicError> {
    if !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(VedicError::InvalidLocation("latitude outside [-90, 90]"));
    }
    if !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(VedicError::InvalidLocation("longitude outside [-180, 180]"));
    }
    Ok(())
}

/// The 9 graha positions at a moment (7 computed, Rahu, derived Ketu).
pub fn transit_positions(
    moment: &Moment,
    system: Ayanamsha,
) -> Result<Vec<GrahaPosition>, VedicError> {
    let jd = moment.to_jd();
    let mut positions = Vec::with_capacity(9);
    for &graha in ALL_GRAHAS.iter() {
        if graha == Graha::Ketu {
            // Rahu was pushed just before Ketu in traditional order.
            let rahu = positions[Graha::Rahu.index() as usize];
            positions.push(ketu_from_rahu(&rahu));
        } else {
            positions.push(graha_position(graha, jd, system)?);
        }
    }
    Ok(positions)
}

/// Calculate a complete natal chart.
///
/// Fails with `VedicError` for coordinates outside their valid ranges,
/// latitudes beyond the house-computation limit, and epochs outside the
/// supported ephemeris range.
pub fn calculate_kundali(
    moment: &Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    system: Ayanamsha,
) -> Result<Kundali, VedicError> {
    validate_coordinates(latitude_deg, longitude_deg)?;
    let location = GeoLocation::new(latitude_deg, longitude_deg, 0.0);
    let jd = moment.to_jd();

    let asc_lon = ascendant_sidereal_deg(jd, &location, system)?;
    let ascendant = Ascendant {
        longitude_deg: asc_lon,
        rashi: rashi_from_longitude(asc_lon).rashi,
        nakshatra: nakshatra_from_longitude(asc_lon).nakshatra,
    };

    let grahas = transit_positions(moment, system)?;

    let houses: Vec<HouseCusp> = equal_house_cusps(asc_lon)
        .iter()
        .enumerate()
        .map(|(i, &lon)| {
            let rashi = rashi_from_longitude(lon);
            HouseCusp {
                number: i as u8 + 1,
                longitude_deg: lon,
                rashi: rashi.rashi,
                degree_in_rashi: rashi.degrees_in_rashi,
            }
        })
        .collect();

    let moon = grahas[Graha::Chandra.index() as usize];
    let sun = grahas[Graha::Surya.index() as usize];

    Ok(Kundali {
        moment: *moment,
        latitude_deg,
        longitude_deg,
        ayanamsha: system,
        ayanamsha_value_deg: ayanamsha_deg(system, jd),
        moon_rashi: moon.rashi.number(),
        moon_nakshatra: moon.nakshatra.number(),
        sun_rashi: sun.rashi.number(),
        ascendant,
        grahas,
        houses,
    })
}

/// Divisional chart: each graha's 1-based sign in the D-`division` chart.
///
/// A pure projection of the natal longitudes; no recomputation occurs.
pub fn divisional_chart(kundali: &Kundali, division: u16) -> Vec<(Graha, u8)> {
    kundali
        .grahas
        .iter()
        .map(|p| (p.graha, varga_sign(p.longitude_deg, division)))
        .collect()
}

/// Level-1 Vimshottari timeline for a chart.
pub fn dasha_timeline(kundali: &Kundali, horizon_years: f64) -> Vec<DashaPeriod> {
    vimshottari_timeline(
        kundali.moon().longitude_deg,
        kundali.moment.to_jd(),
        horizon_years,
    )
}
