//! Lagna (ascendant) and equal house cusps.
//!
//! The ascendant's tropical ecliptic longitude follows the standard
//! spherical-astronomy formula (Meeus Ch. 13):
//!
//! `Asc = atan2(-cos(LST), sin(LST)·cos(ε) + tan(φ)·sin(ε))`
//!
//! The house division is equal: 12 cusps of 30° from the ascendant.
//! Latitudes beyond ±66.5° are rejected — near the polar circles the
//! ascendant formula degenerates (the ecliptic can hug the horizon), and
//! the platform fails such requests rather than returning undefined cusps.

use std::f64::consts::TAU;

use jyotish_time::{gmst_rad, local_sidereal_time_rad};

use crate::ayanamsha::{Ayanamsha, sidereal_longitude};
use crate::error::VedicError;
use crate::riseset::GeoLocation;
use crate::util::normalize_360;

/// Mean obliquity of the ecliptic at J2000, degrees.
pub(crate) const OBLIQUITY_J2000_DEG: f64 = 23.439_291_1;

/// Maximum latitude for ascendant/house computation.
pub const MAX_HOUSE_LATITUDE_DEG: f64 = 66.5;

/// Sidereal ascendant longitude in degrees [0, 360).
pub fn ascendant_sidereal_deg(
    jd: f64,
    location: &GeoLocation,
    system: Ayanamsha,
) -> Result<f64, VedicError> {
    if location.latitude_deg.abs() > MAX_HOUSE_LATITUDE_DEG {
        return Err(VedicError::InvalidLocation(
            "latitude exceeds 66.5 deg limit for house computation",
        ));
    }

    let lst = local_sidereal_time_rad(gmst_rad(jd), location.longitude_rad());
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let phi = location.latitude_rad();

    let asc = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin());
    let tropical_deg = asc.rem_euclid(TAU).to_degrees();

    Ok(sidereal_longitude(tropical_deg, system, jd))
}

/// 12 equal house cusps from the ascendant: cusp i = asc + 30°·(i−1).
pub fn equal_house_cusps(ascendant_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(ascendant_deg + i as f64 * 30.0);
    }
    cusps
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_time::calendar_to_jd;

    fn equator() -> GeoLocation {
        GeoLocation::new(0.0, 0.0, 0.0)
    }

    #[test]
    fn polar_latitude_rejected() {
        let loc = GeoLocation::new(78.0, 15.0, 0.0);
        let err = ascendant_sidereal_deg(2_451_545.0, &loc, Ayanamsha::Lahiri).unwrap_err();
        assert!(matches!(err, VedicError::InvalidLocation(_)));
    }

    #[test]
    fn boundary_latitude_accepted() {
        let loc = GeoLocation::new(66.4, 0.0, 0.0);
        assert!(ascendant_sidereal_deg(2_451_545.0, &loc, Ayanamsha::Lahiri).is_ok());
    }

    #[test]
    fn ascendant_in_range() {
        let jd = calendar_to_jd(2024, 5, 10.75);
        let loc = GeoLocation::new(28.6139, 77.209, 0.0);
        let asc = ascendant_sidereal_deg(jd, &loc, Ayanamsha::Lahiri).unwrap();
        assert!((0.0..360.0).contains(&asc));
    }

    #[test]
    fn ascendant_advances_through_day() {
        // The ascendant sweeps the whole zodiac once per sidereal day, so
        // two moments 6h apart must differ by roughly 90 deg.
        let jd = calendar_to_jd(2024, 5, 10.0);
        let loc = equator();
        let a0 = ascendant_sidereal_deg(jd, &loc, Ayanamsha::Lahiri).unwrap();
        let a6 = ascendant_sidereal_deg(jd + 0.25, &loc, Ayanamsha::Lahiri).unwrap();
        let advance = (a6 - a0).rem_euclid(360.0);
        assert!(
            (80.0..100.0).contains(&advance),
            "advance over 6h = {advance}"
        );
    }

    #[test]
    fn equal_cusps_structure() {
        let cusps = equal_house_cusps(123.0);
        assert!((cusps[0] - 123.0).abs() < 1e-12);
        assert!((cusps[1] - 153.0).abs() < 1e-12);
        assert!((cusps[11] - 93.0).abs() < 1e-12);
        for w in cusps.windows(2) {
            let gap = (w[1] - w[0]).rem_euclid(360.0);
            assert!((gap - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn equal_cusps_wrap() {
        let cusps = equal_house_cusps(350.0);
        assert!((cusps[1] - 20.0).abs() < 1e-12);
    }
}
