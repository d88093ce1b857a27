//! Geocentric planetary positions from Standish mean orbital elements.
//!
//! Each planet's heliocentric position comes from the JPL approximate
//! Keplerian elements (Standish, "Approximate Positions of the Planets",
//! 1800 AD – 2050 AD table) with an iterative Kepler solve; the geocentric
//! vector is the difference against the Earth-Moon barycenter position.
//! Light time and the EMB→Earth offset are neglected.

use crate::body::Body;

/// Keplerian elements at J2000 and their per-century rates.
///
/// Order: a (AU), e, I (deg), L (deg), long.peri (deg), long.node (deg).
struct Elements {
    base: [f64; 6],
    rate: [f64; 6],
}

const MERCURY: Elements = Elements {
    base: [
        0.387_099_27,
        0.205_635_93,
        7.004_979_02,
        252.250_323_50,
        77.457_796_28,
        48.330_765_93,
    ],
    rate: [
        0.000_000_37,
        0.000_019_06,
        -0.005_947_49,
        149_472.674_111_75,
        0.160_476_89,
        -0.125_340_81,
    ],
};

const VENUS: Elements = Elements {
    base: [
        0.723_335_66,
        0.006_776_72,
        3.394_676_05,
        181.979_099_50,
        131.602_467_18,
        76.679_842_55,
    ],
    rate: [
        0.000_003_90,
        -0.000_041_07,
        -0.000_788_90,
        58_517.815_387_29,
        0.002_683_29,
        -0.277_694_18,
    ],
};

/// Earth-Moon barycenter.
const EARTH: Elements = Elements {
    base: [
        1.000_002_61,
        0.016_711_23,
        -0.000_015_31,
        100.464_571_66,
        102.937_681_93,
        0.0,
    ],
    rate: [
        0.000_005_62,
        -0.000_043_92,
        -0.012_946_68,
        35_999.372_449_81,
        0.323_273_64,
        0.0,
    ],
};

const MARS: Elements = Elements {
    base: [
        1.523_710_34,
        0.093_394_10,
        1.849_691_42,
        -4.553_432_05,
        -23.943_629_59,
        49.559_538_91,
    ],
    rate: [
        0.000_018_47,
        0.000_078_82,
        -0.008_131_31,
        19_140.302_684_99,
        0.444_410_88,
        -0.292_573_43,
    ],
};

const JUPITER: Elements = Elements {
    base: [
        5.202_887_00,
        0.048_386_24,
        1.304_396_95,
        34.396_440_51,
        14.728_479_83,
        100.473_909_09,
    ],
    rate: [
        -0.000_116_07,
        -0.000_132_53,
        -0.001_837_14,
        3_034.746_127_75,
        0.212_526_68,
        0.204_691_06,
    ],
};

const SATURN: Elements = Elements {
    base: [
        9.536_675_94,
        0.053_861_79,
        2.485_991_87,
        49.954_244_23,
        92.598_878_31,
        113.662_424_48,
    ],
    rate: [
        -0.001_250_60,
        -0.000_509_91,
        0.001_936_09,
        1_222.493_622_01,
        -0.418_972_16,
        -0.288_677_94,
    ],
};

fn elements_for(body: Body) -> &'static Elements {
    match body {
        Body::Mercury => &MERCURY,
        Body::Venus => &VENUS,
        Body::Mars => &MARS,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        // The remaining bodies never reach this module.
        Body::Sun | Body::Moon | Body::MeanNode => &EARTH,
    }
}

/// Solve Kepler's equation `E - e*sin(E) = M` (all in degrees).
fn solve_kepler_deg(mean_anomaly_deg: f64, e: f64) -> f64 {
    let e_star = e.to_degrees();
    let m = mean_anomaly_deg;
    let mut ecc_anom = m + e_star * m.to_radians().sin();
    for _ in 0..10 {
        let delta_m = m - (ecc_anom - e_star * ecc_anom.to_radians().sin());
        let delta_e = delta_m / (1.0 - e * ecc_anom.to_radians().cos());
        ecc_anom += delta_e;
        if delta_e.abs() < 1e-8 {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric ecliptic-J2000 position of a body in AU.
fn heliocentric_xyz(el: &Elements, t: f64) -> [f64; 3] {
    let a = el.base[0] + el.rate[0] * t;
    let e = el.base[1] + el.rate[1] * t;
    let incl = (el.base[2] + el.rate[2] * t).to_radians();
    let mean_lon = el.base[3] + el.rate[3] * t;
    let lon_peri = el.base[4] + el.rate[4] * t;
    let lon_node = el.base[5] + el.rate[5] * t;

    let arg_peri = (lon_peri - lon_node).to_radians();
    let node = lon_node.to_radians();

    let mean_anom = (mean_lon - lon_peri).rem_euclid(360.0);
    let ecc_anom = solve_kepler_deg(mean_anom, e).to_radians();

    // Position in the orbital plane.
    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    // Rotate into the ecliptic frame.
    let (cw, sw) = (arg_peri.cos(), arg_peri.sin());
    let (co, so) = (node.cos(), node.sin());
    let (ci, si) = (incl.cos(), incl.sin());

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}

/// Geocentric tropical ecliptic longitude and latitude of a planet, degrees.
///
/// `t` = Julian centuries since J2000.0.
pub fn geocentric_lon_lat_deg(body: Body, t: f64) -> (f64, f64) {
    let planet = heliocentric_xyz(elements_for(body), t);
    let earth = heliocentric_xyz(&EARTH, t);
    let x = planet[0] - earth[0];
    let y = planet[1] - earth[1];
    let z = planet[2] - earth[2];
    let lon = y.atan2(x).to_degrees();
    let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
    (lon, lat)
}

/// Geocentric solar longitude implied by the Earth elements, degrees [0,360).
///
/// Cross-check value: the Sun seen from Earth is the anti-direction of the
/// Earth's heliocentric position.
pub fn geocentric_solar_longitude_deg(t: f64) -> f64 {
    let earth = heliocentric_xyz(&EARTH, t);
    ((-earth[1]).atan2(-earth[0]).to_degrees()).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kepler_circular_orbit() {
        // e = 0: eccentric anomaly equals mean anomaly.
        assert!((solve_kepler_deg(123.4, 0.0) - 123.4).abs() < 1e-9);
    }

    #[test]
    fn kepler_converges_high_eccentricity() {
        let e = 0.21; // Mercury-like
        let ecc = solve_kepler_deg(75.0, e);
        let back = ecc - e.to_degrees() * ecc.to_radians().sin();
        assert!((back - 75.0).abs() < 1e-6, "residual {}", back - 75.0);
    }

    #[test]
    fn earth_distance_near_one_au() {
        let r = heliocentric_xyz(&EARTH, 0.1);
        let dist = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
        assert!((0.98..1.02).contains(&dist), "dist = {dist}");
    }

    #[test]
    fn jupiter_distance_plausible() {
        let r = heliocentric_xyz(&JUPITER, 0.0);
        let dist = (r[0] * r[0] + r[1] * r[1] + r[2] * r[2]).sqrt();
        assert!((4.9..5.5).contains(&dist), "dist = {dist}");
    }

    #[test]
    fn planet_latitudes_bounded() {
        // Geocentric ecliptic latitude is bounded by a few degrees for the
        // classical planets (Mercury can reach ~±7 when near inferior
        // conjunction).
        for k in 0..20 {
            let t = -0.5 + k as f64 * 0.05;
            for body in [Body::Mercury, Body::Venus, Body::Mars, Body::Jupiter, Body::Saturn] {
                let (_, lat) = geocentric_lon_lat_deg(body, t);
                assert!(lat.abs() < 9.0, "{body:?} at t={t}: lat = {lat}");
            }
        }
    }
}
