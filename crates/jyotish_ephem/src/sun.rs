//! Solar longitude, Meeus Chapter 25 (low-accuracy series).
//!
//! Returns the geometric true longitude; nutation and aberration are not
//! applied, consistent with the rest of the analytic theory.

/// Geometric true solar longitude in degrees (not normalized).
///
/// `t` = Julian centuries since J2000.0.
pub fn solar_longitude_deg(t: f64) -> f64 {
    // Geometric mean longitude and mean anomaly.
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();

    // Equation of center.
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    l0 + c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 Oct 13.0 TD = JDE 2448908.5, T = -0.072183436.
        // Meeus: true longitude = 199.90988 deg.
        let t = -0.072_183_436;
        let lon = solar_longitude_deg(t).rem_euclid(360.0);
        assert!((lon - 199.909_88).abs() < 0.001, "lon = {lon}");
    }

    #[test]
    fn equinox_2024_near_zero() {
        // 2024 Mar 20 ~03:06 UTC vernal equinox: longitude ≈ 0.
        let jd = jyotish_time::calendar_to_jd(2024, 3, 20.0 + 3.1 / 24.0);
        let t = jyotish_time::julian_centuries(jd);
        let lon = solar_longitude_deg(t).rem_euclid(360.0);
        let dist_to_zero = lon.min(360.0 - lon);
        assert!(dist_to_zero < 0.05, "lon = {lon}");
    }
}
