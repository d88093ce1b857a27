//! Mean lunar ascending node (Rahu).
//!
//! Polynomial for the mean longitude of the ascending node, Meeus
//! Chapter 47. The mean node regresses ~19.34°/year, so its rate is
//! always negative (permanently retrograde).

/// Mean ascending-node longitude in degrees (not normalized).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_node_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t2 + t3 / 467_441.0 - t4 / 60_616_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_at_j2000() {
        let n = mean_node_deg(0.0);
        assert!((n - 125.044_547_9).abs() < 1e-9);
    }

    #[test]
    fn node_regresses() {
        // One year later the node is ~19.34 deg earlier.
        let year = 1.0 / 100.0;
        let delta = mean_node_deg(year) - mean_node_deg(0.0);
        assert!((delta - (-19.34)).abs() < 0.05, "delta = {delta}");
    }

    #[test]
    fn full_cycle_18_6_years() {
        let cycle_centuries = 18.61 / 100.0;
        let delta = mean_node_deg(cycle_centuries) - mean_node_deg(0.0);
        assert!((delta + 360.0).abs() < 0.5, "delta = {delta}");
    }
}
