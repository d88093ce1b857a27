//! Varga (divisional chart) transforms.
//!
//! Each transform maps a sidereal longitude to a 1-based sign in the
//! divisional chart by splitting the occupied 30° sign into N equal parts
//! and counting from a transform-specific starting sign. Every transform
//! is a pure function of a single longitude; there is no cross-body
//! interaction.

use crate::util::normalize_360;

/// Occupied 0-based sign and the part index within it for an N-fold split.
fn sign_and_part(lon_deg: f64, divisions: u16) -> (u8, u8) {
    let lon = normalize_360(lon_deg);
    let sign = ((lon / 30.0).floor() as u8).min(11);
    let deg_in_sign = lon - sign as f64 * 30.0;
    let part_span = 30.0 / divisions as f64;
    let part = ((deg_in_sign / part_span).floor() as u16).min(divisions - 1);
    (sign, part as u8)
}

/// Navamsa (D9): the 9-part cycle starts from the sign's element —
/// fire from Mesha, earth from Makara, air from Tula, water from Karka.
pub fn navamsa_sign(lon_deg: f64) -> u8 {
    let (sign, part) = sign_and_part(lon_deg, 9);
    const ELEMENT_STARTS: [u8; 4] = [0, 9, 6, 3];
    let start = ELEMENT_STARTS[(sign % 4) as usize];
    (start + part) % 12 + 1
}

/// Dasamsa (D10): odd signs count from themselves, even signs from the 9th.
pub fn dasamsa_sign(lon_deg: f64) -> u8 {
    let (sign, part) = sign_and_part(lon_deg, 10);
    let start = if sign % 2 == 0 { sign } else { (sign + 8) % 12 };
    (start + part) % 12 + 1
}

/// Saptamsa (D7): odd signs count from themselves, even signs from the 7th.
pub fn saptamsa_sign(lon_deg: f64) -> u8 {
    let (sign, part) = sign_and_part(lon_deg, 7);
    let start = if sign % 2 == 0 { sign } else { (sign + 6) % 12 };
    (start + part) % 12 + 1
}

/// Dwadasamsa (D12): the 12-part cycle counts from the occupied sign.
pub fn dwadasamsa_sign(lon_deg: f64) -> u8 {
    let (sign, part) = sign_and_part(lon_deg, 12);
    (sign + part) % 12 + 1
}

/// Equal-subdivision fallback for divisions without a dedicated rule.
pub fn generic_varga_sign(lon_deg: f64, divisions: u16) -> u8 {
    let divisions = divisions.max(1);
    let (sign, part) = sign_and_part(lon_deg, divisions);
    ((sign as u16 + part as u16) % 12) as u8 + 1
}

/// Dispatch a divisional transform by its D-number.
///
/// D9, D10, D7, and D12 use their dedicated rules; anything else uses the
/// generic equal subdivision.
pub fn varga_sign(lon_deg: f64, divisions: u16) -> u8 {
    match divisions {
        9 => navamsa_sign(lon_deg),
        10 => dasamsa_sign(lon_deg),
        7 => saptamsa_sign(lon_deg),
        12 => dwadasamsa_sign(lon_deg),
        n => generic_varga_sign(lon_deg, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navamsa_start_of_mesha() {
        // 0° Mesha, fire sign → navamsa cycle starts at Mesha.
        assert_eq!(navamsa_sign(0.0), 1);
    }

    #[test]
    fn navamsa_parts_advance() {
        // Each 3°20' step advances one navamsa.
        assert_eq!(navamsa_sign(30.0 / 9.0 + 0.01), 2);
        assert_eq!(navamsa_sign(2.0 * 30.0 / 9.0 + 0.01), 3);
    }

    #[test]
    fn navamsa_earth_starts_makara() {
        // 0° Vrishabha (earth) → Makara (10).
        assert_eq!(navamsa_sign(30.0), 10);
    }

    #[test]
    fn navamsa_air_starts_tula() {
        // 0° Mithuna (air) → Tula (7).
        assert_eq!(navamsa_sign(60.0), 7);
    }

    #[test]
    fn navamsa_water_starts_karka() {
        // 0° Karka (water) → Karka (4).
        assert_eq!(navamsa_sign(90.0), 4);
    }

    #[test]
    fn dasamsa_odd_sign_from_self() {
        // 0° Mesha (odd, 0-based even) → Mesha.
        assert_eq!(dasamsa_sign(0.0), 1);
        // 15° Mesha → part 5 → sign 6 (Kanya).
        assert_eq!(dasamsa_sign(15.0), 6);
    }

    #[test]
    fn dasamsa_even_sign_from_ninth() {
        // 0° Vrishabha → (1 + 8) % 12 = 9 → Makara (10).
        assert_eq!(dasamsa_sign(30.0), 10);
    }

    #[test]
    fn saptamsa_even_sign_from_seventh() {
        // 0° Vrishabha → (1 + 6) % 12 = 7 → Vrischika (8).
        assert_eq!(saptamsa_sign(30.0), 8);
    }

    #[test]
    fn dwadasamsa_from_occupied_sign() {
        assert_eq!(dwadasamsa_sign(0.0), 1);
        // 2.5° steps advance one sign.
        assert_eq!(dwadasamsa_sign(2.6), 2);
        // 29.9° Mesha → part 11 → back to Meena (12).
        assert_eq!(dwadasamsa_sign(29.9), 12);
    }

    #[test]
    fn generic_matches_dwadasamsa_shape() {
        // D12's dedicated rule happens to equal the generic rule.
        for lon in [0.0, 17.3, 185.2, 359.9] {
            assert_eq!(dwadasamsa_sign(lon), generic_varga_sign(lon, 12));
        }
    }

    #[test]
    fn dispatcher_selects_named_rules() {
        for lon in [12.5, 100.0, 290.0] {
            assert_eq!(varga_sign(lon, 9), navamsa_sign(lon));
            assert_eq!(varga_sign(lon, 10), dasamsa_sign(lon));
            assert_eq!(varga_sign(lon, 7), saptamsa_sign(lon));
            assert_eq!(varga_sign(lon, 12), dwadasamsa_sign(lon));
            assert_eq!(varga_sign(lon, 16), generic_varga_sign(lon, 16));
        }
    }

    #[test]
    fn all_outputs_in_range() {
        for n in [2u16, 3, 7, 9, 10, 12, 16, 20, 60] {
            for k in 0..36 {
                let sign = varga_sign(k as f64 * 10.0, n);
                assert!((1..=12).contains(&sign), "D{n} at {}: {sign}", k * 10);
            }
        }
    }
}
