//! Karana (half-tithi) classification.
//!
//! A synodic month holds 60 half-tithi slots served by 11 named karanas:
//! 7 movable karanas cycling through slots 2..57, and 4 fixed karanas at
//! the boundary slots (Kimstughna at slot 1; Shakuni, Chatushpada, and
//! Naga at slots 58-60).

use serde::{Deserialize, Serialize};

/// Half-tithi slots per synodic month.
pub const KARANA_SLOTS: u8 = 60;

/// The 11 karana names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Gara,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

/// The 7 movable karanas in cycle order.
pub const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Gara,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Gara => "Gara",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Whether this karana occupies a fixed slot (occurs once per month).
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

/// Karana classification for a moment within a tithi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaInfo {
    /// 1-based half-tithi slot in the synodic month, 1..=60.
    pub number: u8,
    /// The karana occupying the slot.
    pub karana: Karana,
}

/// Determine the karana from the tithi number and its elapsed percentage.
///
/// The first half of a tithi (percent < 50) is its first karana slot.
/// Out-of-range tithi numbers are clamped into 1..=30.
pub fn karana_from_tithi(tithi_number: u8, percent_elapsed: f64) -> KaranaInfo {
    let tithi = tithi_number.clamp(1, 30);
    let half = if percent_elapsed < 50.0 { 1 } else { 2 };
    let number = (tithi - 1) * 2 + half;

    let karana = if number <= 1 {
        Karana::Kimstughna
    } else if number >= 58 {
        match number {
            58 => Karana::Shakuni,
            59 => Karana::Chatushpada,
            _ => Karana::Naga,
        }
    } else {
        MOVABLE_KARANAS[((number - 2) % 7) as usize]
    };

    KaranaInfo { number, karana }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slot_is_kimstughna() {
        let info = karana_from_tithi(1, 10.0);
        assert_eq!(info.number, 1);
        assert_eq!(info.karana, Karana::Kimstughna);
        assert!(info.karana.is_fixed());
    }

    #[test]
    fn second_slot_starts_movable_cycle() {
        let info = karana_from_tithi(1, 60.0);
        assert_eq!(info.number, 2);
        assert_eq!(info.karana, Karana::Bava);
        assert!(!info.karana.is_fixed());
    }

    #[test]
    fn movable_cycle_repeats() {
        // Slot 9 = (9-2) % 7 = 0 → Bava again.
        let info = karana_from_tithi(5, 10.0);
        assert_eq!(info.number, 9);
        assert_eq!(info.karana, Karana::Bava);
    }

    #[test]
    fn vishti_positions() {
        // Slot 8 = (8-2) % 7 = 6 → Vishti.
        let info = karana_from_tithi(4, 60.0);
        assert_eq!(info.number, 8);
        assert_eq!(info.karana, Karana::Vishti);
    }

    #[test]
    fn fixed_tail_slots() {
        assert_eq!(karana_from_tithi(29, 60.0).karana, Karana::Shakuni);
        assert_eq!(karana_from_tithi(29, 60.0).number, 58);
        assert_eq!(karana_from_tithi(30, 10.0).karana, Karana::Chatushpada);
        assert_eq!(karana_from_tithi(30, 60.0).karana, Karana::Naga);
        assert_eq!(karana_from_tithi(30, 60.0).number, 60);
    }

    #[test]
    fn slot_57_is_movable() {
        // Last movable slot before the fixed tail: (57-2) % 7 = 6 → Vishti.
        let info = karana_from_tithi(29, 10.0);
        assert_eq!(info.number, 57);
        assert_eq!(info.karana, Karana::Vishti);
    }

    #[test]
    fn out_of_range_tithi_clamped() {
        assert_eq!(karana_from_tithi(0, 0.0).number, 1);
        assert_eq!(karana_from_tithi(99, 60.0).number, 60);
    }

    #[test]
    fn all_slots_valid() {
        for tithi in 1..=30u8 {
            for &pct in &[0.0, 75.0] {
                let info = karana_from_tithi(tithi, pct);
                assert!((1..=KARANA_SLOTS).contains(&info.number));
            }
        }
    }
}
