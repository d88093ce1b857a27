//! North Indian Ashtakoota (Guna Milan): 8 weighted factors, 36 points.
//!
//! Bhakoot (7) and Nadi (8) each register a dosha when they score zero.
//! The Nadi dosha is cancelled — with a fixed partial restoration of 4
//! points, never a full recompute — when the partners share a rashi with
//! different nakshatras, or share the same nakshatra (the classical
//! same-star exception).

use serde::{Deserialize, Serialize};

use jyotish_vedic::{Nakshatra, Rashi};

use crate::tables::{gana, maitri_points, nadi, varna, vashya, yoni, yoni_enemies, Gana, Vashya};

/// Total maximum points across the 8 kootas.
pub const MAX_POINTS: u8 = 36;

/// Points restored when a Nadi dosha is cancelled (partial credit).
const NADI_EXCEPTION_POINTS: f64 = 4.0;

/// Result of one koota factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KootaResult {
    pub name: &'static str,
    pub max_points: u8,
    pub points: f64,
    pub description: String,
}

/// Overall recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NorthRecommendation {
    Excellent,
    Good,
    Average,
    BelowAverage,
    NotRecommended,
    /// Both doshas present, regardless of percentage.
    Caution,
}

impl NorthRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match - Highly recommended",
            Self::Good => "Good Match - Compatible with minor adjustments",
            Self::Average => "Average Match - Some challenges expected",
            Self::BelowAverage => "Below Average - Significant compatibility issues",
            Self::NotRecommended => "Not Recommended - Major incompatibilities",
            Self::Caution => "Caution Advised - Both Nadi and Bhakoot doshas present",
        }
    }
}

/// Complete Ashtakoota matching result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AshtakootaMatch {
    pub kootas: Vec<KootaResult>,
    pub total_points: f64,
    pub max_points: u8,
    pub percentage: f64,
    pub recommendation: NorthRecommendation,
    pub nadi_dosha: bool,
    pub bhakoot_dosha: bool,
    pub exceptions_applied: Vec<String>,
}

fn check_varna(bride: Rashi, groom: Rashi) -> KootaResult {
    let bride_varna = varna(bride);
    let groom_varna = varna(groom);
    // The groom's varna must be equal or higher.
    let points = if groom_varna >= bride_varna { 1.0 } else { 0.0 };
    KootaResult {
        name: "Varna",
        max_points: 1,
        points,
        description: format!(
            "Spiritual compatibility - Bride: {}, Groom: {}",
            bride_varna.name(),
            groom_varna.name()
        ),
    }
}

fn check_vashya(bride: Rashi, groom: Rashi) -> KootaResult {
    let bride_type = vashya(bride);
    let groom_type = vashya(groom);

    let points = if bride_type == groom_type {
        2.0
    } else if matches!(
        (bride_type, groom_type),
        (Vashya::Dwipad, Vashya::Chatushpad) | (Vashya::Chatushpad, Vashya::Dwipad)
    ) {
        1.0
    } else if bride_type == Vashya::Keeta || groom_type == Vashya::Keeta {
        0.0
    } else {
        0.5
    };

    KootaResult {
        name: "Vashya",
        max_points: 2,
        points,
        description: format!(
            "Mutual influence - Bride: {}, Groom: {}",
            bride_type.name(),
            groom_type.name()
        ),
    }
}

fn check_tara(bride: Nakshatra, groom: Nakshatra) -> KootaResult {
    let count1 = ((bride.number() as i16 - groom.number() as i16).rem_euclid(27)) as u8 + 1;
    let count2 = ((groom.number() as i16 - bride.number() as i16).rem_euclid(27)) as u8 + 1;
    let tara1 = (count1 - 1) % 9 + 1;
    let tara2 = (count2 - 1) % 9 + 1;

    // Vipat (3), Pratyak (5), Naidhana (7) are the afflicted taras.
    let inauspicious = [3, 5, 7];
    let bad1 = inauspicious.contains(&tara1);
    let bad2 = inauspicious.contains(&tara2);
    let points = match (bad1, bad2) {
        (false, false) => 3.0,
        (true, true) => 0.0,
        _ => 1.5,
    };

    KootaResult {
        name: "Tara",
        max_points: 3,
        points,
        description: format!("Birth star destiny - taras {tara1} and {tara2}"),
    }
}

fn check_yoni(bride: Nakshatra, groom: Nakshatra) -> KootaResult {
    let (bride_animal, bride_gender) = yoni(bride);
    let (groom_animal, groom_gender) = yoni(groom);

    let points = if yoni_enemies(bride_animal, groom_animal) {
        0.0
    } else if bride_animal == groom_animal {
        if bride_gender != groom_gender { 4.0 } else { 3.0 }
    } else {
        2.0
    };

    KootaResult {
        name: "Yoni",
        max_points: 4,
        points,
        description: format!(
            "Physical compatibility - Bride: {}, Groom: {}",
            bride_animal.name(),
            groom_animal.name()
        ),
    }
}

fn check_graha_maitri(bride: Rashi, groom: Rashi) -> KootaResult {
    let bride_lord = bride.lord();
    let groom_lord = groom.lord();

    let points = if bride_lord == groom_lord {
        5.0
    } else {
        maitri_points(bride_lord, groom_lord).max(maitri_points(groom_lord, bride_lord))
    };

    KootaResult {
        name: "Graha Maitri",
        max_points: 5,
        points,
        description: format!(
            "Mental compatibility - lords {} and {}",
            bride_lord.english_name(),
            groom_lord.english_name()
        ),
    }
}

fn check_gana(bride: Nakshatra, groom: Nakshatra) -> KootaResult {
    let bride_gana = gana(bride);
    let groom_gana = gana(groom);

    let points = match (bride_gana, groom_gana) {
        (Gana::Deva, Gana::Deva) => 6.0,
        (Gana::Deva, Gana::Manushya) => 5.0,
        (Gana::Deva, Gana::Rakshasa) => 1.0,
        (Gana::Manushya, Gana::Deva) => 3.0,
        (Gana::Manushya, Gana::Manushya) => 6.0,
        (Gana::Manushya, Gana::Rakshasa) => 0.0,
        (Gana::Rakshasa, Gana::Deva) => 1.0,
        (Gana::Rakshasa, Gana::Manushya) => 0.0,
        (Gana::Rakshasa, Gana::Rakshasa) => 6.0,
    };

    KootaResult {
        name: "Gana",
        max_points: 6,
        points,
        description: format!(
            "Temperament - Bride: {}, Groom: {}",
            bride_gana.name(),
            groom_gana.name()
        ),
    }
}

fn check_bhakoot(bride: Rashi, groom: Rashi) -> KootaResult {
    let count = ((groom.number() as i16 - bride.number() as i16).rem_euclid(12)) as u8 + 1;
    let reverse = ((bride.number() as i16 - groom.number() as i16).rem_euclid(12)) as u8 + 1;

    // The 2/12, 5/9, and 6/8 relationships carry the dosha.
    let inauspicious_pairs = [(2, 12), (12, 2), (5, 9), (9, 5), (6, 8), (8, 6)];
    let dosha =
        inauspicious_pairs.contains(&(count, reverse)) || count == 6 || count == 8;
    let points = if dosha { 0.0 } else { 7.0 };

    KootaResult {
        name: "Bhakoot",
        max_points: 7,
        points,
        description: format!("Family welfare - positions {count} and {reverse}"),
    }
}

fn check_nadi(bride: Nakshatra, groom: Nakshatra) -> KootaResult {
    let bride_nadi = nadi(bride);
    let groom_nadi = nadi(groom);
    let points = if bride_nadi == groom_nadi { 0.0 } else { 8.0 };

    KootaResult {
        name: "Nadi",
        max_points: 8,
        points,
        description: format!(
            "Health and progeny - Bride: {}, Groom: {}",
            bride_nadi.name(),
            groom_nadi.name()
        ),
    }
}

/// Calculate the full Ashtakoota match.
///
/// With `apply_exceptions` the Nadi dosha cancellation rules run; the
/// restored credit is a fixed partial value, and the percentage is
/// recomputed after the restoration.
pub fn calculate_ashtakoota(
    bride_nakshatra: Nakshatra,
    bride_rashi: Rashi,
    groom_nakshatra: Nakshatra,
    groom_rashi: Rashi,
    apply_exceptions: bool,
) -> AshtakootaMatch {
    let mut kootas = vec![
        check_varna(bride_rashi, groom_rashi),
        check_vashya(bride_rashi, groom_rashi),
        check_tara(bride_nakshatra, groom_nakshatra),
        check_yoni(bride_nakshatra, groom_nakshatra),
        check_graha_maitri(bride_rashi, groom_rashi),
        check_gana(bride_nakshatra, groom_nakshatra),
        check_bhakoot(bride_rashi, groom_rashi),
        check_nadi(bride_nakshatra, groom_nakshatra),
    ];

    let mut nadi_dosha = kootas[7].points == 0.0;
    let bhakoot_dosha = kootas[6].points == 0.0;
    let mut exceptions = Vec::new();

    if apply_exceptions && nadi_dosha {
        if bride_rashi == groom_rashi && bride_nakshatra != groom_nakshatra {
            exceptions.push("Nadi dosha cancelled: same rashi, different nakshatra".to_string());
            kootas[7].points = NADI_EXCEPTION_POINTS;
            nadi_dosha = false;
        } else if bride_nakshatra == groom_nakshatra {
            exceptions.push("Nadi dosha cancelled: same nakshatra".to_string());
            kootas[7].points = NADI_EXCEPTION_POINTS;
            nadi_dosha = false;
        }
    }

    let total_points: f64 = kootas.iter().map(|k| k.points).sum();
    let percentage = total_points / MAX_POINTS as f64 * 100.0;

    let recommendation = if nadi_dosha && bhakoot_dosha {
        NorthRecommendation::Caution
    } else if percentage >= 75.0 {
        NorthRecommendation::Excellent
    } else if percentage >= 60.0 {
        NorthRecommendation::Good
    } else if percentage >= 50.0 {
        NorthRecommendation::Average
    } else if percentage >= 36.0 {
        NorthRecommendation::BelowAverage
    } else {
        NorthRecommendation::NotRecommended
    };

    AshtakootaMatch {
        kootas,
        total_points,
        max_points: MAX_POINTS,
        percentage,
        recommendation,
        nadi_dosha,
        bhakoot_dosha,
        exceptions_applied: exceptions,
    }
}
