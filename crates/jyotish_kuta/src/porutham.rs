//! South Indian Porutham: 10 pass/fail factors.
//!
//! Rajju and Vedha are essential — a failure in either forces the overall
//! result to "not recommended" regardless of the other eight factors.

use serde::{Deserialize, Serialize};

use jyotish_vedic::{Nakshatra, Rashi};

use crate::tables::{
    Gana, gana, lord_considers_friend, lords_mutual_friends, rajju, vashya, vedha_pair, yoni,
    yoni_enemies, Vashya,
};

/// Outcome of a single porutham check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    Pass,
    Fail,
    Partial,
}

/// Result of one porutham factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoruthamResult {
    pub name: &'static str,
    pub outcome: MatchOutcome,
    /// 0.0..=1.0 strength of the factor.
    pub score: f64,
    /// Essential factors alone can block the match.
    pub essential: bool,
    pub description: String,
}

/// Overall recommendation tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SouthRecommendation {
    HighlyCompatible,
    Compatible,
    LowCompatibility,
    NotRecommended,
}

impl SouthRecommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighlyCompatible => "Highly Compatible - Excellent match",
            Self::Compatible => "Compatible - Good match with minor differences",
            Self::LowCompatibility => "Low Compatibility - Significant differences exist",
            Self::NotRecommended => "Not Recommended - Essential poruthams failed",
        }
    }
}

/// Complete South Indian matching result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SouthIndianMatch {
    pub poruthams: Vec<PoruthamResult>,
    pub total_matched: usize,
    pub total_checked: usize,
    pub percentage: f64,
    pub recommendation: SouthRecommendation,
    pub has_hard_blockers: bool,
    pub blockers: Vec<String>,
}

/// Forward count from `from` to `to` on the 27-mansion wheel, 1-based.
fn nakshatra_count(from: Nakshatra, to: Nakshatra) -> u8 {
    ((to.number() as i16 - from.number() as i16).rem_euclid(27)) as u8 + 1
}

/// Forward count from `from` to `to` on the 12-sign wheel, 1-based.
fn rashi_count(from: Rashi, to: Rashi) -> u8 {
    ((to.number() as i16 - from.number() as i16).rem_euclid(12)) as u8 + 1
}

fn check_dinam(bride: Nakshatra, groom: Nakshatra) -> PoruthamResult {
    let count1 = nakshatra_count(bride, groom);
    let count2 = nakshatra_count(groom, bride);
    let inauspicious = [2, 4, 6, 8, 9];
    let pass = !inauspicious.contains(&count1) && !inauspicious.contains(&count2);
    PoruthamResult {
        name: "Dinam",
        outcome: if pass { MatchOutcome::Pass } else { MatchOutcome::Fail },
        score: if pass { 1.0 } else { 0.0 },
        essential: false,
        description: "Evaluates daily happiness and health through nakshatra counting".into(),
    }
}

fn check_ganam(bride: Nakshatra, groom: Nakshatra) -> PoruthamResult {
    let bride_gana = gana(bride);
    let groom_gana = gana(groom);

    let (outcome, score) = if bride_gana == groom_gana {
        (MatchOutcome::Pass, 1.0)
    } else if bride_gana == Gana::Deva {
        (MatchOutcome::Pass, 0.8)
    } else if groom_gana == Gana::Deva && bride_gana == Gana::Manushya {
        (MatchOutcome::Pass, 0.7)
    } else if bride_gana == Gana::Rakshasa || groom_gana == Gana::Rakshasa {
        (MatchOutcome::Fail, 0.2)
    } else {
        (MatchOutcome::Partial, 0.5)
    };

    PoruthamResult {
        name: "Ganam",
        outcome,
        score,
        essential: false,
        description: format!(
            "Bride: {}, Groom: {}. Evaluates temperament and mental compatibility.",
            bride_gana.name(),
            groom_gana.name()
        ),
    }
}

fn check_mahendra(bride: Nakshatra, groom: Nakshatra) -> PoruthamResult {
    let count = nakshatra_count(bride, groom);
    let pass = [4, 7, 10, 13, 16, 19, 22, 25].contains(&count);
    PoruthamResult {
        name: "Mahendra",
        outcome: if pass { MatchOutcome::Pass } else { MatchOutcome::Fail },
        score: if pass { 1.0 } else { 0.0 },
        essential: false,
        description: format!("Evaluates prosperity, wealth, and progeny. Count: {count}"),
    }
}

fn check_stree_deergham(bride: Nakshatra, groom: Nakshatra) -> PoruthamResult {
    // Plain forward distance here, without the 1-based shift.
    let count = (groom.number() as i16 - bride.number() as i16).rem_euclid(27) as u8;
    let pass = count >= 13;
    PoruthamResult {
        name: "Stree Deergham",
        outcome: if pass { MatchOutcome::Pass } else { MatchOutcome::Fail },
        score: if pass { 1.0 } else { 0.0 },
        essential: false,
        description: format!(
            "Evaluates the longevity and well-being of the bride. Forward count: {count}"
        ),
    }
}

fn check_yoni(bride: Nakshatra, groom: Nakshatra) -> PoruthamResult {
    let (bride_animal, _) = yoni(bride);
    let (groom_animal, _) = yoni(groom);

    let (outcome, score) = if yoni_enemies(bride_animal, groom_animal) {
        (MatchOutcome::Fail, 0.0)
    } else if bride_animal == groom_animal {
        (MatchOutcome::Pass, 1.0)
    } else {
        (MatchOutcome::Pass, 0.7)
    };

    PoruthamResult {
        name: "Yoni",
        outcome,
        score,
        essential: false,
        description: format!(
            "Bride: {}, Groom: {}. Evaluates physical compatibility.",
            bride_animal.name(),
            groom_animal.name()
        ),
    }
}

fn check_rashi(bride: Rashi, groom: Rashi) -> PoruthamResult {
    let count = rashi_count(bride, groom);
    let (outcome, score) = if count == 6 || count == 8 {
        (MatchOutcome::Fail, 0.0)
    } else {
        let strong = [1, 5, 7, 9].contains(&count);
        (MatchOutcome::Pass, if strong { 1.0 } else { 0.8 })
    };
    PoruthamResult {
        name: "Rashi",
        outcome,
        score,
        essential: false,
        description: format!("Moon sign relationship. Count from bride to groom: {count}"),
    }
}

fn check_rasiyathipathi(bride: Rashi, groom: Rashi) -> PoruthamResult {
    let bride_lord = bride.lord();
    let groom_lord = groom.lord();

    let (outcome, score) = if bride_lord == groom_lord {
        (MatchOutcome::Pass, 1.0)
    } else if lords_mutual_friends(bride_lord, groom_lord) {
        (MatchOutcome::Pass, 1.0)
    } else if lord_considers_friend(bride_lord, groom_lord)
        || lord_considers_friend(groom_lord, bride_lord)
    {
        (MatchOutcome::Partial, 0.5)
    } else {
        (MatchOutcome::Fail, 0.0)
    };

    PoruthamResult {
        name: "Rasiyathipathi",
        outcome,
        score,
        essential: false,
        description: format!(
            "Sign lords - Bride: {}, Groom: {}",
            bride_lord.english_name(),
            groom_lord.english_name()
        ),
    }
}

fn check_vasya(bride: Rashi, groom: Rashi) -> PoruthamResult {
    let bride_type = vashya(bride);
    let groom_type = vashya(groom);

    let pair_score = |a: Vashya, b: Vashya| -> f64 {
        match (a, b) {
            _ if a == b => 1.0,
            (Vashya::Dwipad, Vashya::Chatushpad) => 0.5,
            _ => 0.0,
        }
    };

    let mut score = pair_score(bride_type, groom_type);
    if score == 0.0 {
        score = match pair_score(groom_type, bride_type) {
            0.0 => 0.25,
            s => s,
        };
    }

    PoruthamResult {
        name: "Vasya",
        outcome: if score >= 0.5 { MatchOutcome::Pass } else { MatchOutcome::Fail },
        score,
        essential: false,
        description: format!(
            "Mutual attraction - Bride: {}, Groom: {}",
            bride_type.name(),
            groom_type.name()
        ),
    }
}

fn check_rajju(bride: Nakshatra, groom: Nakshatra) -> PoruthamResult {
    let bride_rajju = rajju(bride);
    let groom_rajju = rajju(groom);

    if bride_rajju == groom_rajju {
        PoruthamResult {
            name: "Rajju",
            outcome: MatchOutcome::Fail,
            score: 0.0,
            essential: true,
            description: format!(
                "Same Rajju ({}) - Inauspicious. May indicate difficulties.",
                bride_rajju.name()
            ),
        }
    } else {
        PoruthamResult {
            name: "Rajju",
            outcome: MatchOutcome::Pass,
            score: 1.0,
            essential: true,
            description: format!(
                "Different Rajju (Bride: {}, Groom: {}) - Auspicious",
                bride_rajju.name(),
                groom_rajju.name()
            ),
        }
    }
}

fn check_vedha(bride: Nakshatra, groom: Nakshatra) -> PoruthamResult {
    if vedha_pair(bride, groom) {
        PoruthamResult {
            name: "Vedha",
            outcome: MatchOutcome::Fail,
            score: 0.0,
            essential: true,
            description: "Vedha exists between the nakshatras - Strong affliction".into(),
        }
    } else {
        PoruthamResult {
            name: "Vedha",
            outcome: MatchOutcome::Pass,
            score: 1.0,
            essential: true,
            description: "No Vedha - Clear of mutual affliction".into(),
        }
    }
}

/// Calculate the full 10-porutham South Indian match.
pub fn calculate_porutham(
    bride_nakshatra: Nakshatra,
    bride_rashi: Rashi,
    groom_nakshatra: Nakshatra,
    groom_rashi: Rashi,
) -> SouthIndianMatch {
    let mut blockers = Vec::new();

    let poruthams = vec![
        check_dinam(bride_nakshatra, groom_nakshatra),
        check_ganam(bride_nakshatra, groom_nakshatra),
        check_mahendra(bride_nakshatra, groom_nakshatra),
        check_stree_deergham(bride_nakshatra, groom_nakshatra),
        check_yoni(bride_nakshatra, groom_nakshatra),
        check_rashi(bride_rashi, groom_rashi),
        check_rasiyathipathi(bride_rashi, groom_rashi),
        check_vasya(bride_rashi, groom_rashi),
        check_rajju(bride_nakshatra, groom_nakshatra),
        check_vedha(bride_nakshatra, groom_nakshatra),
    ];

    for p in &poruthams {
        if p.essential && p.outcome == MatchOutcome::Fail {
            blockers.push(match p.name {
                "Rajju" => "Rajju Porutham failed - potential for widowhood".to_string(),
                _ => "Vedha Porutham failed - mutual affliction".to_string(),
            });
        }
    }

    let total_matched = poruthams
        .iter()
        .filter(|p| p.outcome == MatchOutcome::Pass)
        .count();
    let total_checked = poruthams.len();
    let percentage = total_matched as f64 / total_checked as f64 * 100.0;

    let has_hard_blockers = !blockers.is_empty();
    let recommendation = if has_hard_blockers {
        SouthRecommendation::NotRecommended
    } else if percentage >= 70.0 {
        SouthRecommendation::HighlyCompatible
    } else if percentage >= 50.0 {
        SouthRecommendation::Compatible
    } else {
        SouthRecommendation::LowCompatibility
    };

    SouthIndianMatch {
        poruthams,
        total_matched,
        total_checked,
        percentage,
        recommendation,
        has_hard_blockers,
        blockers,
    }
}
