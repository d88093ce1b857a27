//! Event kinds and their per-event rule tables.
//!
//! Each rule set names the favorable tithis, nakshatras, and weekdays, the
//! yogas to avoid, and (for some events) the lunar months to avoid. Event
//! kinds without a dedicated table share the general-auspicious rules.

use serde::{Deserialize, Serialize};

use jyotish_vedic::{Masa, Yoga};

/// Event categories the search understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Marriage,
    NamingCeremony,
    GrihaPravesh,
    BusinessOpening,
    Travel,
    Surgery,
    VehiclePurchase,
    PropertyPurchase,
    Engagement,
    EducationStart,
    JewelleryPurchase,
    GeneralAuspicious,
}

impl EventKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Marriage => "marriage",
            Self::NamingCeremony => "naming_ceremony",
            Self::GrihaPravesh => "griha_pravesh",
            Self::BusinessOpening => "business_opening",
            Self::Travel => "travel",
            Self::Surgery => "surgery",
            Self::VehiclePurchase => "vehicle_purchase",
            Self::PropertyPurchase => "property_purchase",
            Self::Engagement => "engagement",
            Self::EducationStart => "education_start",
            Self::JewelleryPurchase => "jewellery_purchase",
            Self::GeneralAuspicious => "general_auspicious",
        }
    }

    /// Look up an event kind by its snake_case name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        const ALL: [EventKind; 12] = [
            EventKind::Marriage,
            EventKind::NamingCeremony,
            EventKind::GrihaPravesh,
            EventKind::BusinessOpening,
            EventKind::Travel,
            EventKind::Surgery,
            EventKind::VehiclePurchase,
            EventKind::PropertyPurchase,
            EventKind::Engagement,
            EventKind::EducationStart,
            EventKind::JewelleryPurchase,
            EventKind::GeneralAuspicious,
        ];
        let lower = name.trim().to_ascii_lowercase();
        ALL.iter().copied().find(|e| e.name() == lower)
    }
}

/// Rule table for one event kind.
#[derive(Debug, Clone, Copy)]
pub struct EventRules {
    /// Favorable 1-based tithi numbers.
    pub good_tithis: &'static [u8],
    /// Favorable 1-based nakshatra numbers.
    pub good_nakshatras: &'static [u8],
    /// Favorable weekdays, Sunday = 0.
    pub good_weekdays: &'static [u8],
    /// Yogas that penalize the day.
    pub avoid_yogas: &'static [Yoga],
    /// Lunar months generally avoided for the event.
    pub avoid_masas: &'static [Masa],
    /// One-line description of the event's requirements.
    pub description: &'static str,
}

const MARRIAGE: EventRules = EventRules {
    good_tithis: &[2, 3, 5, 7, 10, 11, 12, 13],
    good_nakshatras: &[3, 4, 7, 8, 11, 12, 13, 17, 20, 21, 22, 25, 27],
    good_weekdays: &[1, 3, 4, 5],
    avoid_yogas: &[
        Yoga::Vishkambha,
        Yoga::Atiganda,
        Yoga::Shula,
        Yoga::Ganda,
        Yoga::Vyaghata,
        Yoga::Vajra,
        Yoga::Vyatipata,
        Yoga::Parigha,
        Yoga::Vaidhriti,
    ],
    avoid_masas: &[],
    description: "Marriage ceremonies require highly auspicious times for lifelong harmony.",
};

const GRIHA_PRAVESH: EventRules = EventRules {
    good_tithis: &[2, 3, 5, 7, 10, 11, 12, 13],
    good_nakshatras: &[3, 4, 6, 7, 8, 11, 12, 13, 20, 21, 22, 25, 26, 27],
    good_weekdays: &[1, 3, 4, 5],
    avoid_yogas: &[
        Yoga::Vishkambha,
        Yoga::Atiganda,
        Yoga::Shula,
        Yoga::Ganda,
        Yoga::Vyaghata,
        Yoga::Vajra,
        Yoga::Vyatipata,
    ],
    avoid_masas: &[Masa::Ashwin, Masa::Pausha],
    description: "House warming requires prosperity-bringing planetary alignments.",
};

const BUSINESS_OPENING: EventRules = EventRules {
    good_tithis: &[2, 3, 5, 6, 7, 10, 11, 12, 13],
    good_nakshatras: &[3, 4, 7, 8, 11, 12, 13, 16, 17, 20, 21, 22, 25, 27],
    good_weekdays: &[1, 3, 4, 5],
    avoid_yogas: &[Yoga::Vishkambha, Yoga::Atiganda, Yoga::Shula, Yoga::Ganda],
    avoid_masas: &[],
    description: "Business ventures need wealth-attracting muhurat.",
};

const TRAVEL: EventRules = EventRules {
    good_tithis: &[2, 3, 5, 6, 7, 10, 11, 12, 13],
    good_nakshatras: &[1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 12, 13, 17, 20, 21, 22, 25, 26, 27],
    good_weekdays: &[0, 1, 3, 4, 5],
    avoid_yogas: &[Yoga::Vishkambha, Yoga::Shula, Yoga::Vyaghata, Yoga::Vajra],
    avoid_masas: &[],
    description: "Travel muhurat ensures safe and successful journeys.",
};

const VEHICLE_PURCHASE: EventRules = EventRules {
    good_tithis: &[2, 3, 5, 6, 7, 10, 11, 12, 13],
    good_nakshatras: &[1, 3, 4, 5, 7, 8, 11, 12, 13, 17, 20, 21, 22],
    good_weekdays: &[1, 3, 4, 5],
    avoid_yogas: &[Yoga::Vishkambha, Yoga::Atiganda, Yoga::Shula, Yoga::Vyaghata],
    avoid_masas: &[],
    description: "Vehicle purchase requires stability and safety-enhancing times.",
};

const NAMING_CEREMONY: EventRules = EventRules {
    good_tithis: &[2, 3, 5, 6, 7, 10, 11, 12, 13],
    good_nakshatras: &[1, 2, 3, 4, 5, 7, 8, 11, 12, 13, 17, 20, 21, 22, 25, 26, 27],
    good_weekdays: &[1, 3, 4, 5],
    avoid_yogas: &[Yoga::Vishkambha, Yoga::Atiganda, Yoga::Shula],
    avoid_masas: &[],
    description: "Naming ceremony muhurat blesses the child with a fortunate name.",
};

const SURGERY: EventRules = EventRules {
    good_tithis: &[1, 2, 3, 6, 7, 10, 11, 12],
    good_nakshatras: &[1, 4, 5, 7, 8, 11, 12, 13, 17, 20, 21, 22],
    good_weekdays: &[1, 3, 4, 5],
    avoid_yogas: &[
        Yoga::Vishkambha,
        Yoga::Atiganda,
        Yoga::Shula,
        Yoga::Ganda,
        Yoga::Vyaghata,
        Yoga::Vajra,
    ],
    avoid_masas: &[],
    description: "Medical procedures need healing-supportive planetary positions.",
};

const EDUCATION_START: EventRules = EventRules {
    good_tithis: &[2, 3, 5, 6, 7, 10, 11, 12, 13],
    good_nakshatras: &[1, 4, 5, 7, 8, 9, 11, 12, 13, 14, 17, 20, 21, 22, 25, 27],
    good_weekdays: &[1, 3, 4, 5],
    avoid_yogas: &[Yoga::Vishkambha, Yoga::Shula, Yoga::Ganda],
    avoid_masas: &[],
    description: "Education muhurat enhances learning and intellectual growth.",
};

const GENERAL_AUSPICIOUS: EventRules = EventRules {
    good_tithis: &[2, 3, 5, 6, 7, 10, 11, 12, 13],
    good_nakshatras: &[1, 2, 3, 4, 5, 6, 7, 8, 11, 12, 13, 17, 20, 21, 22, 25, 26, 27],
    good_weekdays: &[0, 1, 3, 4, 5],
    avoid_yogas: &[
        Yoga::Vishkambha,
        Yoga::Atiganda,
        Yoga::Shula,
        Yoga::Ganda,
        Yoga::Vyaghata,
    ],
    avoid_masas: &[],
    description: "General auspicious time for important activities.",
};

impl EventKind {
    /// Rule table for this event. Kinds without a dedicated table use the
    /// general-auspicious rules.
    pub const fn rules(self) -> &'static EventRules {
        match self {
            Self::Marriage => &MARRIAGE,
            Self::GrihaPravesh => &GRIHA_PRAVESH,
            Self::BusinessOpening => &BUSINESS_OPENING,
            Self::Travel => &TRAVEL,
            Self::VehiclePurchase => &VEHICLE_PURCHASE,
            Self::NamingCeremony => &NAMING_CEREMONY,
            Self::Surgery => &SURGERY,
            Self::EducationStart => &EDUCATION_START,
            Self::PropertyPurchase
            | Self::Engagement
            | Self::JewelleryPurchase
            | Self::GeneralAuspicious => &GENERAL_AUSPICIOUS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EVENTS: [EventKind; 12] = [
        EventKind::Marriage,
        EventKind::NamingCeremony,
        EventKind::GrihaPravesh,
        EventKind::BusinessOpening,
        EventKind::Travel,
        EventKind::Surgery,
        EventKind::VehiclePurchase,
        EventKind::PropertyPurchase,
        EventKind::Engagement,
        EventKind::EducationStart,
        EventKind::JewelleryPurchase,
        EventKind::GeneralAuspicious,
    ];

    #[test]
    fn every_event_has_rules() {
        for e in ALL_EVENTS {
            let r = e.rules();
            assert!(!r.good_tithis.is_empty(), "{e:?}");
            assert!(!r.good_nakshatras.is_empty(), "{e:?}");
            assert!(!r.good_weekdays.is_empty(), "{e:?}");
            assert!(!r.description.is_empty(), "{e:?}");
        }
    }

    #[test]
    fn tables_reference_valid_numbers() {
        for e in ALL_EVENTS {
            let r = e.rules();
            assert!(r.good_tithis.iter().all(|&t| (1..=30).contains(&t)));
            assert!(r.good_nakshatras.iter().all(|&n| (1..=27).contains(&n)));
            assert!(r.good_weekdays.iter().all(|&w| w < 7));
        }
    }

    #[test]
    fn marriage_avoids_all_nine_inauspicious_yogas() {
        assert_eq!(EventKind::Marriage.rules().avoid_yogas.len(), 9);
    }

    #[test]
    fn griha_pravesh_avoids_two_masas() {
        let r = EventKind::GrihaPravesh.rules();
        assert_eq!(r.avoid_masas, &[Masa::Ashwin, Masa::Pausha]);
    }

    #[test]
    fn unlisted_events_use_general_rules() {
        assert!(std::ptr::eq(
            EventKind::Engagement.rules(),
            EventKind::GeneralAuspicious.rules()
        ));
    }
}
