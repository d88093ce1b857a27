//! Samvatsara (60-year cycle) enumeration.
//!
//! The 60 samvatsaras cycle continuously; CE 1987 = Prabhava (order 1).

use serde::{Deserialize, Serialize};

/// Epoch year of the cycle: CE 1987 was Prabhava.
const CYCLE_EPOCH_YEAR: i32 = 1987;

/// The 60 samvatsaras of the Vedic cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(missing_docs)]
pub enum Samvatsara {
    Prabhava,
    Vibhava,
    Shukla,
    Pramodoota,
    Prajothpatti,
    Angirasa,
    Srimukha,
    Bhava,
    Yuva,
    Dhatru,
    Ishvara,
    Bahudhanya,
    Pramathi,
    Vikrama,
    Vrusha,
    Chitrabhanu,
    Svabhanu,
    Tarana,
    Parthiva,
    Vyaya,
    Sarvajith,
    Sarvadhari,
    Virodhi,
    Vikruthi,
    Khara,
    Nandana,
    Vijaya,
    Jaya,
    Manmatha,
    Durmukhi,
    Hevilambi,
    Vilambi,
    Vikari,
    Sharvari,
    Plava,
    Shubhakruthu,
    Shobhakruthu,
    Krodhi,
    Vishvavasu,
    Parabhava,
    Plavanga,
    Keelaka,
    Saumya,
    Sadharana,
    Virodhikruthu,
    Paridhavi,
    Pramadeecha,
    Ananda,
    Rakshasa,
    Nala,
    Pingala,
    Kalayukthi,
    Siddharthi,
    Raudra,
    Durmathi,
    Dundubhi,
    Rudhirodgari,
    Raktakshi,
    Krodhana,
    Akshaya,
}

/// All 60 samvatsaras in cycle order (index 0 = Prabhava).
pub const ALL_SAMVATSARAS: [Samvatsara; 60] = [
    Samvatsara::Prabhava,
    Samvatsara::Vibhava,
    Samvatsara::Shukla,
    Samvatsara::Pramodoota,
    Samvatsara::Prajothpatti,
    Samvatsara::Angirasa,
    Samvatsara::Srimukha,
    Samvatsara::Bhava,
    Samvatsara::Yuva,
    Samvatsara::Dhatru,
    Samvatsara::Ishvara,
    Samvatsara::Bahudhanya,
    Samvatsara::Pramathi,
    Samvatsara::Vikrama,
    Samvatsara::Vrusha,
    Samvatsara::Chitrabhanu,
    Samvatsara::Svabhanu,
    Samvatsara::Tarana,
    Samvatsara::Parthiva,
    Samvatsara::Vyaya,
    Samvatsara::Sarvajith,
    Samvatsara::Sarvadhari,
    Samvatsara::Virodhi,
    Samvatsara::Vikruthi,
    Samvatsara::Khara,
    Samvatsara::Nandana,
    Samvatsara::Vijaya,
    Samvatsara::Jaya,
    Samvatsara::Manmatha,
    Samvatsara::Durmukhi,
    Samvatsara::Hevilambi,
    Samvatsara::Vilambi,
    Samvatsara::Vikari,
    Samvatsara::Sharvari,
    Samvatsara::Plava,
    Samvatsara::Shubhakruthu,
    Samvatsara::Shobhakruthu,
    Samvatsara::Krodhi,
    Samvatsara::Vishvavasu,
    Samvatsara::Parabhava,
    Samvatsara::Plavanga,
    Samvatsara::Keelaka,
    Samvatsara::Saumya,
    Samvatsara::Sadharana,
    Samvatsara::Virodhikruthu,
    Samvatsara::Paridhavi,
    Samvatsara::Pramadeecha,
    Samvatsara::Ananda,
    Samvatsara::Rakshasa,
    Samvatsara::Nala,
    Samvatsara::Pingala,
    Samvatsara::Kalayukthi,
    Samvatsara::Siddharthi,
    Samvatsara::Raudra,
    Samvatsara::Durmathi,
    Samvatsara::Dundubhi,
    Samvatsara::Rudhirodgari,
    Samvatsara::Raktakshi,
    Samvatsara::Krodhana,
    Samvatsara::Akshaya,
];

impl Samvatsara {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prabhava => "Prabhava",
            Self::Vibhava => "Vibhava",
            Self::Shukla => "Shukla",
            Self::Pramodoota => "Pramodoota",
            Self::Prajothpatti => "Prajothpatti",
            Self::Angirasa => "Angirasa",
            Self::Srimukha => "Srimukha",
            Self::Bhava => "Bhava",
            Self::Yuva => "Yuva",
            Self::Dhatru => "Dhatru",
            Self::Ishvara => "Ishvara",
            Self::Bahudhanya => "Bahudhanya",
            Self::Pramathi => "Pramathi",
            Self::Vikrama => "Vikrama",
            Self::Vrusha => "Vrusha",
            Self::Chitrabhanu => "Chitrabhanu",
            Self::Svabhanu => "Svabhanu",
            Self::Tarana => "Tarana",
            Self::Parthiva => "Parthiva",
            Self::Vyaya => "Vyaya",
            Self::Sarvajith => "Sarvajith",
            Self::Sarvadhari => "Sarvadhari",
            Self::Virodhi => "Virodhi",
            Self::Vikruthi => "Vikruthi",
            Self::Khara => "Khara",
            Self::Nandana => "Nandana",
            Self::Vijaya => "Vijaya",
            Self::Jaya => "Jaya",
            Self::Manmatha => "Manmatha",
            Self::Durmukhi => "Durmukhi",
            Self::Hevilambi => "Hevilambi",
            Self::Vilambi => "Vilambi",
            Self::Vikari => "Vikari",
            Self::Sharvari => "Sharvari",
            Self::Plava => "Plava",
            Self::Shubhakruthu => "Shubhakruthu",
            Self::Shobhakruthu => "Shobhakruthu",
            Self::Krodhi => "Krodhi",
            Self::Vishvavasu => "Vishvavasu",
            Self::Parabhava => "Parabhava",
            Self::Plavanga => "Plavanga",
            Self::Keelaka => "Keelaka",
            Self::Saumya => "Saumya",
            Self::Sadharana => "Sadharana",
            Self::Virodhikruthu => "Virodhikruthu",
            Self::Paridhavi => "Paridhavi",
            Self::Pramadeecha => "Pramadeecha",
            Self::Ananda => "Ananda",
            Self::Rakshasa => "Rakshasa",
            Self::Nala => "Nala",
            Self::Pingala => "Pingala",
            Self::Kalayukthi => "Kalayukthi",
            Self::Siddharthi => "Siddharthi",
            Self::Raudra => "Raudra",
            Self::Durmathi => "Durmathi",
            Self::Dundubhi => "Dundubhi",
            Self::Rudhirodgari => "Rudhirodgari",
            Self::Raktakshi => "Raktakshi",
            Self::Krodhana => "Krodhana",
            Self::Akshaya => "Akshaya",
        }
    }
}

/// Samvatsara and its 1-based order in the cycle for a calendar year.
pub fn samvatsara_from_year(year: i32) -> (Samvatsara, u8) {
    let idx = (year - CYCLE_EPOCH_YEAR).rem_euclid(60) as usize;
    (ALL_SAMVATSARAS[idx], idx as u8 + 1)
}
