//! Sidereal-zodiac classification for the jyotish calculation core.
//!
//! This crate provides:
//! - Ayanamsha computation for the platform's 5 sidereal reference systems
//! - Rashi (sign) and nakshatra (lunar mansion) classification
//! - The panchang element tables: tithi, yoga, karana, vaar, masa, samvatsara
//! - Varga (divisional chart) transforms
//! - The Vimshottari dasha timeline and its sub-periods
//! - Lagna (ascendant) with equal house cusps
//! - Sunrise/sunset and moonrise/moonset search
//!
//! Everything is a pure function of its inputs. The ayanamsha system is an
//! explicit parameter wherever sidereal longitudes are involved — there is
//! no process-global sidereal mode.

pub mod ayanamsha;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod karana;
pub mod lagna;
pub mod masa;
pub mod nakshatra;
pub mod rashi;
pub mod riseset;
pub mod samvatsara;
pub mod tithi;
pub mod util;
pub mod vaar;
pub mod varga;
pub mod yoga;

pub use ayanamsha::{Ayanamsha, ayanamsha_deg, sidereal_longitude};
pub use dasha::{
    DashaLevel, DashaPeriod, VIMSHOTTARI_GRAHAS, VIMSHOTTARI_TOTAL_YEARS, sub_periods,
    vimshottari_timeline,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use karana::{KARANA_SLOTS, Karana, KaranaInfo, karana_from_tithi};
pub use lagna::{MAX_HOUSE_LATITUDE_DEG, ascendant_sidereal_deg, equal_house_cusps};
pub use masa::{ALL_MASAS, Masa, masa_from_moon_rashi};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Rashi, RashiInfo, rashi_from_longitude};
pub use riseset::{
    GeoLocation, RiseBody, RiseSetEvent, RiseSetResult, approximate_local_noon_jd,
    compute_rise_set,
};
pub use samvatsara::{ALL_SAMVATSARAS, Samvatsara, samvatsara_from_year};
pub use tithi::{ALL_TITHIS, Paksha, TITHI_SEGMENT_DEG, Tithi, TithiInfo, tithi_from_elongation};
pub use util::normalize_360;
pub use vaar::{ALL_VAARS, Vaar, vaar_from_jd};
pub use varga::{
    dasamsa_sign, dwadasamsa_sign, generic_varga_sign, navamsa_sign, saptamsa_sign, varga_sign,
};
pub use yoga::{ALL_YOGAS, YOGA_SEGMENT_DEG, Yoga, YogaNature, yoga_from_sum};
