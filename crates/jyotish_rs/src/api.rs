//! The four public operations.

use serde::Serialize;

use jyotish_kundali::{Kundali, calculate_kundali};
use jyotish_kuta::{
    AshtakootaMatch, SouthIndianMatch, calculate_ashtakoota, calculate_porutham,
};
use jyotish_muhurta::{EventKind, MuhurtaSearch, SearchFilters, find_muhurta};
use jyotish_panchang::{Panchang, calculate_panchang};
use jyotish_time::Moment;
use jyotish_vedic::{Ayanamsha, Nakshatra, Rashi};

use crate::error::JyotishError;

/// Validate geographic coordinates: lat ∈ [-90, 90], lon ∈ [-180, 180].
pub fn validate_coordinates(latitude_deg: f64, longitude_deg: f64) -> Result<(), JyotishError> {
    if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
        return Err(JyotishError::InvalidInput("latitude outside [-90, 90]"));
    }
    if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(JyotishError::InvalidInput("longitude outside [-180, 180]"));
    }
    Ok(())
}

/// Calculate a natal chart.
///
/// `ayanamsha_name` falls back to Lahiri for unknown names — the
/// documented degraded-mode policy, logged rather than raised.
pub fn calculate_chart(
    moment: &Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    ayanamsha_name: &str,
) -> Result<Kundali, JyotishError> {
    validate_coordinates(latitude_deg, longitude_deg)?;
    let system = Ayanamsha::from_name_or_default(ayanamsha_name);
    Ok(calculate_kundali(moment, latitude_deg, longitude_deg, system)?)
}

/// Calculate the daily calendar (panchang) with the default ayanamsha.
pub fn calculate_daily_calendar(
    date: &Moment,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<Panchang, JyotishError> {
    validate_coordinates(latitude_deg, longitude_deg)?;
    Ok(calculate_panchang(
        date,
        latitude_deg,
        longitude_deg,
        Ayanamsha::default(),
    )?)
}

/// Find ranked auspicious windows for an event within a bounded range.
pub fn find_windows(
    event: EventKind,
    start_date: &Moment,
    end_date: &Moment,
    latitude_deg: f64,
    longitude_deg: f64,
    filters: &SearchFilters,
) -> Result<MuhurtaSearch, JyotishError> {
    validate_coordinates(latitude_deg, longitude_deg)?;
    Ok(find_muhurta(
        event,
        start_date,
        end_date,
        latitude_deg,
        longitude_deg,
        filters,
        Ayanamsha::default(),
    )?)
}

/// Both compatibility rubrics for one pairing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    /// South Indian 10-porutham system.
    pub south: SouthIndianMatch,
    /// North Indian Ashtakoota 36-point system.
    pub north: AshtakootaMatch,
}

/// Score marriage compatibility under both rubrics.
///
/// Mansion numbers are 1..=27, sign numbers 1..=12; anything else fails
/// with `InvalidInput`.
pub fn score_compatibility(
    bride_nakshatra: u8,
    bride_rashi: u8,
    groom_nakshatra: u8,
    groom_rashi: u8,
) -> Result<CompatibilityResult, JyotishError> {
    let b_nak = Nakshatra::from_number(bride_nakshatra)
        .ok_or(JyotishError::InvalidInput("bride nakshatra outside 1..=27"))?;
    let g_nak = Nakshatra::from_number(groom_nakshatra)
        .ok_or(JyotishError::InvalidInput("groom nakshatra outside 1..=27"))?;
    let b_rashi = Rashi::from_number(bride_rashi)
        .ok_or(JyotishError::InvalidInput("bride rashi outside 1..=12"))?;
    let g_rashi = Rashi::from_number(groom_rashi)
        .ok_or(JyotishError::InvalidInput("groom rashi outside 1..=12"))?;

    Ok(CompatibilityResult {
        south: calculate_porutham(b_nak, b_rashi, g_nak, g_rashi),
        north: calculate_ashtakoota(b_nak, b_rashi, g_nak, g_rashi, true),
    })
}
