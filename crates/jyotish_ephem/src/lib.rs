//! Analytic ephemeris for the jyotish calculation core.
//!
//! Computes geocentric tropical ecliptic positions — longitude, latitude,
//! and angular speed — for the Sun, Moon, the five classical planets, and
//! the mean lunar ascending node. All functions are pure: there is no
//! process-global configuration of any kind, so concurrent callers can
//! never interfere with one another.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed.) Chapters 25 and 47
//! for the Sun and Moon; the Standish mean-element tables with a Kepler
//! solve for the planets. Precision is a few hundredths of a degree for
//! the luminaries and a few tenths for the slow planets — ample for
//! classification on 12°/13°20′ grids.

pub mod body;
pub mod error;
pub mod moon;
pub mod node;
pub mod planets;
pub mod sun;

use jyotish_time::julian_centuries;
use serde::{Deserialize, Serialize};

pub use body::{ALL_BODIES, Body};
pub use error::EphemError;

/// Earliest supported epoch: 1800-01-01 UTC.
pub const MIN_JD: f64 = 2_378_496.5;

/// Latest supported epoch: 2200-01-01 UTC.
pub const MAX_JD: f64 = 2_524_593.5;

/// Half-step in days for finite-difference speed estimates.
const SPEED_STEP_DAYS: f64 = 0.5;

/// Geocentric tropical ecliptic state of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticState {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Longitude rate in degrees per day. Negative ⇒ retrograde.
    pub speed_deg_per_day: f64,
}

/// Normalize an angle to [0, 360) degrees.
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Signed angular difference `a - b`, normalized to (-180, 180].
fn angle_diff_deg(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Check that an epoch lies inside the supported range.
fn check_epoch(jd: f64) -> Result<(), EphemError> {
    if !(MIN_JD..=MAX_JD).contains(&jd) {
        return Err(EphemError::EpochOutOfRange { jd });
    }
    Ok(())
}

/// Tropical ecliptic longitude and latitude of a body, in degrees.
///
/// Longitude is normalized to [0, 360). Does not compute speed; use
/// [`ecliptic_state`] when the rate is needed.
pub fn ecliptic_lon_lat(body: Body, jd: f64) -> Result<(f64, f64), EphemError> {
    check_epoch(jd)?;
    let t = julian_centuries(jd);
    let (lon, lat) = match body {
        Body::Sun => (sun::solar_longitude_deg(t), 0.0),
        Body::Moon => moon::lunar_lon_lat_deg(t),
        Body::MeanNode => (node::mean_node_deg(t), 0.0),
        Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
            planets::geocentric_lon_lat_deg(body, t)
        }
    };
    Ok((normalize_360(lon), lat))
}

/// Full tropical ecliptic state of a body: longitude, latitude, speed.
///
/// Speed is a symmetric finite difference over ±0.5 day, so the epoch must
/// sit at least half a day inside the supported range.
pub fn ecliptic_state(body: Body, jd: f64) -> Result<EclipticState, EphemError> {
    check_epoch(jd)?;
    let (lon, lat) = ecliptic_lon_lat(body, jd)?;
    let jd_before = (jd - SPEED_STEP_DAYS).max(MIN_JD);
    let jd_after = (jd + SPEED_STEP_DAYS).min(MAX_JD);
    let (before, _) = ecliptic_lon_lat(body, jd_before)?;
    let (after, _) = ecliptic_lon_lat(body, jd_after)?;
    let speed = angle_diff_deg(after, before) / (jd_after - jd_before);
    Ok(EclipticState {
        longitude_deg: lon,
        latitude_deg: lat,
        speed_deg_per_day: speed,
    })
}
