//! Sunrise/sunset and moonrise/moonset computation.
//!
//! Iterative hour-angle algorithm from standard spherical astronomy
//! (Meeus, Montenbruck & Pfleger): estimate the transit from local
//! sidereal time, offset by the hour angle at which the body reaches its
//! target altitude, and re-evaluate the body position at the refined time
//! until convergence. The Moon needs the iteration most — it moves ~13°
//! per day.

use std::f64::consts::TAU;

use jyotish_ephem::{Body, ecliptic_lon_lat};
use jyotish_time::{gmst_rad, local_sidereal_time_rad};

use crate::error::VedicError;
use crate::lagna::OBLIQUITY_J2000_DEG;

/// Maximum iterations for the refinement loop.
const MAX_ITERATIONS: usize = 5;

/// Convergence threshold in days (~0.09 seconds).
const CONVERGENCE_DAYS: f64 = 1.0e-6;

/// Sidereal rotation rate in radians per day.
const SIDEREAL_RATE: f64 = TAU * 1.002_737_811_911_354_6;

/// Sun target altitude: 34′ refraction + 16′ semidiameter below horizon.
const SUN_ALTITUDE_DEG: f64 = -50.0 / 60.0;

/// Moon target altitude: net of refraction, semidiameter, and parallax.
const MOON_ALTITUDE_DEG: f64 = 0.125;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    /// Create a new geographic location.
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Which body to search a horizon crossing for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseBody {
    Sun,
    Moon,
}

impl RiseBody {
    fn ephemeris_body(self) -> Body {
        match self {
            Self::Sun => Body::Sun,
            Self::Moon => Body::Moon,
        }
    }

    fn target_altitude_deg(self) -> f64 {
        match self {
            Self::Sun => SUN_ALTITUDE_DEG,
            Self::Moon => MOON_ALTITUDE_DEG,
        }
    }
}

/// Rising or setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    Rise,
    Set,
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given JD UTC.
    Event { jd: f64 },
    /// The body stays below the target altitude all day (polar night).
    NeverRises,
    /// The body stays above the target altitude all day (midnight sun).
    NeverSets,
}

/// Approximate local solar noon JD from 0h UT JD and longitude.
///
/// `JD_noon = JD_0h + 0.5 − longitude_deg / 360`
pub fn approximate_local_noon_jd(jd_ut_midnight: f64, longitude_deg: f64) -> f64 {
    jd_ut_midnight + 0.5 - longitude_deg / 360.0
}

/// Convert tropical ecliptic coordinates to equatorial RA/Dec (radians).
fn ecliptic_to_equatorial_rad(lon_deg: f64, lat_deg: f64) -> (f64, f64) {
    let eps = OBLIQUITY_J2000_DEG.to_radians();
    let lam = lon_deg.to_radians();
    let bet = lat_deg.to_radians();

    let sin_dec = bet.sin() * eps.cos() + bet.cos() * eps.sin() * lam.sin();
    let dec = sin_dec.asin();
    let ra = f64::atan2(lam.sin() * eps.cos() - bet.tan() * eps.sin(), lam.cos());
    (ra.rem_euclid(TAU), dec)
}

/// Compute a rise or set event near the given local noon.
///
/// # Returns
/// * `RiseSetResult::Event` with the event time in JD UTC
/// * `NeverRises` / `NeverSets` for circumpolar situations
pub fn compute_rise_set(
    body: RiseBody,
    event: RiseSetEvent,
    location: &GeoLocation,
    jd_noon: f64,
) -> Result<RiseSetResult, VedicError> {
    let phi = location.latitude_rad();
    let h0 = body.target_altitude_deg().to_radians();

    let mut jd_event = jd_noon;

    for _ in 0..MAX_ITERATIONS {
        let (lon, lat) = ecliptic_lon_lat(body.ephemeris_body(), jd_event)?;
        let (ra, dec) = ecliptic_to_equatorial_rad(lon, lat);

        let cos_h = (h0.sin() - phi.sin() * dec.sin()) / (phi.cos() * dec.cos());
        if cos_h > 1.0 {
            return Ok(RiseSetResult::NeverRises);
        }
        if cos_h < -1.0 {
            return Ok(RiseSetResult::NeverSets);
        }
        let hour_angle = cos_h.acos();

        // Hour angle of the body right now, normalized to [-pi, pi].
        let lst = local_sidereal_time_rad(gmst_rad(jd_event), location.longitude_rad());
        let mut ha_now = (lst - ra).rem_euclid(TAU);
        if ha_now > std::f64::consts::PI {
            ha_now -= TAU;
        }

        let jd_transit = jd_event - ha_now / SIDEREAL_RATE;
        let offset_days = hour_angle / SIDEREAL_RATE;
        let next = match event {
            RiseSetEvent::Rise => jd_transit - offset_days,
            RiseSetEvent::Set => jd_transit + offset_days,
        };

        let delta = (next - jd_event).abs();
        jd_event = next;
        if delta < CONVERGENCE_DAYS {
            break;
        }
    }

    Ok(RiseSetResult::Event { jd: jd_event })
}
