//! Time handling for the jyotish calculation core.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - The [`Moment`] type: a UTC instant with a display-only UTC offset
//! - Greenwich/local sidereal time (needed for the ascendant)
//!
//! All computation runs on UTC Julian dates. The analytic planetary theory
//! served by this workspace has a precision far coarser than the UTC/TT
//! offset, so no leap-second handling is carried.

pub mod error;
pub mod julian;
pub mod moment;
pub mod sidereal;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, jd_to_calendar, julian_centuries, weekday_from_jd,
};
pub use moment::Moment;
pub use sidereal::{gmst_rad, local_sidereal_time_rad};
