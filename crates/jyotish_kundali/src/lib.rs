//! Natal chart (kundali) assembly.
//!
//! Builds the full birth chart from a moment and location: the 9 graha
//! positions (7 computed, Rahu from the mean node, Ketu derived exactly
//! opposite), the sidereal ascendant, 12 equal house cusps, divisional
//! chart projections, and the Vimshottari dasha timeline.
//!
//! A [`Kundali`] is an immutable value object: produced once per
//! (moment, location, ayanamsha) tuple and never mutated.

pub mod chart;
pub mod types;

pub use chart::{
    calculate_kundali, dasha_timeline, divisional_chart, graha_position, transit_positions,
};
pub use types::{Ascendant, GrahaPosition, HouseCusp, Kundali};
