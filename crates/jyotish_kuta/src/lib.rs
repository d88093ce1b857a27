//! Marriage compatibility (kuta matching).
//!
//! Two independent, stateless rubrics over the partners' (nakshatra,
//! rashi) pairs:
//! - the South Indian 10-porutham pass/fail system with two essential
//!   factors (Rajju, Vedha) whose failure alone blocks the match;
//! - the North Indian Ashtakoota 36-point system with Bhakoot/Nadi dosha
//!   detection and the classical dosha-cancellation exceptions.
//!
//! Neither rubric touches the full chart: only the derived mansion and
//! sign values enter the tables.

pub mod ashtakoota;
pub mod porutham;
pub mod tables;

pub use ashtakoota::{
    AshtakootaMatch, KootaResult, NorthRecommendation, calculate_ashtakoota,
};
pub use porutham::{
    MatchOutcome, PoruthamResult, SouthIndianMatch, SouthRecommendation, calculate_porutham,
};
pub use tables::{Gana, Nadi, Rajju, Varna, Vashya, YoniAnimal};
