//! Derivation of computed employee attributes.
//!
//! This module classifies performance scores into tiers, decides promotion
//! eligibility, and turns ingested rows into fully derived records. Every
//! function is pure and works one row at a time.

mod derive;
mod performance_level;
mod promotion_eligibility;

pub use derive::{derive_record, derive_records};
pub use performance_level::{
    HIGH_PERFORMANCE_THRESHOLD, MEDIUM_PERFORMANCE_THRESHOLD, classify_performance,
};
pub use promotion_eligibility::{
    PROMOTION_MIN_SCORE, PROMOTION_MIN_YEARS, check_promotion_eligibility,
};
