//! Aggregate views over derived employee records.
//!
//! This module contains the read-only computations served by the query
//! surface: salary statistics, performance statistics, promotion statistics
//! and the summary, plus a combined report. Every view accepts an empty
//! slice and returns empty maps/lists (and a zero correlation) for it.

mod correlation;
mod grouping;
mod performance;
mod promotion;
mod report;
mod salary;
mod summary;

pub use correlation::{CORRELATION_FALLBACK, pearson_correlation, rounded_correlation};
pub use grouping::ROUNDING_DECIMAL_PLACES;
pub use performance::{TOP_PERFORMER_COUNT, performance_analytics};
pub use promotion::promotion_analytics;
pub use report::build_report;
pub use salary::salary_analytics;
pub use summary::summary_analytics;
