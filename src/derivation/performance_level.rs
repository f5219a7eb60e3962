//! Performance tier classification.
//!
//! Tiers use direct threshold comparisons so the 69/70 and 84/85 boundaries
//! are unambiguous for fractional scores as well.

use rust_decimal::Decimal;

use crate::models::PerformanceLevel;

/// Lowest score classified as [`PerformanceLevel::High`].
pub const HIGH_PERFORMANCE_THRESHOLD: Decimal = Decimal::from_parts(85, 0, 0, false, 0);

/// Lowest score classified as [`PerformanceLevel::Medium`].
pub const MEDIUM_PERFORMANCE_THRESHOLD: Decimal = Decimal::from_parts(70, 0, 0, false, 0);

/// Classifies a performance score into a tier.
///
/// - `score >= 85` is `HIGH`
/// - `70 <= score < 85` is `MEDIUM`
/// - anything lower is `LOW`
///
/// Scores outside `[0, 100]` follow the same comparisons.
///
/// # Examples
///
/// ```
/// use employee_analytics::derivation::classify_performance;
/// use employee_analytics::models::PerformanceLevel;
/// use rust_decimal::Decimal;
///
/// assert_eq!(classify_performance(Decimal::new(69, 0)), PerformanceLevel::Low);
/// assert_eq!(classify_performance(Decimal::new(70, 0)), PerformanceLevel::Medium);
/// assert_eq!(classify_performance(Decimal::new(84, 0)), PerformanceLevel::Medium);
/// assert_eq!(classify_performance(Decimal::new(85, 0)), PerformanceLevel::High);
/// ```
pub fn classify_performance(score: Decimal) -> PerformanceLevel {
    if score >= HIGH_PERFORMANCE_THRESHOLD {
        PerformanceLevel::High
    } else if score >= MEDIUM_PERFORMANCE_THRESHOLD {
        PerformanceLevel::Medium
    } else {
        PerformanceLevel::Low
    }
}
