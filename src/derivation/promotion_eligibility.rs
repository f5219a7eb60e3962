//! Promotion eligibility rule.

use rust_decimal::Decimal;

use crate::models::PromotionEligibility;

/// Minimum years of experience for promotion (inclusive).
pub const PROMOTION_MIN_YEARS: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Minimum performance score for promotion (inclusive).
pub const PROMOTION_MIN_SCORE: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Decides promotion eligibility.
///
/// An employee is eligible iff `years_exp >= 4` and `performance_score >= 80`.
///
/// # Examples
///
/// ```
/// use employee_analytics::derivation::check_promotion_eligibility;
/// use employee_analytics::models::PromotionEligibility;
/// use rust_decimal::Decimal;
///
/// let four = Decimal::new(4, 0);
/// let eighty = Decimal::new(80, 0);
/// assert_eq!(check_promotion_eligibility(four, eighty), PromotionEligibility::Yes);
///
/// let three = Decimal::new(3, 0);
/// let hundred = Decimal::new(100, 0);
/// assert_eq!(check_promotion_eligibility(three, hundred), PromotionEligibility::No);
/// ```
pub fn check_promotion_eligibility(
    years_exp: Decimal,
    performance_score: Decimal,
) -> PromotionEligibility {
    if years_exp >= PROMOTION_MIN_YEARS && performance_score >= PROMOTION_MIN_SCORE {
        PromotionEligibility::Yes
    } else {
        PromotionEligibility::No
    }
}
