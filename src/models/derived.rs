//! Labels for the two computed employee attributes.
//!
//! Both labels are serialized exactly as they appear in persisted CSV files
//! and in API responses (`LOW`/`MEDIUM`/`HIGH`, `YES`/`NO`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnalyticsError;

/// Performance tier derived from an employee's performance score.
///
/// # Example
///
/// ```
/// use employee_analytics::models::PerformanceLevel;
/// use std::str::FromStr;
///
/// assert_eq!(PerformanceLevel::from_str("HIGH").unwrap(), PerformanceLevel::High);
/// assert_eq!(PerformanceLevel::Medium.as_str(), "MEDIUM");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PerformanceLevel {
    /// Score below 70.
    Low,
    /// Score from 70 up to (not including) 85.
    Medium,
    /// Score of 85 or above.
    High,
}

impl PerformanceLevel {
    /// Returns the persisted label for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceLevel::Low => "LOW",
            PerformanceLevel::Medium => "MEDIUM",
            PerformanceLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for PerformanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PerformanceLevel {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOW" => Ok(PerformanceLevel::Low),
            "MEDIUM" => Ok(PerformanceLevel::Medium),
            "HIGH" => Ok(PerformanceLevel::High),
            other => Err(AnalyticsError::ProcessingError {
                message: format!("unknown performance level '{}'", other),
            }),
        }
    }
}

/// Promotion eligibility flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PromotionEligibility {
    /// Meets both the experience and the score threshold.
    Yes,
    /// Misses at least one threshold.
    No,
}

impl PromotionEligibility {
    /// Returns the persisted label for this flag.
    pub fn as_str(&self) -> &'static str {
        match self {
            PromotionEligibility::Yes => "YES",
            PromotionEligibility::No => "NO",
        }
    }

    /// Returns true for [`PromotionEligibility::Yes`].
    pub fn is_eligible(&self) -> bool {
        *self == PromotionEligibility::Yes
    }
}

impl fmt::Display for PromotionEligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromotionEligibility {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "YES" => Ok(PromotionEligibility::Yes),
            "NO" => Ok(PromotionEligibility::No),
            other => Err(AnalyticsError::ProcessingError {
                message: format!("unknown promotion eligibility '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_performance_level_serialization() {
        assert_eq!(
            serde_json::to_string(&PerformanceLevel::Low).unwrap(),
            "\"LOW\""
        );
        assert_eq!(
            serde_json::to_string(&PerformanceLevel::Medium).unwrap(),
            "\"MEDIUM\""
        );
        assert_eq!(
            serde_json::to_string(&PerformanceLevel::High).unwrap(),
            "\"HIGH\""
        );
    }

    #[test]
    fn test_promotion_eligibility_serialization() {
        assert_eq!(
            serde_json::to_string(&PromotionEligibility::Yes).unwrap(),
            "\"YES\""
        );
        assert_eq!(
            serde_json::to_string(&PromotionEligibility::No).unwrap(),
            "\"NO\""
        );
    }

    #[test]
    fn test_labels_parse_exact_case_only() {
        assert!(PerformanceLevel::from_str("high").is_err());
        assert!(PerformanceLevel::from_str("").is_err());
        assert!(PromotionEligibility::from_str("yes").is_err());
        assert_eq!(
            PromotionEligibility::from_str("NO").unwrap(),
            PromotionEligibility::No
        );
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(PerformanceLevel::High.to_string(), "HIGH");
        assert_eq!(PromotionEligibility::Yes.to_string(), "YES");
        assert!(PromotionEligibility::Yes.is_eligible());
        assert!(!PromotionEligibility::No.is_eligible());
    }
}
