//! Employee row and record types.
//!
//! An [`EmployeeRow`] is what ingestion produces: the six base columns plus
//! whatever derived columns the source already carried. An [`EmployeeRecord`]
//! is a fully derived row and is the only shape aggregation ever sees.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{PerformanceLevel, PromotionEligibility};

/// One employee as read from a tabular source.
///
/// Numeric fields have already been coerced (unparsable values are zero).
/// The derived fields are `None` when the source did not provide them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRow {
    /// Employee identifier. Not required to be unique.
    pub emp_id: String,
    /// Display name.
    pub name: String,
    /// Department, used verbatim as the grouping key.
    pub department: String,
    /// Salary.
    pub salary: Decimal,
    /// Years of experience.
    pub years_exp: Decimal,
    /// Performance score, nominally in `[0, 100]`.
    pub performance_score: Decimal,
    /// Performance tier, if already present in the source.
    #[serde(default)]
    pub performance_level: Option<PerformanceLevel>,
    /// Promotion flag, if already present in the source.
    #[serde(default)]
    pub promotion_eligible: Option<PromotionEligibility>,
}

/// One fully derived employee.
///
/// Field order matches the persisted CSV header.
///
/// # Example
///
/// ```
/// use employee_analytics::models::{EmployeeRecord, PerformanceLevel, PromotionEligibility};
/// use rust_decimal::Decimal;
///
/// let record = EmployeeRecord {
///     emp_id: "E103".to_string(),
///     name: "Amit".to_string(),
///     department: "IT".to_string(),
///     salary: Decimal::new(62000, 0),
///     years_exp: Decimal::new(7, 0),
///     performance_score: Decimal::new(92, 0),
///     performance_level: PerformanceLevel::High,
///     promotion_eligible: PromotionEligibility::Yes,
/// };
/// assert!(record.is_promotion_eligible());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee identifier. Not required to be unique.
    pub emp_id: String,
    /// Display name.
    pub name: String,
    /// Department, used verbatim as the grouping key.
    pub department: String,
    /// Salary.
    pub salary: Decimal,
    /// Years of experience.
    pub years_exp: Decimal,
    /// Performance score, nominally in `[0, 100]`.
    pub performance_score: Decimal,
    /// Performance tier.
    pub performance_level: PerformanceLevel,
    /// Promotion flag.
    pub promotion_eligible: PromotionEligibility,
}

impl EmployeeRecord {
    /// Returns true if the employee is flagged for promotion.
    pub fn is_promotion_eligible(&self) -> bool {
        self.promotion_eligible.is_eligible()
    }
}

impl From<EmployeeRecord> for EmployeeRow {
    fn from(record: EmployeeRecord) -> Self {
        EmployeeRow {
            emp_id: record.emp_id,
            name: record.name,
            department: record.department,
            salary: record.salary,
            years_exp: record.years_exp,
            performance_score: record.performance_score,
            performance_level: Some(record.performance_level),
            promotion_eligible: Some(record.promotion_eligible),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> EmployeeRecord {
        EmployeeRecord {
            emp_id: "E102".to_string(),
            name: "Sneha".to_string(),
            department: "HR".to_string(),
            salary: Decimal::new(52000, 0),
            years_exp: Decimal::new(5, 0),
            performance_score: Decimal::new(85, 0),
            performance_level: PerformanceLevel::High,
            promotion_eligible: PromotionEligibility::Yes,
        }
    }

    #[test]
    fn test_serialize_record_uses_labels() {
        let record = create_test_record();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["emp_id"], "E102");
        assert_eq!(json["performance_level"], "HIGH");
        assert_eq!(json["promotion_eligible"], "YES");
        assert_eq!(json["salary"], 52000.0);
    }

    #[test]
    fn test_deserialize_row_accepts_numbers() {
        let json = r#"{
            "emp_id": "E105",
            "name": "Karan",
            "department": "IT",
            "salary": 58000,
            "years_exp": 4.5,
            "performance_score": 81
        }"#;

        let row: EmployeeRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.salary, Decimal::new(58000, 0));
        assert_eq!(row.years_exp, Decimal::new(45, 1));
    }

    #[test]
    fn test_deserialize_row_without_derived_fields() {
        let json = r#"{
            "emp_id": "E101",
            "name": "Ramesh",
            "department": "Sales",
            "salary": "45000",
            "years_exp": "3",
            "performance_score": "78"
        }"#;

        let row: EmployeeRow = serde_json::from_str(json).unwrap();
        assert_eq!(row.department, "Sales");
        assert_eq!(row.salary, Decimal::new(45000, 0));
        assert!(row.performance_level.is_none());
        assert!(row.promotion_eligible.is_none());
    }

    #[test]
    fn test_record_to_row_keeps_derived_fields() {
        let row: EmployeeRow = create_test_record().into();
        assert_eq!(row.performance_level, Some(PerformanceLevel::High));
        assert_eq!(row.promotion_eligible, Some(PromotionEligibility::Yes));
    }

    #[test]
    fn test_is_promotion_eligible() {
        let mut record = create_test_record();
        assert!(record.is_promotion_eligible());

        record.promotion_eligible = PromotionEligibility::No;
        assert!(!record.is_promotion_eligible());
    }
}
