//! Row derivation.
//!
//! Fills in the performance tier and promotion flag of every row that lacks
//! them. Values already present are kept, which makes derivation idempotent.

use tracing::debug;

use crate::models::{EmployeeRecord, EmployeeRow};

use super::{check_promotion_eligibility, classify_performance};

/// Derives a single row into a complete record.
///
/// # Example
///
/// ```
/// use employee_analytics::derivation::derive_record;
/// use employee_analytics::models::{EmployeeRow, PerformanceLevel, PromotionEligibility};
/// use rust_decimal::Decimal;
///
/// let row = EmployeeRow {
///     emp_id: "E105".to_string(),
///     name: "Karan".to_string(),
///     department: "IT".to_string(),
///     salary: Decimal::new(58000, 0),
///     years_exp: Decimal::new(4, 0),
///     performance_score: Decimal::new(81, 0),
///     performance_level: None,
///     promotion_eligible: None,
/// };
///
/// let record = derive_record(row);
/// assert_eq!(record.performance_level, PerformanceLevel::Medium);
/// assert_eq!(record.promotion_eligible, PromotionEligibility::Yes);
/// ```
pub fn derive_record(row: EmployeeRow) -> EmployeeRecord {
    let performance_level = row
        .performance_level
        .unwrap_or_else(|| classify_performance(row.performance_score));
    let promotion_eligible = row
        .promotion_eligible
        .unwrap_or_else(|| check_promotion_eligibility(row.years_exp, row.performance_score));

    EmployeeRecord {
        emp_id: row.emp_id,
        name: row.name,
        department: row.department,
        salary: row.salary,
        years_exp: row.years_exp,
        performance_score: row.performance_score,
        performance_level,
        promotion_eligible,
    }
}

/// Derives every row, preserving order.
pub fn derive_records(rows: Vec<EmployeeRow>) -> Vec<EmployeeRecord> {
    let missing = rows
        .iter()
        .filter(|r| r.performance_level.is_none() || r.promotion_eligible.is_none())
        .count();
    debug!(rows = rows.len(), missing_derived = missing, "Deriving rows");

    rows.into_iter().map(derive_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PerformanceLevel, PromotionEligibility};
    use rust_decimal::Decimal;

    fn row(name: &str, dept: &str, salary: i64, years: i64, score: i64) -> EmployeeRow {
        EmployeeRow {
            emp_id: format!("E-{}", name),
            name: name.to_string(),
            department: dept.to_string(),
            salary: Decimal::new(salary, 0),
            years_exp: Decimal::new(years, 0),
            performance_score: Decimal::new(score, 0),
            performance_level: None,
            promotion_eligible: None,
        }
    }

    #[test]
    fn test_sample_dataset_derivation() {
        let rows = vec![
            row("Ramesh", "Sales", 45000, 3, 78),
            row("Sneha", "HR", 52000, 5, 85),
            row("Amit", "IT", 62000, 7, 92),
            row("Leela", "Sales", 39000, 2, 70),
            row("Karan", "IT", 58000, 4, 81),
        ];

        let records = derive_records(rows);

        let levels: Vec<_> = records.iter().map(|r| r.performance_level).collect();
        assert_eq!(
            levels,
            vec![
                PerformanceLevel::Medium,
                PerformanceLevel::High,
                PerformanceLevel::High,
                PerformanceLevel::Medium,
                PerformanceLevel::Medium,
            ]
        );

        let flags: Vec<_> = records.iter().map(|r| r.promotion_eligible).collect();
        assert_eq!(
            flags,
            vec![
                PromotionEligibility::No,
                PromotionEligibility::Yes,
                PromotionEligibility::Yes,
                PromotionEligibility::No,
                PromotionEligibility::Yes,
            ]
        );
    }

    #[test]
    fn test_present_fields_are_left_untouched() {
        let mut input = row("Leela", "Sales", 39000, 2, 70);
        input.performance_level = Some(PerformanceLevel::High);
        input.promotion_eligible = Some(PromotionEligibility::Yes);

        let record = derive_record(input);
        assert_eq!(record.performance_level, PerformanceLevel::High);
        assert_eq!(record.promotion_eligible, PromotionEligibility::Yes);
    }

    #[test]
    fn test_only_missing_field_is_derived() {
        let mut input = row("Amit", "IT", 62000, 7, 92);
        input.performance_level = Some(PerformanceLevel::Low);

        let record = derive_record(input);
        assert_eq!(record.performance_level, PerformanceLevel::Low);
        assert_eq!(record.promotion_eligible, PromotionEligibility::Yes);
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let rows = vec![
            row("Ramesh", "Sales", 45000, 3, 78),
            row("Sneha", "HR", 52000, 5, 85),
        ];

        let once = derive_records(rows);
        let twice = derive_records(once.iter().cloned().map(EmployeeRow::from).collect());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(derive_records(Vec::new()).is_empty());
    }
}
