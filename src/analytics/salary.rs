//! Salary view: per-department mean, minimum and maximum.

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, SalaryAnalytics};

use super::grouping::{group_by_department, rounded_mean};

/// Computes salary statistics per department.
///
/// Departments appear in first-appearance order. An empty input yields
/// empty maps.
///
/// # Example
///
/// ```
/// use employee_analytics::analytics::salary_analytics;
///
/// let view = salary_analytics(&[]);
/// assert!(view.avg_salary.is_empty());
/// ```
pub fn salary_analytics(records: &[EmployeeRecord]) -> SalaryAnalytics {
    let mut view = SalaryAnalytics::default();

    for (department, members) in group_by_department(records) {
        let salaries: Vec<Decimal> = members.iter().map(|r| r.salary).collect();

        if let Some(mean) = rounded_mean(&salaries) {
            view.avg_salary.insert(department.to_string(), mean);
        }
        if let Some(min) = salaries.iter().copied().min() {
            view.salary_ranges.min.insert(department.to_string(), min);
        }
        if let Some(max) = salaries.iter().copied().max() {
            view.salary_ranges.max.insert(department.to_string(), max);
        }
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{record, sample_records};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_average_salary_by_department() {
        let view = salary_analytics(&sample_records());

        assert_eq!(view.avg_salary["Sales"], dec("42000"));
        assert_eq!(view.avg_salary["HR"], dec("52000"));
        assert_eq!(view.avg_salary["IT"], dec("60000"));
    }

    #[test]
    fn test_departments_in_first_appearance_order() {
        let view = salary_analytics(&sample_records());
        let keys: Vec<_> = view.avg_salary.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Sales", "HR", "IT"]);
    }

    #[test]
    fn test_salary_ranges_by_department() {
        let view = salary_analytics(&sample_records());

        assert_eq!(view.salary_ranges.min["Sales"], dec("39000"));
        assert_eq!(view.salary_ranges.max["Sales"], dec("45000"));
        assert_eq!(view.salary_ranges.min["IT"], dec("58000"));
        assert_eq!(view.salary_ranges.max["IT"], dec("62000"));
        assert_eq!(view.salary_ranges.min["HR"], view.salary_ranges.max["HR"]);
    }

    #[test]
    fn test_mean_rounded_to_two_places() {
        let records = vec![
            record("A", "Ops", 1000, 1, 50),
            record("B", "Ops", 1000, 1, 50),
            record("C", "Ops", 1001, 1, 50),
        ];
        let view = salary_analytics(&records);
        assert_eq!(view.avg_salary["Ops"], dec("1000.33"));
    }

    #[test]
    fn test_department_keys_are_case_sensitive() {
        let records = vec![
            record("A", "IT", 100, 1, 50),
            record("B", "it", 300, 1, 50),
        ];
        let view = salary_analytics(&records);
        assert_eq!(view.avg_salary.len(), 2);
        assert_eq!(view.avg_salary["it"], dec("300"));
    }

    #[test]
    fn test_empty_dataset() {
        let view = salary_analytics(&[]);
        assert_eq!(view, SalaryAnalytics::default());
    }
}
