//! Summary view: headcount, tier distribution, payroll, correlation.

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, SummaryAnalytics};

use super::correlation::rounded_correlation;
use super::grouping::{group_by_department, saturating_sum, value_counts};

/// Computes the summary statistics.
pub fn summary_analytics(records: &[EmployeeRecord]) -> SummaryAnalytics {
    let employee_count_by_dept = value_counts(records.iter().map(|r| r.department.as_str()));
    let performance_level_counts =
        value_counts(records.iter().map(|r| r.performance_level.as_str()));

    let total_salary_by_dept = group_by_department(records)
        .into_iter()
        .map(|(department, members)| {
            let total = saturating_sum(members.iter().map(|r| r.salary));
            (department.to_string(), total)
        })
        .collect();

    let salaries: Vec<Decimal> = records.iter().map(|r| r.salary).collect();
    let scores: Vec<Decimal> = records.iter().map(|r| r.performance_score).collect();

    SummaryAnalytics {
        employee_count_by_dept,
        performance_level_counts,
        total_salary_by_dept,
        salary_performance_correlation: rounded_correlation(&salaries, &scores),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{record, sample_records};

    #[test]
    fn test_employee_count_by_department() {
        let view = summary_analytics(&sample_records());

        assert_eq!(view.employee_count_by_dept["Sales"], 2);
        assert_eq!(view.employee_count_by_dept["IT"], 2);
        assert_eq!(view.employee_count_by_dept["HR"], 1);

        let keys: Vec<_> = view.employee_count_by_dept.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Sales", "IT", "HR"]);
    }

    #[test]
    fn test_total_salary_by_department() {
        let view = summary_analytics(&sample_records());

        assert_eq!(view.total_salary_by_dept["Sales"], Decimal::new(84000, 0));
        assert_eq!(view.total_salary_by_dept["HR"], Decimal::new(52000, 0));
        assert_eq!(view.total_salary_by_dept["IT"], Decimal::new(120000, 0));
    }

    #[test]
    fn test_performance_level_counts_match_performance_view() {
        let view = summary_analytics(&sample_records());
        assert_eq!(view.performance_level_counts["MEDIUM"], 3);
        assert_eq!(view.performance_level_counts["HIGH"], 2);
    }

    #[test]
    fn test_correlation_rounded() {
        let view = summary_analytics(&sample_records());
        assert_eq!(view.salary_performance_correlation, Decimal::new(90, 2));
    }

    #[test]
    fn test_single_record_correlation_falls_back_to_zero() {
        let view = summary_analytics(&[record("Solo", "Ops", 50000, 5, 90)]);
        assert_eq!(view.salary_performance_correlation, Decimal::ZERO);
        assert_eq!(view.employee_count_by_dept["Ops"], 1);
    }

    #[test]
    fn test_empty_dataset() {
        let view = summary_analytics(&[]);
        assert_eq!(view, SummaryAnalytics::default());
    }
}
