//! Result models for the aggregate views.
//!
//! Each view is a plain serializable structure that the HTTP layer returns
//! directly and that report renderers consume. Maps are [`IndexMap`]s so the
//! JSON key order is deterministic. Decimal amounts are serialized as JSON
//! numbers.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per-department salary statistics.
///
/// # Example
///
/// ```
/// use employee_analytics::models::SalaryAnalytics;
///
/// let empty = SalaryAnalytics::default();
/// assert!(empty.avg_salary.is_empty());
/// assert!(empty.salary_ranges.min.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryAnalytics {
    /// Mean salary per department, rounded to 2 decimal places.
    pub avg_salary: IndexMap<String, Decimal>,
    /// Lowest and highest salary per department.
    pub salary_ranges: SalaryRanges,
}

/// Salary bounds keyed by department.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryRanges {
    /// Lowest salary per department.
    pub min: IndexMap<String, Decimal>,
    /// Highest salary per department.
    pub max: IndexMap<String, Decimal>,
}

/// One entry in the top performers list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopPerformer {
    /// Employee name.
    pub name: String,
    /// Employee department.
    pub department: String,
    /// Performance score.
    pub performance_score: Decimal,
}

/// Performance tier counts, top performers and per-department score means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceAnalytics {
    /// Number of records per performance tier label.
    pub performance_counts: IndexMap<String, usize>,
    /// Up to three highest scoring employees, ties kept in dataset order.
    pub top_performers: Vec<TopPerformer>,
    /// Mean performance score per department, rounded to 2 decimal places.
    pub avg_performance_by_dept: IndexMap<String, Decimal>,
}

/// One entry in the eligible employees list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibleEmployee {
    /// Employee name.
    pub name: String,
    /// Employee department.
    pub department: String,
    /// Years of experience.
    pub years_exp: Decimal,
    /// Performance score.
    pub performance_score: Decimal,
}

/// Promotion flag counts and the list of eligible employees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PromotionAnalytics {
    /// Number of records per eligibility label.
    pub promotion_counts: IndexMap<String, usize>,
    /// Eligible employees in dataset order.
    pub eligible_employees: Vec<EligibleEmployee>,
}

/// Headcount, tier distribution, payroll and salary/score correlation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryAnalytics {
    /// Number of records per department.
    pub employee_count_by_dept: IndexMap<String, usize>,
    /// Number of records per performance tier label.
    pub performance_level_counts: IndexMap<String, usize>,
    /// Summed salary per department.
    pub total_salary_by_dept: IndexMap<String, Decimal>,
    /// Pearson correlation between salary and performance score, rounded to
    /// 2 decimal places. Zero when the coefficient is undefined.
    pub salary_performance_correlation: Decimal,
}

/// All aggregate views computed over one dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// Number of records the report covers.
    pub record_count: usize,
    /// Salary view.
    pub salary: SalaryAnalytics,
    /// Performance view.
    pub performance: PerformanceAnalytics,
    /// Promotion view.
    pub promotion: PromotionAnalytics,
    /// Summary view.
    pub summary: SummaryAnalytics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_summary_has_zero_correlation() {
        let summary = SummaryAnalytics::default();
        assert_eq!(summary.salary_performance_correlation, Decimal::ZERO);
        assert!(summary.employee_count_by_dept.is_empty());
    }

    #[test]
    fn test_salary_analytics_serialization_shape() {
        let mut analytics = SalaryAnalytics::default();
        analytics
            .avg_salary
            .insert("IT".to_string(), Decimal::new(6000000, 2));
        analytics
            .salary_ranges
            .min
            .insert("IT".to_string(), Decimal::new(58000, 0));

        let json = serde_json::to_value(&analytics).unwrap();
        assert_eq!(json["avg_salary"]["IT"], 60000.0);
        assert_eq!(json["salary_ranges"]["min"]["IT"], 58000.0);
        assert!(json["salary_ranges"]["max"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_summary_amounts_serialize_as_numbers() {
        let mut summary = SummaryAnalytics::default();
        summary.employee_count_by_dept.insert("Sales".to_string(), 2);
        summary
            .total_salary_by_dept
            .insert("Sales".to_string(), Decimal::new(84000, 0));
        summary.salary_performance_correlation = Decimal::new(90, 2);

        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["total_salary_by_dept"]["Sales"].is_number());
        assert_eq!(json["total_salary_by_dept"]["Sales"], 84000.0);
        assert_eq!(json["salary_performance_correlation"], 0.9);
        assert_eq!(json["employee_count_by_dept"]["Sales"], 2);
    }
}
