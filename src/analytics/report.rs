//! Combined report over all aggregate views.

use crate::models::{AnalyticsReport, EmployeeRecord};

use super::{performance_analytics, promotion_analytics, salary_analytics, summary_analytics};

/// Computes every aggregate view over the same records.
pub fn build_report(records: &[EmployeeRecord]) -> AnalyticsReport {
    AnalyticsReport {
        record_count: records.len(),
        salary: salary_analytics(records),
        performance: performance_analytics(records),
        promotion: promotion_analytics(records),
        summary: summary_analytics(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::sample_records;
    use rust_decimal::Decimal;

    #[test]
    fn test_report_covers_all_views() {
        let report = build_report(&sample_records());

        assert_eq!(report.record_count, 5);
        assert_eq!(report.salary.avg_salary.len(), 3);
        assert_eq!(report.performance.top_performers.len(), 3);
        assert_eq!(report.promotion.eligible_employees.len(), 3);
        assert_eq!(
            report.summary.salary_performance_correlation,
            Decimal::new(90, 2)
        );
    }

    #[test]
    fn test_empty_report() {
        let report = build_report(&[]);
        assert_eq!(report, AnalyticsReport::default());
    }
}
