//! Performance view: tier counts, top performers, per-department score means.

use rust_decimal::Decimal;

use crate::models::{EmployeeRecord, PerformanceAnalytics, TopPerformer};

use super::grouping::{group_by_department, rounded_mean, value_counts};

/// Number of entries in the top performers list.
pub const TOP_PERFORMER_COUNT: usize = 3;

/// Computes performance statistics.
///
/// Top performers are ranked by score descending. The sort is stable, so
/// employees with equal scores keep their dataset order and the earlier one
/// wins the last slot.
pub fn performance_analytics(records: &[EmployeeRecord]) -> PerformanceAnalytics {
    let performance_counts = value_counts(records.iter().map(|r| r.performance_level.as_str()));

    let mut ranked: Vec<&EmployeeRecord> = records.iter().collect();
    ranked.sort_by(|a, b| b.performance_score.cmp(&a.performance_score));
    let top_performers = ranked
        .into_iter()
        .take(TOP_PERFORMER_COUNT)
        .map(|r| TopPerformer {
            name: r.name.clone(),
            department: r.department.clone(),
            performance_score: r.performance_score,
        })
        .collect();

    let avg_performance_by_dept = group_by_department(records)
        .into_iter()
        .filter_map(|(department, members)| {
            let scores: Vec<Decimal> = members.iter().map(|r| r.performance_score).collect();
            rounded_mean(&scores).map(|mean| (department.to_string(), mean))
        })
        .collect();

    PerformanceAnalytics {
        performance_counts,
        top_performers,
        avg_performance_by_dept,
    }
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
    fn test_top_three_by_score() {
        let view = performance_analytics(&sample_records());

        let names: Vec<_> = view.top_performers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Amit", "Sneha", "Karan"]);
        assert_eq!(view.top_performers[0].department, "IT");
        assert_eq!(view.top_performers[0].performance_score, dec("92"));
    }

    #[test]
    fn test_top_performer_ties_keep_dataset_order() {
        let records = vec![
            record("First", "A", 1, 1, 90),
            record("Second", "B", 1, 1, 95),
            record("Third", "C", 1, 1, 90),
            record("Fourth", "D", 1, 1, 90),
        ];
        let view = performance_analytics(&records);

        let names: Vec<_> = view.top_performers.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Second", "First", "Third"]);
    }

    #[test]
    fn test_fewer_than_three_records() {
        let records = vec![record("Solo", "A", 1, 1, 50)];
        let view = performance_analytics(&records);
        assert_eq!(view.top_performers.len(), 1);
    }

    #[test]
    fn test_performance_level_counts() {
        let view = performance_analytics(&sample_records());

        assert_eq!(view.performance_counts["MEDIUM"], 3);
        assert_eq!(view.performance_counts["HIGH"], 2);
        assert!(!view.performance_counts.contains_key("LOW"));

        let first = view.performance_counts.keys().next().unwrap();
        assert_eq!(first, "MEDIUM");
    }

    #[test]
    fn test_average_performance_by_department() {
        let view = performance_analytics(&sample_records());

        assert_eq!(view.avg_performance_by_dept["Sales"], dec("74"));
        assert_eq!(view.avg_performance_by_dept["HR"], dec("85"));
        assert_eq!(view.avg_performance_by_dept["IT"], dec("86.5"));
    }

    #[test]
    fn test_empty_dataset() {
        let view = performance_analytics(&[]);
        assert_eq!(view, PerformanceAnalytics::default());
    }
}
