//! Promotion view: eligibility counts and eligible employees.

use crate::models::{EligibleEmployee, EmployeeRecord, PromotionAnalytics};

use super::grouping::value_counts;

/// Computes promotion statistics.
///
/// Eligible employees are listed in dataset order.
pub fn promotion_analytics(records: &[EmployeeRecord]) -> PromotionAnalytics {
    let promotion_counts = value_counts(records.iter().map(|r| r.promotion_eligible.as_str()));

    let eligible_employees = records
        .iter()
        .filter(|r| r.is_promotion_eligible())
        .map(|r| EligibleEmployee {
            name: r.name.clone(),
            department: r.department.clone(),
            years_exp: r.years_exp,
            performance_score: r.performance_score,
        })
        .collect();

    PromotionAnalytics {
        promotion_counts,
        eligible_employees,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::test_support::{record, sample_records};
    use rust_decimal::Decimal;

    #[test]
    fn test_promotion_counts() {
        let view = promotion_analytics(&sample_records());

        assert_eq!(view.promotion_counts["YES"], 3);
        assert_eq!(view.promotion_counts["NO"], 2);
    }

    #[test]
    fn test_eligible_employees_in_dataset_order() {
        let view = promotion_analytics(&sample_records());

        let names: Vec<_> = view
            .eligible_employees
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sneha", "Amit", "Karan"]);
        assert_eq!(view.eligible_employees[2].years_exp, Decimal::new(4, 0));
        assert_eq!(view.eligible_employees[2].performance_score, Decimal::new(81, 0));
    }

    #[test]
    fn test_nobody_eligible() {
        let records = vec![record("Junior", "Ops", 30000, 1, 99)];
        let view = promotion_analytics(&records);

        assert_eq!(view.promotion_counts["NO"], 1);
        assert!(!view.promotion_counts.contains_key("YES"));
        assert!(view.eligible_employees.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        let view = promotion_analytics(&[]);
        assert_eq!(view, PromotionAnalytics::default());
    }
}
