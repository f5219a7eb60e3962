//! Shared group-by helpers for the aggregate views.

use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::models::EmployeeRecord;

/// Number of decimal places used for rounded means and the correlation.
pub const ROUNDING_DECIMAL_PLACES: u32 = 2;

/// Groups records by department in first-appearance order.
///
/// Department names are matched exactly; `"IT"` and `"it "` are distinct.
pub fn group_by_department(records: &[EmployeeRecord]) -> IndexMap<&str, Vec<&EmployeeRecord>> {
    let mut groups: IndexMap<&str, Vec<&EmployeeRecord>> = IndexMap::new();
    for record in records {
        groups
            .entry(record.department.as_str())
            .or_default()
            .push(record);
    }
    groups
}

/// Sums decimals, saturating at the representable bounds.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, v| acc.saturating_add(v))
}

/// Arithmetic mean rounded to [`ROUNDING_DECIMAL_PLACES`] with banker's rounding.
///
/// Returns `None` for an empty input.
pub fn rounded_mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let sum = saturating_sum(values.iter().copied());
    let mean = sum / Decimal::from(values.len());
    Some(mean.round_dp(ROUNDING_DECIMAL_PLACES))
}

/// Counts label occurrences.
///
/// The result is ordered by descending count; equal counts keep the order in
/// which the labels were first seen.
pub fn value_counts<'a, I>(labels: I) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for label in labels {
        *counts.entry(label.to_string()).or_insert(0) += 1;
    }
    counts.sort_by(|_, a, _, b| b.cmp(a));
    counts
}
