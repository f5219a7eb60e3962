//! Pearson correlation between two numeric series.

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use super::grouping::ROUNDING_DECIMAL_PLACES;

/// Reported when the correlation coefficient is undefined.
pub const CORRELATION_FALLBACK: Decimal = Decimal::ZERO;

/// Computes the Pearson correlation coefficient of two equally long series.
///
/// Returns `None` when the coefficient is undefined: fewer than two pairs,
/// mismatched lengths, zero variance in either series, or a non-finite result.
///
/// # Examples
///
/// ```
/// use employee_analytics::analytics::pearson_correlation;
///
/// let r = pearson_correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
///
/// assert_eq!(pearson_correlation(&[1.0, 1.0], &[3.0, 4.0]), None);
/// ```
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x == 0.0 || variance_y == 0.0 {
        return None;
    }

    let r = covariance / (variance_x.sqrt() * variance_y.sqrt());
    r.is_finite().then_some(r)
}

/// Correlates two decimal series and rounds the result to 2 decimal places.
///
/// Undefined coefficients become [`CORRELATION_FALLBACK`].
pub fn rounded_correlation(xs: &[Decimal], ys: &[Decimal]) -> Decimal {
    // Exact check; float means of constant series can drift off zero variance.
    if is_constant(xs) || is_constant(ys) {
        return CORRELATION_FALLBACK;
    }

    let xs: Vec<f64> = xs.iter().map(|v| v.to_f64().unwrap_or(0.0)).collect();
    let ys: Vec<f64> = ys.iter().map(|v| v.to_f64().unwrap_or(0.0)).collect();

    pearson_correlation(&xs, &ys)
        .and_then(Decimal::from_f64)
        .map(|r| r.round_dp(ROUNDING_DECIMAL_PLACES))
        .unwrap_or(CORRELATION_FALLBACK)
}

fn is_constant(values: &[Decimal]) -> bool {
    values.windows(2).all(|pair| pair[0] == pair[1])
}
