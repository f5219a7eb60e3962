//! Numeric coercion for tabular cells.
//!
//! Coercion never fails: anything that is not a decimal number becomes zero.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Parses a cell as a decimal number.
///
/// Surrounding whitespace is ignored. Plain (`45000.50`) and scientific
/// (`4.5e4`) notation are accepted. Returns `None` for empty cells,
/// non-numeric text, digit-group separators (`1_000`) and values outside
/// the decimal range.
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    // `Decimal::from_str` skips underscores; a cell is not a number with them.
    if trimmed.is_empty() || trimmed.contains('_') {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}

/// Coerces a cell to a decimal, mapping unparsable values to zero.
///
/// # Examples
///
/// ```
/// use employee_analytics::ingest::coerce_decimal;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce_decimal(" 52000 "), Decimal::new(52000, 0));
/// assert_eq!(coerce_decimal("n/a"), Decimal::ZERO);
/// assert_eq!(coerce_decimal(""), Decimal::ZERO);
/// ```
pub fn coerce_decimal(raw: &str) -> Decimal {
    parse_decimal(raw).unwrap_or(Decimal::ZERO)
}
