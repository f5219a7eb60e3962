//! CSV reading into employee rows.
//!
//! Columns are located by exact header name, so column order does not
//! matter and extra columns are ignored. String cells are kept verbatim.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::{EmployeeRow, PerformanceLevel, PromotionEligibility};

use super::coercion::parse_decimal;

/// The six columns every employee file must provide.
pub const BASE_COLUMNS: [&str; 6] = [
    "emp_id",
    "name",
    "department",
    "salary",
    "years_exp",
    "performance_score",
];

/// Optional column carrying a precomputed performance tier.
pub const PERFORMANCE_LEVEL_COLUMN: &str = "performance_level";

/// Optional column carrying a precomputed promotion flag.
pub const PROMOTION_ELIGIBLE_COLUMN: &str = "promotion_eligible";

/// Header positions of the known columns.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ColumnLayout {
    emp_id: usize,
    name: usize,
    department: usize,
    salary: usize,
    years_exp: usize,
    performance_score: usize,
    performance_level: Option<usize>,
    promotion_eligible: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> AnalyticsResult<Self> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AnalyticsError::ProcessingError {
                message: format!("missing required column '{}'", name),
            })
        };

        Ok(Self {
            emp_id: require("emp_id")?,
            name: require("name")?,
            department: require("department")?,
            salary: require("salary")?,
            years_exp: require("years_exp")?,
            performance_score: require("performance_score")?,
            performance_level: find(PERFORMANCE_LEVEL_COLUMN),
            promotion_eligible: find(PROMOTION_ELIGIBLE_COLUMN),
        })
    }

    /// Builds a row, counting numeric cells that had to be zeroed.
    fn row(&self, record: &StringRecord, coerced_cells: &mut usize) -> EmployeeRow {
        let text = |index: usize| record.get(index).unwrap_or("").to_string();
        let mut number = |index: usize| {
            parse_decimal(record.get(index).unwrap_or("")).unwrap_or_else(|| {
                *coerced_cells += 1;
                Decimal::ZERO
            })
        };

        let salary = number(self.salary);
        let years_exp = number(self.years_exp);
        let performance_score = number(self.performance_score);

        EmployeeRow {
            emp_id: text(self.emp_id),
            name: text(self.name),
            department: text(self.department),
            salary,
            years_exp,
            performance_score,
            performance_level: self
                .performance_level
                .and_then(|i| record.get(i))
                .and_then(|v| v.parse::<PerformanceLevel>().ok()),
            promotion_eligible: self
                .promotion_eligible
                .and_then(|i| record.get(i))
                .and_then(|v| v.parse::<PromotionEligibility>().ok()),
        }
    }
}

/// Reads employee rows from CSV text with a header row.
///
/// # Errors
///
/// Returns [`AnalyticsError::ProcessingError`] if a base column is missing,
/// a row has a different number of fields than the header, or the content
/// is not valid UTF-8.
///
/// # Example
///
/// ```
/// use employee_analytics::ingest::read_rows;
/// use rust_decimal::Decimal;
///
/// let csv = "emp_id,name,department,salary,years_exp,performance_score\n\
///            E101,Ramesh,Sales,45000,3,78\n";
/// let rows = read_rows(csv.as_bytes())?;
/// assert_eq!(rows[0].salary, Decimal::new(45000, 0));
/// assert!(rows[0].performance_level.is_none());
/// # Ok::<(), employee_analytics::error::AnalyticsError>(())
/// ```
pub fn read_rows<R: Read>(reader: R) -> AnalyticsResult<Vec<EmployeeRow>> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AnalyticsError::ProcessingError {
            message: format!("unreadable header row: {}", e),
        })?
        .clone();
    let layout = ColumnLayout::from_headers(&headers)?;

    let mut rows = Vec::new();
    let mut coerced_cells = 0usize;
    for result in csv_reader.records() {
        let record = result.map_err(|e| AnalyticsError::ProcessingError {
            message: e.to_string(),
        })?;
        rows.push(layout.row(&record, &mut coerced_cells));
    }

    if coerced_cells > 0 {
        warn!(
            rows = rows.len(),
            coerced_cells, "Non-numeric cells coerced to zero"
        );
    }
    debug!(
        rows = rows.len(),
        has_performance_level = layout.performance_level.is_some(),
        has_promotion_eligible = layout.promotion_eligible.is_some(),
        "Parsed employee rows"
    );

    Ok(rows)
}

/// Reads employee rows from a CSV file.
///
/// A missing file is reported as [`AnalyticsError::SourceNotFound`] so the
/// loader can fall through to the next source.
pub fn read_rows_from_path(path: &Path) -> AnalyticsResult<Vec<EmployeeRow>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalyticsError::SourceNotFound {
            path: path.display().to_string(),
        },
        _ => AnalyticsError::io(path.display(), e),
    })?;
    read_rows(file)
}
