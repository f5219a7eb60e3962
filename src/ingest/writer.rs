//! CSV writing of derived employee records.

use std::fs;
use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::models::EmployeeRecord;

use super::reader::{BASE_COLUMNS, PERFORMANCE_LEVEL_COLUMN, PROMOTION_ELIGIBLE_COLUMN};

fn output_header() -> Vec<&'static str> {
    let mut header = BASE_COLUMNS.to_vec();
    header.push(PERFORMANCE_LEVEL_COLUMN);
    header.push(PROMOTION_ELIGIBLE_COLUMN);
    header
}

/// Decimals are written in their textual form so the file keeps each value's scale.
fn record_cells(record: &EmployeeRecord) -> [String; 8] {
    [
        record.emp_id.clone(),
        record.name.clone(),
        record.department.clone(),
        record.salary.to_string(),
        record.years_exp.to_string(),
        record.performance_score.to_string(),
        record.performance_level.as_str().to_string(),
        record.promotion_eligible.as_str().to_string(),
    ]
}

/// Writes derived records as CSV, header first.
///
/// The header is written even when there are no records.
pub fn write_records<W: Write>(writer: W, records: &[EmployeeRecord]) -> AnalyticsResult<()> {
    let to_error = |e: csv::Error| AnalyticsError::ProcessingError {
        message: format!("failed to write CSV: {}", e),
    };

    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    csv_writer.write_record(output_header()).map_err(to_error)?;
    for record in records {
        csv_writer.write_record(record_cells(record)).map_err(to_error)?;
    }
    csv_writer.flush().map_err(|e| AnalyticsError::ProcessingError {
        message: format!("failed to flush CSV: {}", e),
    })
}

/// Writes derived records to `path`, replacing any existing file.
///
/// Output goes to a temporary file next to the target which is then renamed
/// over it, so readers never see a half-written file.
pub fn write_dataset_file(path: &Path, records: &[EmployeeRecord]) -> AnalyticsResult<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| AnalyticsError::io(parent.display(), e))?;

    let mut staged =
        NamedTempFile::new_in(parent).map_err(|e| AnalyticsError::io(parent.display(), e))?;
    write_records(&mut staged, records)?;
    staged
        .persist(path)
        .map_err(|e| AnalyticsError::io(path.display(), e.error))?;

    info!(path = %path.display(), records = records.len(), "Dataset written");
    Ok(())
}
