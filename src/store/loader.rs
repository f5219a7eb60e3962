//! Dataset loading from persisted files and uploads.
//!
//! Startup loading never fails: it walks the configured sources in priority
//! order and ends with an empty dataset. Upload loading validates the file,
//! stages it on disk while parsing and always removes the staged copy.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{info, warn};

use crate::config::DataConfig;
use crate::derivation::derive_records;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::ingest::{read_rows, read_rows_from_path};
use crate::models::{Dataset, DatasetSource, EmployeeRecord};

/// File extension an upload must carry.
pub const UPLOAD_EXTENSION: &str = "csv";

/// Builds derived datasets from the configured sources.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    data: DataConfig,
}

impl DatasetLoader {
    /// Creates a loader for the given data locations.
    pub fn new(data: DataConfig) -> Self {
        Self { data }
    }

    /// Returns the configured data locations.
    pub fn data_config(&self) -> &DataConfig {
        &self.data
    }

    /// Loads the startup dataset.
    ///
    /// Sources are tried in order:
    /// 1. the persisted derived file, if present and well-formed
    /// 2. the raw base file, run through derivation
    /// 3. an empty dataset
    pub fn load_startup(&self) -> Dataset {
        let persisted = &self.data.persisted_path;
        match load_file(persisted) {
            Ok(records) => {
                info!(path = %persisted.display(), records = records.len(), "Loaded persisted dataset");
                return Dataset::new(
                    records,
                    DatasetSource::Persisted {
                        path: persisted.clone(),
                    },
                );
            }
            Err(err) => log_skipped_source(&err),
        }

        let raw = &self.data.raw_path;
        match load_file(raw) {
            Ok(records) => {
                info!(path = %raw.display(), records = records.len(), "Loaded raw dataset");
                return Dataset::new(records, DatasetSource::Raw { path: raw.clone() });
            }
            Err(err) => log_skipped_source(&err),
        }

        info!("No dataset source available, starting empty");
        Dataset::empty()
    }

    /// Parses and derives an uploaded file.
    ///
    /// # Errors
    ///
    /// - [`AnalyticsError::InvalidFormat`] if the filename is missing or
    ///   empty, does not end in `.csv`, or the content is empty
    /// - [`AnalyticsError::ProcessingError`] if the content cannot be parsed
    /// - [`AnalyticsError::Io`] if the staging directory is unusable
    pub fn load_upload(&self, filename: Option<&str>, content: &[u8]) -> AnalyticsResult<Dataset> {
        let filename = validate_upload(filename, content)?;

        let upload_dir = &self.data.upload_dir;
        fs::create_dir_all(upload_dir).map_err(|e| AnalyticsError::io(upload_dir.display(), e))?;

        let mut staged = tempfile::Builder::new()
            .prefix("upload-")
            .suffix(".csv")
            .tempfile_in(upload_dir)
            .map_err(|e| AnalyticsError::io(upload_dir.display(), e))?;
        let staged_path = staged.path().display().to_string();

        let parsed = staged
            .write_all(content)
            .and_then(|_| staged.flush())
            .and_then(|_| staged.reopen())
            .map_err(|e| AnalyticsError::io(&staged_path, e))
            .and_then(read_rows);

        if let Err(err) = staged.close() {
            warn!(path = %staged_path, error = %err, "Failed to remove staged upload");
        }

        let records = derive_records(parsed?);
        info!(filename, records = records.len(), "Upload processed");

        Ok(Dataset::new(
            records,
            DatasetSource::Upload {
                filename: filename.to_string(),
            },
        ))
    }
}

/// Checks that an upload declares itself as CSV and is not empty.
///
/// Returns the validated filename.
pub fn validate_upload<'a>(filename: Option<&'a str>, content: &[u8]) -> AnalyticsResult<&'a str> {
    let filename = match filename {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(AnalyticsError::InvalidFormat {
                message: "No file selected".to_string(),
            });
        }
    };

    let is_csv = Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(UPLOAD_EXTENSION));
    if !is_csv {
        return Err(AnalyticsError::InvalidFormat {
            message: "Invalid file format. Please upload a CSV file.".to_string(),
        });
    }

    if content.is_empty() {
        return Err(AnalyticsError::InvalidFormat {
            message: format!("Uploaded file '{}' is empty", filename),
        });
    }

    Ok(filename)
}

fn load_file(path: &Path) -> AnalyticsResult<Vec<EmployeeRecord>> {
    let rows = read_rows_from_path(path)?;
    Ok(derive_records(rows))
}

fn log_skipped_source(err: &AnalyticsError) {
    match err {
        AnalyticsError::SourceNotFound { path } => {
            info!(path = %path, "Dataset source not present");
        }
        other => {
            warn!(error = %other, "Dataset source unusable, trying next");
        }
    }
}
