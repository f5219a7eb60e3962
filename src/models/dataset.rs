//! Immutable dataset snapshots.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::EmployeeRecord;

/// Where a dataset snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DatasetSource {
    /// No source was available; the dataset has zero rows.
    Empty,
    /// A previously persisted, already derived file.
    Persisted {
        /// The file that was read.
        path: PathBuf,
    },
    /// A raw base file that went through derivation.
    Raw {
        /// The file that was read.
        path: PathBuf,
    },
    /// An uploaded file.
    Upload {
        /// The client-supplied filename.
        filename: String,
    },
}

/// A fully derived, read-only collection of employee records.
///
/// Datasets are never mutated after construction; loading or uploading
/// produces a new snapshot that replaces the old one wholesale.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    records: Vec<EmployeeRecord>,
    source: DatasetSource,
    loaded_at: DateTime<Utc>,
}

impl Dataset {
    /// Creates a snapshot from derived records.
    pub fn new(records: Vec<EmployeeRecord>, source: DatasetSource) -> Self {
        Self {
            records,
            source,
            loaded_at: Utc::now(),
        }
    }

    /// Creates the zero-row fallback dataset.
    pub fn empty() -> Self {
        Self::new(Vec::new(), DatasetSource::Empty)
    }

    /// Returns the records in insertion order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns where this snapshot was loaded from.
    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Returns when this snapshot was built.
    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::empty()
    }
}
