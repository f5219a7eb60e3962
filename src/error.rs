//! Error types for the employee analytics service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while loading, uploading or persisting
//! a dataset. Aggregation itself never fails.

use thiserror::Error;

/// The main error type for the analytics service.
///
/// Loader, ingestion and configuration operations return this error type.
/// The HTTP layer converts it into a status code and an error body.
///
/// # Example
///
/// ```
/// use employee_analytics::error::AnalyticsError;
///
/// let error = AnalyticsError::InvalidFormat {
///     message: "expected a .csv file".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid format: expected a .csv file");
/// ```
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No dataset file exists at the given path.
    #[error("Dataset source not found: {path}")]
    SourceNotFound {
        /// The path that was probed.
        path: String,
    },

    /// Uploaded content does not declare itself as CSV, or is empty.
    #[error("Invalid format: {message}")]
    InvalidFormat {
        /// Why the upload was rejected.
        message: String,
    },

    /// Tabular content could not be parsed into employee rows.
    #[error("Processing error: {message}")]
    ProcessingError {
        /// A description of the parse failure.
        message: String,
    },

    /// A filesystem operation failed.
    #[error("I/O error on '{path}': {message}")]
    Io {
        /// The path being read or written.
        path: String,
        /// The underlying I/O error.
        message: String,
    },
}

impl AnalyticsError {
    /// Builds an [`AnalyticsError::Io`] from a path and a `std::io::Error`.
    pub fn io(path: impl std::fmt::Display, error: std::io::Error) -> Self {
        AnalyticsError::Io {
            path: path.to_string(),
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return AnalyticsError.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;
