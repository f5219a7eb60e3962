//! Configuration types for the analytics service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file (or no file at all) is valid.

use std::path::PathBuf;

use serde::Deserialize;

use crate::observability::LogFormat;

/// Default 16 MiB cap on request bodies.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub bind_address: String,
    /// Largest accepted request body, in bytes.
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

/// Dataset file locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Previously persisted, fully derived dataset. Tried first at startup.
    pub persisted_path: PathBuf,
    /// Raw base dataset. Tried when no persisted dataset is usable.
    pub raw_path: PathBuf,
    /// Directory where uploads are staged while being parsed.
    pub upload_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            persisted_path: PathBuf::from("employee_analysis_output.csv"),
            raw_path: PathBuf::from("employees.csv"),
            upload_dir: PathBuf::from("uploads"),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log output format.
    pub format: LogFormat,
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Dataset file locations.
    pub data: DataConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}
