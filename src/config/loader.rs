//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{AnalyticsError, AnalyticsResult};

use super::types::AppConfig;

/// Loads and provides access to the service configuration.
///
/// # File Layout
///
/// ```text
/// server:
///   bind_address: "0.0.0.0:5000"
///   max_upload_bytes: 16777216
/// data:
///   persisted_path: employee_analysis_output.csv
///   raw_path: employees.csv
///   upload_dir: uploads
/// logging:
///   format: pretty
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_analytics::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/analytics.yaml")?;
/// println!("Listening on {}", loader.config().server.bind_address);
/// # Ok::<(), employee_analytics::error::AnalyticsError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// - [`AnalyticsError::ConfigNotFound`] if the file cannot be read
    /// - [`AnalyticsError::ConfigParseError`] if the file is not valid YAML
    ///   for [`AppConfig`]
    pub fn load<P: AsRef<Path>>(path: P) -> AnalyticsResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| AnalyticsError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = serde_yaml::from_str(&content).map_err(|e| {
            AnalyticsError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            }
        })?;

        Ok(Self { config })
    }

    /// Returns a loader holding the built-in defaults.
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Loads from `path` if given, otherwise uses the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> AnalyticsResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::defaults()),
        }
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_valid_configuration() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analytics.yaml");
        fs::write(
            &path,
            "server:\n  bind_address: \"127.0.0.1:9000\"\ndata:\n  upload_dir: /tmp/staging\n",
        )
        .unwrap();

        let loader = ConfigLoader::load(&path).unwrap();
        assert_eq!(loader.config().server.bind_address, "127.0.0.1:9000");
        assert_eq!(
            loader.config().data.upload_dir,
            PathBuf::from("/tmp/staging")
        );
    }

    #[test]
    fn test_load_shipped_configuration() {
        let loader = ConfigLoader::load("./config/analytics.yaml").unwrap();
        let config = loader.into_config();
        assert_eq!(config.server.max_upload_bytes, 16 * 1024 * 1024);
        assert_eq!(config.data.raw_path, PathBuf::from("data/employees.csv"));
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        match ConfigLoader::load("/nonexistent/analytics.yaml") {
            Err(AnalyticsError::ConfigNotFound { path }) => {
                assert!(path.contains("analytics.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "server: [unclosed").unwrap();

        assert!(matches!(
            ConfigLoader::load(&path),
            Err(AnalyticsError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_or_default_without_path() {
        let loader = ConfigLoader::load_or_default(None::<&str>).unwrap();
        assert_eq!(loader.config(), &AppConfig::default());
    }
}
