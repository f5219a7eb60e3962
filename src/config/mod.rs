//! Configuration loading and management for the analytics service.
//!
//! This module loads the server, data-location and logging settings from a
//! YAML file, falling back to built-in defaults for anything left out.
//!
//! # Example
//!
//! ```
//! use employee_analytics::config::ConfigLoader;
//!
//! let config = ConfigLoader::defaults().into_config();
//! assert_eq!(config.server.bind_address, "0.0.0.0:5000");
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DEFAULT_MAX_UPLOAD_BYTES, DataConfig, LoggingConfig, ServerConfig};
