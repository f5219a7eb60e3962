//! Application state for the analytics API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{AppConfig, DEFAULT_MAX_UPLOAD_BYTES};
use crate::store::{DatasetLoader, DatasetStore};

/// Shared application state.
///
/// Holds the dataset store queried by every read endpoint and the loader
/// used by the upload endpoint.
#[derive(Clone)]
pub struct AppState {
    store: Arc<DatasetStore>,
    loader: Arc<DatasetLoader>,
    max_upload_bytes: usize,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: DatasetStore, loader: DatasetLoader) -> Self {
        Self {
            store: Arc::new(store),
            loader: Arc::new(loader),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    /// Builds the state from configuration, loading the startup dataset.
    pub fn from_config(config: &AppConfig) -> Self {
        let loader = DatasetLoader::new(config.data.clone());
        let store = DatasetStore::new(loader.load_startup());
        Self::new(store, loader).with_max_upload_bytes(config.server.max_upload_bytes)
    }

    /// Overrides the request body limit.
    pub fn with_max_upload_bytes(mut self, max_upload_bytes: usize) -> Self {
        self.max_upload_bytes = max_upload_bytes;
        self
    }

    /// Returns the dataset store.
    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    /// Returns a shared handle to the loader.
    pub fn loader(&self) -> Arc<DatasetLoader> {
        Arc::clone(&self.loader)
    }

    /// Returns the request body limit in bytes.
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }
}
