//! Dataset lifecycle: loading, upload processing and the shared store.
//!
//! The [`DatasetLoader`] turns files into derived [`Dataset`](crate::models::Dataset)
//! snapshots; the [`DatasetStore`] holds the snapshot currently served.

mod dataset_store;
mod loader;

pub use dataset_store::DatasetStore;
pub use loader::{DatasetLoader, UPLOAD_EXTENSION, validate_upload};
