//! Process-wide dataset holder with snapshot-swap semantics.

use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::models::Dataset;

/// Holds the current dataset snapshot.
///
/// Readers take an `Arc` to the snapshot and compute on it without holding
/// any lock. A replacement swaps the `Arc`, so readers that already hold the
/// old snapshot finish on it undisturbed and no reader ever observes a
/// partially replaced dataset. The lock only guards the pointer copy.
///
/// # Example
///
/// ```
/// use employee_analytics::models::Dataset;
/// use employee_analytics::store::DatasetStore;
///
/// let store = DatasetStore::default();
/// assert!(store.snapshot().is_empty());
///
/// store.replace(Dataset::empty());
/// ```
#[derive(Debug, Default)]
pub struct DatasetStore {
    current: RwLock<Arc<Dataset>>,
}

impl DatasetStore {
    /// Creates a store holding `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            current: RwLock::new(Arc::new(dataset)),
        }
    }

    /// Returns the current snapshot.
    pub fn snapshot(&self) -> Arc<Dataset> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replaces the current snapshot, returning the previous one.
    pub fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let next = Arc::new(dataset);
        let records = next.len();
        let previous = {
            let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *guard, next)
        };
        info!(
            records,
            previous_records = previous.len(),
            "Dataset replaced"
        );
        previous
    }
}
