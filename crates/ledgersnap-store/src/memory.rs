use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::StoreError;
use crate::traits::SnapshotStore;

/// In-memory snapshot store.
///
/// Clones share the same cell, so a test can keep a handle and inspect what a
/// registry persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Arc<RwLock<Option<Vec<u8>>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `bytes`.
    pub fn with_record(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            record: Arc::new(RwLock::new(Some(bytes.into()))),
        }
    }

    /// Returns a copy of the stored record.
    pub fn snapshot(&self) -> Option<Vec<u8>> {
        self.record.read().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.record.read().clone())
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        *self.record.write() = Some(bytes.to_vec());
        Ok(())
    }
}
