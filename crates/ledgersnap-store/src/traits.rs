use std::sync::Arc;

use crate::error::StoreError;

/// Durable home of the encoded snapshot info record.
///
/// Implementations hold at most one record and hand it back verbatim.
pub trait SnapshotStore: Send + Sync {
    /// Returns the stored record, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replaces the stored record. Returns only once the bytes are durable
    /// to the degree the backend promises.
    fn save(&self, bytes: &[u8]) -> Result<(), StoreError>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Arc<S> {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load()
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).save(bytes)
    }
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn load(&self) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).load()
    }

    fn save(&self, bytes: &[u8]) -> Result<(), StoreError> {
        (**self).save(bytes)
    }
}
