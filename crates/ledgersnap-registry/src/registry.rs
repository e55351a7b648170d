use std::sync::Arc;

use ledgersnap_core::{Hash, MilestoneIndex, SnapshotInfo};
use ledgersnap_store::SnapshotStore;
use parking_lot::RwLock;
use tracing::{debug, error, info};

use crate::errors::RegistryError;
use crate::watermark::RestoreWatermark;

/// Source of truth for the snapshot this process is anchored to.
///
/// The current descriptor lives behind a reader/writer lock. Readers share the
/// lock and get an `Arc` to an immutable descriptor; writers persist through
/// the store and publish under the exclusive lock, so a published descriptor
/// has always reached storage first.
///
/// The restore watermark is tracked separately and is not covered by that
/// lock.
///
/// # Example
///
/// ```rust
/// use ledgersnap_core::{Hash, MilestoneIndex};
/// use ledgersnap_registry::SnapshotRegistry;
/// use ledgersnap_store::MemoryStore;
///
/// let registry = SnapshotRegistry::initialize(MemoryStore::new())?;
/// assert!(registry.get().is_none());
///
/// registry.set_from_restore(
///     Hash::parse("A".repeat(81))?,
///     Hash::parse("B".repeat(81))?,
///     MilestoneIndex(100),
///     MilestoneIndex(50),
///     1_600_000_000,
///     true,
/// )?;
/// assert_eq!(registry.get().unwrap().snapshot_index, MilestoneIndex(100));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct SnapshotRegistry<S> {
    store: S,
    current: RwLock<Option<Arc<SnapshotInfo>>>,
    restore_watermark: RestoreWatermark,
}

impl<S: SnapshotStore> SnapshotRegistry<S> {
    /// Loads the persisted descriptor, if any, and builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the store cannot be read or holds a record
    /// that does not decode. No registry is built in that case.
    pub fn initialize(store: S) -> Result<Self, RegistryError> {
        let current = match store.load()? {
            Some(bytes) => {
                let snapshot = SnapshotInfo::from_bytes(&bytes)?;
                log_snapshot("Loaded snapshot info", &snapshot);
                Some(Arc::new(snapshot))
            }
            None => {
                debug!("No snapshot info stored");
                None
            }
        };

        Ok(Self {
            store,
            current: RwLock::new(current),
            restore_watermark: RestoreWatermark::new(),
        })
    }

    /// Returns the current descriptor without touching storage.
    pub fn get(&self) -> Option<Arc<SnapshotInfo>> {
        self.current.read().clone()
    }

    /// Persists `snapshot` and makes it the current descriptor.
    ///
    /// The record is encoded before the lock is taken. The exclusive lock is
    /// held across the store write and the swap.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Store`] if the write fails; the current
    /// descriptor is left as it was.
    pub fn set(&self, snapshot: SnapshotInfo) -> Result<(), RegistryError> {
        let bytes = snapshot.to_bytes();
        let snapshot = Arc::new(snapshot);

        let mut current = self.current.write();
        if let Err(e) = self.store.save(&bytes) {
            error!(
                error = %e,
                snapshot_index = %snapshot.snapshot_index,
                "Failed to persist snapshot info"
            );
            return Err(e.into());
        }
        log_snapshot("Stored snapshot info", &snapshot);
        *current = Some(snapshot);
        Ok(())
    }

    /// Records the snapshot milestone a restore started from.
    ///
    /// The metadata byte carries only the spent-addresses flag.
    pub fn set_from_restore(
        &self,
        coordinator_address: Hash,
        hash: Hash,
        snapshot_index: MilestoneIndex,
        pruning_index: MilestoneIndex,
        timestamp: i64,
        spent_addresses_enabled: bool,
    ) -> Result<(), RegistryError> {
        let snapshot = SnapshotInfo::new(
            coordinator_address,
            hash,
            snapshot_index,
            pruning_index,
            timestamp,
            spent_addresses_enabled,
        );
        log_snapshot("Loaded solid milestone from snapshot", &snapshot);
        self.set(snapshot)
    }

    /// Raises the restore watermark to `index` if it is higher.
    pub fn record_seen_during_restore(&self, index: MilestoneIndex) {
        if self.restore_watermark.advance(index) {
            debug!(%index, "Restore watermark advanced");
        }
    }

    /// Highest milestone index seen during restore; zero if none.
    pub fn highest_seen_during_restore(&self) -> MilestoneIndex {
        self.restore_watermark.get()
    }
}

fn log_snapshot(message: &str, snapshot: &SnapshotInfo) {
    let timestamp = snapshot.timestamp_display();
    info!(
        coordinator_address = %snapshot.coordinator_address,
        hash = %snapshot.hash,
        snapshot_index = %snapshot.snapshot_index,
        pruning_index = %snapshot.pruning_index,
        %timestamp,
        spent_addresses_enabled = snapshot.is_spent_addresses_enabled(),
        "{message}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgersnap_store::MemoryStore;

    fn hash(ch: char) -> Hash {
        Hash::parse(ch.to_string().repeat(81)).unwrap()
    }

    #[test]
    fn empty_store_starts_absent() {
        let registry = SnapshotRegistry::initialize(MemoryStore::new()).unwrap();
        assert!(registry.get().is_none());
        assert_eq!(registry.highest_seen_during_restore(), MilestoneIndex(0));
    }

    #[test]
    fn set_writes_through_to_store() {
        let store = MemoryStore::new();
        let registry = SnapshotRegistry::initialize(store.clone()).unwrap();
        let snapshot = SnapshotInfo::new(
            hash('A'),
            hash('B'),
            MilestoneIndex(9),
            MilestoneIndex(4),
            0,
            false,
        );

        registry.set(snapshot.clone()).unwrap();

        assert_eq!(store.snapshot(), Some(snapshot.to_bytes().to_vec()));
        assert_eq!(registry.get().as_deref(), Some(&snapshot));
    }

    #[test]
    fn get_returns_shared_descriptor() {
        let registry = SnapshotRegistry::initialize(MemoryStore::new()).unwrap();
        registry
            .set_from_restore(
                hash('C'),
                hash('D'),
                MilestoneIndex(1),
                MilestoneIndex(0),
                0,
                true,
            )
            .unwrap();
        let a = registry.get().unwrap();
        let b = registry.get().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
