//! Set command implementation.

use crate::commands::snapshot_from_args;
use crate::SnapshotArgs;
use ledgersnap_registry::SnapshotRegistry;
use ledgersnap_store::{FileStore, WriteOptions};

pub fn run(
    store: String,
    args: SnapshotArgs,
    sync: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = snapshot_from_args(&args)?;

    let options = WriteOptions {
        sync,
        ..WriteOptions::default()
    };
    let registry = SnapshotRegistry::initialize(FileStore::new(&store, options))
        .map_err(|e| format!("Failed to load snapshot info: {}", e))?;

    if let Some(previous) = registry.get() {
        if snapshot.snapshot_index < previous.snapshot_index {
            tracing::warn!(
                previous = %previous.snapshot_index,
                new = %snapshot.snapshot_index,
                "Recording an older snapshot than the one stored"
            );
        }
    }

    registry
        .set_from_restore(
            snapshot.coordinator_address,
            snapshot.hash,
            snapshot.snapshot_index,
            snapshot.pruning_index,
            snapshot.timestamp,
            args.spent_addresses,
        )
        .map_err(|e| format!("Failed to store snapshot info: {}", e))?;

    println!("Snapshot recorded: index {}", args.index);
    Ok(())
}
