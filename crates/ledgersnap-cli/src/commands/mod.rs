pub mod decode;
pub mod encode;
pub mod set;
pub mod show;

use crate::SnapshotArgs;
use ledgersnap_core::{Hash, MilestoneIndex, SnapshotInfo};

/// Builds and validates a descriptor from command-line fields.
pub fn snapshot_from_args(
    args: &SnapshotArgs,
) -> Result<SnapshotInfo, Box<dyn std::error::Error>> {
    let coordinator = Hash::parse_address(args.coordinator.as_str())
        .map_err(|e| format!("Invalid coordinator address: {}", e))?;
    let hash = Hash::parse(args.hash.as_str())
        .map_err(|e| format!("Invalid milestone hash: {}", e))?;
    let timestamp = args
        .timestamp
        .unwrap_or_else(|| chrono::Utc::now().timestamp());

    let snapshot = SnapshotInfo::new(
        coordinator,
        hash,
        MilestoneIndex(args.index),
        MilestoneIndex(args.pruning_index),
        timestamp,
        args.spent_addresses,
    );
    snapshot.validate()?;
    Ok(snapshot)
}
