//! Output formatting utilities.

use ledgersnap_core::SnapshotInfo;

/// Formats a descriptor as pretty JSON.
pub fn format_json(snapshot: &SnapshotInfo) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(snapshot)
}

/// Formats a descriptor as aligned `FIELD value` lines.
pub fn format_summary(snapshot: &SnapshotInfo) -> String {
    let timestamp = match snapshot.timestamp_utc() {
        Some(_) => format!("{} ({})", snapshot.timestamp, snapshot.timestamp_display()),
        None => snapshot.timestamp.to_string(),
    };

    let rows = [
        ("COORDINATOR", snapshot.coordinator_address.to_string()),
        ("HASH", snapshot.hash.to_string()),
        ("SNAPSHOT_INDEX", snapshot.snapshot_index.to_string()),
        ("PRUNING_INDEX", snapshot.pruning_index.to_string()),
        ("TIMESTAMP", timestamp),
        (
            "SPENT_ADDRESSES",
            snapshot.is_spent_addresses_enabled().to_string(),
        ),
        ("METADATA", format!("0b{:08b}", snapshot.metadata.bits())),
    ];

    rows.iter()
        .map(|(name, value)| format!("{:<16} {}\n", name, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgersnap_core::{Hash, MilestoneIndex};

    fn sample() -> SnapshotInfo {
        SnapshotInfo::new(
            Hash::parse("A".repeat(81)).unwrap(),
            Hash::parse("B".repeat(81)).unwrap(),
            MilestoneIndex(100),
            MilestoneIndex(50),
            1_600_000_000,
            true,
        )
    }

    #[test]
    fn summary_lists_every_field() {
        let summary = format_summary(&sample());
        assert_eq!(summary.lines().count(), 7);
        assert!(summary.contains("SNAPSHOT_INDEX   100"));
        assert!(summary.contains("1600000000 (2020-09-13T12:26:40Z)"));
        assert!(summary.contains("METADATA         0b00000001"));
    }

    #[test]
    fn json_is_parseable() {
        let json = format_json(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["snapshot_index"], 100);
    }
}
