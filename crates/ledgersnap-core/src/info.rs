use std::fmt;

use chrono::{DateTime, Utc};
use ledgersnap_trinary::{Hash, HASH_BYTES_SIZE};
use serde::{Deserialize, Serialize};

use crate::errors::CodecError;
use crate::metadata::{Metadata, SPENT_ADDRESSES_ENABLED};
use crate::milestone::MilestoneIndex;

/// Encoded snapshot info size in bytes: 115 bytes.
pub const SNAPSHOT_INFO_SIZE: usize = 115;

const COORDINATOR_OFFSET: usize = 0;
const HASH_OFFSET: usize = COORDINATOR_OFFSET + HASH_BYTES_SIZE;
const SNAPSHOT_INDEX_OFFSET: usize = HASH_OFFSET + HASH_BYTES_SIZE;
const PRUNING_INDEX_OFFSET: usize = SNAPSHOT_INDEX_OFFSET + 4;
const TIMESTAMP_OFFSET: usize = PRUNING_INDEX_OFFSET + 4;
const METADATA_OFFSET: usize = TIMESTAMP_OFFSET + 8;

const _: () = assert!(METADATA_OFFSET + 1 == SNAPSHOT_INFO_SIZE);

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Descriptor of the snapshot a node is anchored to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotInfo {
    /// Address of the coordinator that issued the snapshot milestone.
    pub coordinator_address: Hash,
    /// Hash of the snapshot milestone.
    pub hash: Hash,
    /// Index of the snapshot milestone.
    pub snapshot_index: MilestoneIndex,
    /// Index up to which history has been pruned.
    pub pruning_index: MilestoneIndex,
    /// When the snapshot was taken, Unix seconds.
    pub timestamp: i64,
    /// Metadata flags.
    pub metadata: Metadata,
}

impl SnapshotInfo {
    /// Builds a descriptor whose metadata carries only the spent-addresses flag.
    pub fn new(
        coordinator_address: Hash,
        hash: Hash,
        snapshot_index: MilestoneIndex,
        pruning_index: MilestoneIndex,
        timestamp: i64,
        spent_addresses_enabled: bool,
    ) -> Self {
        let mut info = Self {
            coordinator_address,
            hash,
            snapshot_index,
            pruning_index,
            timestamp,
            metadata: Metadata::default(),
        };
        info.set_spent_addresses_enabled(spent_addresses_enabled);
        info
    }

    /// Whether the snapshot was taken with spent-addresses tracking.
    pub fn is_spent_addresses_enabled(&self) -> bool {
        self.metadata.has_flag(SPENT_ADDRESSES_ENABLED)
    }

    /// Sets the spent-addresses flag, leaving reserved bits untouched.
    pub fn set_spent_addresses_enabled(&mut self, enabled: bool) {
        self.metadata.set_flag(SPENT_ADDRESSES_ENABLED, enabled);
    }

    /// Snapshot time as a UTC date, if the timestamp is representable.
    pub fn timestamp_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp, 0)
    }

    /// Snapshot time as `YYYY-MM-DDTHH:MM:SSZ`, or raw seconds when the
    /// timestamp is outside the representable date range.
    pub fn timestamp_display(&self) -> String {
        self.timestamp_utc()
            .map(|at| at.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| self.timestamp.to_string())
    }

    /// Checks that pruning has not run past the snapshot.
    pub fn validate(&self) -> Result<(), CodecError> {
        if self.pruning_index > self.snapshot_index {
            return Err(CodecError::PruningAheadOfSnapshot {
                snapshot_index: self.snapshot_index,
                pruning_index: self.pruning_index,
            });
        }
        Ok(())
    }

    /// Serializes the descriptor into its 115-byte record.
    pub fn to_bytes(&self) -> [u8; SNAPSHOT_INFO_SIZE] {
        let mut bytes = [0u8; SNAPSHOT_INFO_SIZE];
        bytes[COORDINATOR_OFFSET..HASH_OFFSET]
            .copy_from_slice(&self.coordinator_address.to_bytes());
        bytes[HASH_OFFSET..SNAPSHOT_INDEX_OFFSET].copy_from_slice(&self.hash.to_bytes());
        bytes[SNAPSHOT_INDEX_OFFSET..PRUNING_INDEX_OFFSET]
            .copy_from_slice(&self.snapshot_index.to_le_bytes());
        bytes[PRUNING_INDEX_OFFSET..TIMESTAMP_OFFSET]
            .copy_from_slice(&self.pruning_index.to_le_bytes());
        bytes[TIMESTAMP_OFFSET..METADATA_OFFSET].copy_from_slice(&self.timestamp.to_le_bytes());
        bytes[METADATA_OFFSET] = self.metadata.bits();
        bytes
    }

    /// Deserializes a descriptor from a 115-byte record.
    ///
    /// Index ordering is not checked here; see [`SnapshotInfo::validate`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        if bytes.len() != SNAPSHOT_INFO_SIZE {
            return Err(CodecError::InvalidLength {
                actual: bytes.len(),
                expected: SNAPSHOT_INFO_SIZE,
            });
        }

        let coordinator_address = Hash::from_bytes(&bytes[COORDINATOR_OFFSET..HASH_OFFSET])
            .map_err(|source| CodecError::MalformedText {
                field: "coordinator_address",
                source,
            })?;
        let hash = Hash::from_bytes(&bytes[HASH_OFFSET..SNAPSHOT_INDEX_OFFSET]).map_err(
            |source| CodecError::MalformedText {
                field: "hash",
                source,
            },
        )?;

        let snapshot_index = MilestoneIndex::from_le_bytes([
            bytes[SNAPSHOT_INDEX_OFFSET],
            bytes[SNAPSHOT_INDEX_OFFSET + 1],
            bytes[SNAPSHOT_INDEX_OFFSET + 2],
            bytes[SNAPSHOT_INDEX_OFFSET + 3],
        ]);
        let pruning_index = MilestoneIndex::from_le_bytes([
            bytes[PRUNING_INDEX_OFFSET],
            bytes[PRUNING_INDEX_OFFSET + 1],
            bytes[PRUNING_INDEX_OFFSET + 2],
            bytes[PRUNING_INDEX_OFFSET + 3],
        ]);
        let mut timestamp = [0u8; 8];
        timestamp.copy_from_slice(&bytes[TIMESTAMP_OFFSET..METADATA_OFFSET]);

        Ok(Self {
            coordinator_address,
            hash,
            snapshot_index,
            pruning_index,
            timestamp: i64::from_le_bytes(timestamp),
            metadata: Metadata::from_bits(bytes[METADATA_OFFSET]),
        })
    }
}

impl fmt::Display for SnapshotInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coo_addr: {}, pruning_index: {}, snapshot_index: {} ({}), timestamp: {}, \
             spent_addresses_enabled: {}",
            self.coordinator_address,
            self.pruning_index,
            self.snapshot_index,
            self.hash,
            self.timestamp_display(),
            self.is_spent_addresses_enabled()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn new_sets_only_spent_addresses_bit() {
        assert_eq!(sample().metadata.bits(), 0b0000_0001);
        let mut info = sample();
        info.set_spent_addresses_enabled(false);
        assert_eq!(info.metadata.bits(), 0);
    }

    #[test]
    fn spent_addresses_write_keeps_reserved_bits() {
        let mut info = sample();
        info.metadata = Metadata::from_bits(0b1010_0001);
        info.set_spent_addresses_enabled(true);
        assert_eq!(info.metadata.bits(), 0b1010_0001);
        info.set_spent_addresses_enabled(false);
        assert_eq!(info.metadata.bits(), 0b1010_0000);
    }

    #[test]
    fn validate_rejects_pruning_ahead() {
        let mut info = sample();
        assert!(info.validate().is_ok());
        info.pruning_index = MilestoneIndex(101);
        assert_eq!(
            info.validate().unwrap_err(),
            CodecError::PruningAheadOfSnapshot {
                snapshot_index: MilestoneIndex(100),
                pruning_index: MilestoneIndex(101),
            }
        );
    }

    #[test]
    fn display_includes_utc_timestamp() {
        let text = sample().to_string();
        assert!(text.contains("snapshot_index: 100"));
        assert!(text.contains("pruning_index: 50"));
        assert!(text.contains("2020-09-13T12:26:40Z"));
        assert!(text.contains("spent_addresses_enabled: true"));
    }

    #[test]
    fn timestamp_display_falls_back_to_seconds() {
        let mut info = sample();
        assert_eq!(info.timestamp_display(), "2020-09-13T12:26:40Z");
        info.timestamp = 0;
        assert_eq!(info.timestamp_display(), "1970-01-01T00:00:00Z");
        info.timestamp = i64::MAX;
        assert_eq!(info.timestamp_display(), i64::MAX.to_string());
    }

    #[test]
    fn from_bytes_reports_malformed_field() {
        let mut bytes = sample().to_bytes();
        bytes[HASH_OFFSET] = 0x7F;
        match SnapshotInfo::from_bytes(&bytes).unwrap_err() {
            CodecError::MalformedText { field, .. } => assert_eq!(field, "hash"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
