use ledgersnap_trinary::TrinaryError;
use thiserror::Error;

use crate::milestone::MilestoneIndex;

/// Errors that can occur while decoding or validating a snapshot record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The record is not exactly the fixed record size.
    #[error("invalid snapshot info length {actual} != {expected}")]
    InvalidLength {
        /// Actual byte length.
        actual: usize,
        /// Required byte length.
        expected: usize,
    },
    /// A hash span does not hold a valid packed tryte string.
    #[error("malformed {field}: {source}")]
    MalformedText {
        /// Record field that failed to unpack.
        field: &'static str,
        /// Underlying transform error.
        #[source]
        source: TrinaryError,
    },
    /// Pruning has run past the snapshot it belongs to.
    #[error("pruning index {pruning_index} is ahead of snapshot index {snapshot_index}")]
    PruningAheadOfSnapshot {
        /// Snapshot index of the descriptor.
        snapshot_index: MilestoneIndex,
        /// Pruning index of the descriptor.
        pruning_index: MilestoneIndex,
    },
}
