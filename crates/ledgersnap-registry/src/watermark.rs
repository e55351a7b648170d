use std::sync::atomic::{AtomicU32, Ordering};

use ledgersnap_core::MilestoneIndex;

/// Highest milestone index seen while restoring from a snapshot file.
///
/// Only ever moves forward and is never persisted.
#[derive(Debug, Default)]
pub struct RestoreWatermark(AtomicU32);

impl RestoreWatermark {
    /// Creates a watermark at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the watermark to `index` if it is higher. Returns whether it moved.
    pub fn advance(&self, index: MilestoneIndex) -> bool {
        self.0.fetch_max(index.0, Ordering::AcqRel) < index.0
    }

    /// Current watermark.
    pub fn get(&self) -> MilestoneIndex {
        MilestoneIndex(self.0.load(Ordering::Acquire))
    }
}
