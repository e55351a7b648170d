//! Snapshot descriptor for a pruned ledger and its binary record format.
//!
//! A node anchored to a snapshot keeps one small record describing it: the
//! coordinator that issued the snapshot milestone, the milestone hash, the
//! snapshot and pruning indices, when it was taken, and a metadata bitmask.
//! This crate provides:
//! - [`SnapshotInfo`], the descriptor itself
//! - [`SnapshotInfo::to_bytes`] / [`SnapshotInfo::from_bytes`], the versionless
//!   115-byte encoding that is written to storage
//! - [`Metadata`], the flag byte and its single-bit helpers
//!
//! ## Record layout
//!
//! | Offset | Length | Field |
//! |---|---|---|
//! | 0 | 49 | coordinator address (81 trytes, packed) |
//! | 49 | 49 | milestone hash (81 trytes, packed) |
//! | 98 | 4 | snapshot index (u32 LE) |
//! | 102 | 4 | pruning index (u32 LE) |
//! | 106 | 8 | timestamp, Unix seconds (i64 LE) |
//! | 114 | 1 | metadata flags |
//!
//! ## Quick Start
//!
//! ```rust
//! use ledgersnap_core::{Hash, MilestoneIndex, SnapshotInfo};
//!
//! let info = SnapshotInfo::new(
//!     Hash::parse("A".repeat(81))?,
//!     Hash::parse("B".repeat(81))?,
//!     MilestoneIndex(100),
//!     MilestoneIndex(50),
//!     1_600_000_000,
//!     true,
//! );
//!
//! let bytes = info.to_bytes();
//! assert_eq!(bytes.len(), 115);
//! assert_eq!(SnapshotInfo::from_bytes(&bytes)?, info);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs)]

/// Error types for record decoding and validation.
pub mod errors;
/// Snapshot descriptor and its record encoding.
pub mod info;
/// Metadata flag byte.
pub mod metadata;
/// Milestone index newtype.
pub mod milestone;

pub use errors::CodecError;
pub use info::{SnapshotInfo, SNAPSHOT_INFO_SIZE};
pub use ledgersnap_trinary::{Hash, TrinaryError};
pub use metadata::{Metadata, SPENT_ADDRESSES_ENABLED};
pub use milestone::MilestoneIndex;
