//! Process-local registry of the current ledger snapshot descriptor.
//!
//! This crate provides:
//! - [`SnapshotRegistry`], a read-mostly cell for the current [`SnapshotInfo`]
//!   that persists every write through a [`SnapshotStore`]
//! - [`RestoreWatermark`], the highest milestone index observed while
//!   replaying a snapshot file
//!
//! The registry is an ordinary value: the process builds one at startup and
//! hands it (usually behind an `Arc`) to whatever needs it. Failures come back
//! as [`RegistryError`]; deciding to abort is left to the caller.
//!
//! [`SnapshotInfo`]: ledgersnap_core::SnapshotInfo
//! [`SnapshotStore`]: ledgersnap_store::SnapshotStore

#![deny(missing_docs)]

/// Error types for registry operations.
pub mod errors;
/// Snapshot registry implementation.
pub mod registry;
/// Restore watermark.
pub mod watermark;

pub use errors::RegistryError;
pub use registry::SnapshotRegistry;
pub use watermark::RestoreWatermark;
