//! Pluggable persistence for the encoded snapshot info record.
//!
//! The store treats the record as opaque bytes; decoding belongs to
//! `ledgersnap-core`. This crate provides:
//! - [`SnapshotStore`], the load/save contract the registry depends on
//! - [`FileStore`], a single-record file written by atomic replace
//! - [`MemoryStore`], a shared in-memory cell for tests and embedding
//!
//! `load` distinguishes "nothing stored" (`Ok(None)`) from a failed read.

#![deny(missing_docs)]

/// Error types for store operations.
pub mod error;
/// Single-file backend.
pub mod file;
/// In-memory backend.
pub mod memory;
/// Storage backend trait.
pub mod traits;

pub use error::StoreError;
pub use file::{FileStore, WriteOptions};
pub use memory::MemoryStore;
pub use traits::SnapshotStore;
