use ledgersnap_core::CodecError;
use ledgersnap_store::StoreError;
use thiserror::Error;

/// Errors surfaced by registry operations.
///
/// Both variants mean the registry could not establish or persist its
/// snapshot state. Callers at the top of the process are expected to stop
/// rather than continue with an unknown or unpersisted snapshot.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The storage backend failed to load or save the record.
    #[error("snapshot storage error: {0}")]
    Store(#[from] StoreError),
    /// The stored record could not be decoded.
    #[error("stored snapshot info is invalid: {0}")]
    Codec(#[from] CodecError),
}
