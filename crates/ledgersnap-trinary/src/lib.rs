//! Tryte-alphabet identifiers for ledger hashes and addresses.
//!
//! Ledger identifiers are written in the 27-letter tryte alphabet
//! (`9ABCDEFGHIJKLMNOPQRSTUVWXYZ`). Each tryte holds three balanced trits;
//! for storage, trits are packed five to a byte. An 81-tryte hash is 243
//! trits and therefore occupies exactly [`HASH_BYTES_SIZE`] bytes.
//!
//! This crate provides:
//! - [`Trytes`] and [`Hash`] newtypes validated against the alphabet
//! - [`trytes_to_bytes`] / [`bytes_to_trytes`] for the fixed-width packing
//!
//! Decoding is strict: only byte spans that re-encode to themselves are
//! accepted, so a hash read from storage always writes back byte-for-byte.

#![deny(missing_docs)]

/// Packing between trytes, trits and bytes.
pub mod convert;
/// Error types for tryte validation and conversion.
pub mod errors;
/// Validated tryte string newtypes.
pub mod trytes;

pub use convert::{bytes_to_trytes, packed_len, trytes_to_bytes, TRITS_PER_BYTE, TRITS_PER_TRYTE};
pub use errors::TrinaryError;
pub use trytes::{
    Hash, Trytes, ADDRESS_WITH_CHECKSUM_TRYTES_SIZE, HASH_BYTES_SIZE, HASH_TRYTES_SIZE,
    TRYTE_ALPHABET,
};
