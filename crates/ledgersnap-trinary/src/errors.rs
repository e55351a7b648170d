use thiserror::Error;

/// Errors raised while validating or unpacking trytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrinaryError {
    /// A character outside `9A-Z` was found.
    #[error("invalid tryte {ch:?} at position {position}")]
    InvalidTryte {
        /// Zero-based character position.
        position: usize,
        /// Offending character.
        ch: char,
    },
    /// A tryte string has a length the target type cannot hold.
    #[error("{field} must be {expected} trytes, got {actual}")]
    InvalidTryteLength {
        /// Name of the type being parsed.
        field: &'static str,
        /// Accepted length(s), human readable.
        expected: &'static str,
        /// Actual length.
        actual: usize,
    },
    /// A packed span has the wrong number of bytes for its logical length.
    #[error("expected {expected} bytes for {trytes} trytes, got {actual}")]
    InvalidByteLength {
        /// Logical tryte length requested.
        trytes: usize,
        /// Byte length implied by the logical length.
        expected: usize,
        /// Actual byte length.
        actual: usize,
    },
    /// A byte does not encode five balanced trits.
    #[error("byte {value} at index {index} is outside -121..=121")]
    InvalidByte {
        /// Byte index within the span.
        index: usize,
        /// Byte value read as a signed integer.
        value: i8,
    },
    /// Trits past the logical length are not zero, so the span would not
    /// re-encode to itself.
    #[error("non-zero padding trits in byte {index}")]
    NonZeroPadding {
        /// Byte index within the span.
        index: usize,
    },
}
