use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::convert::{bytes_to_trytes, trytes_to_bytes};
use crate::errors::TrinaryError;

/// The tryte alphabet, ordered by value `0, 1..=13, -13..=-1`.
pub const TRYTE_ALPHABET: &str = "9ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Number of trytes in a hash or address.
pub const HASH_TRYTES_SIZE: usize = 81;

/// Number of trytes in an address followed by its 9-tryte checksum.
pub const ADDRESS_WITH_CHECKSUM_TRYTES_SIZE: usize = 90;

/// Number of bytes an 81-tryte hash packs into.
pub const HASH_BYTES_SIZE: usize = 49;

fn tryte_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[9A-Z]*$").expect("invalid regex"))
}

fn validate_alphabet(value: &str) -> Result<(), TrinaryError> {
    if tryte_pattern().is_match(value) {
        return Ok(());
    }
    let (position, ch) = value
        .chars()
        .enumerate()
        .find(|(_, c)| !TRYTE_ALPHABET.contains(*c))
        .unwrap_or((0, '\0'));
    Err(TrinaryError::InvalidTryte { position, ch })
}

/// A string of any length over the tryte alphabet.
#[derive(Debug, Clone, PartialEq, Eq, std::hash::Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Trytes(String);

impl Trytes {
    /// Parses a tryte string, rejecting characters outside `9A-Z`.
    pub fn parse(value: impl Into<String>) -> Result<Self, TrinaryError> {
        let s = value.into();
        validate_alphabet(&s)?;
        Ok(Self(s))
    }

    /// Wraps a string already known to be valid trytes.
    pub(crate) fn from_valid(value: String) -> Self {
        debug_assert!(tryte_pattern().is_match(&value));
        Self(value)
    }

    /// Returns the tryte string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of trytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the string is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<String> for Trytes {
    type Error = TrinaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Trytes> for String {
    fn from(value: Trytes) -> Self {
        value.0
    }
}

impl AsRef<str> for Trytes {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Trytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An 81-tryte hash or address.
///
/// Construction always validates, so every `Hash` packs into exactly
/// [`HASH_BYTES_SIZE`] bytes and unpacks back to itself.
#[derive(Debug, Clone, PartialEq, Eq, std::hash::Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hash(Trytes);

impl Hash {
    /// Parses an 81-tryte hash.
    pub fn parse(value: impl Into<String>) -> Result<Self, TrinaryError> {
        let s = value.into();
        validate_alphabet(&s)?;
        if s.len() != HASH_TRYTES_SIZE {
            return Err(TrinaryError::InvalidTryteLength {
                field: "Hash",
                expected: "81",
                actual: s.len(),
            });
        }
        Ok(Self(Trytes::from_valid(s)))
    }

    /// Parses an 81-tryte address, or a 90-tryte address with a trailing
    /// checksum. The checksum is dropped without being verified.
    pub fn parse_address(value: impl Into<String>) -> Result<Self, TrinaryError> {
        let mut s = value.into();
        validate_alphabet(&s)?;
        match s.len() {
            HASH_TRYTES_SIZE => {}
            ADDRESS_WITH_CHECKSUM_TRYTES_SIZE => s.truncate(HASH_TRYTES_SIZE),
            actual => {
                return Err(TrinaryError::InvalidTryteLength {
                    field: "Address",
                    expected: "81 or 90",
                    actual,
                })
            }
        }
        Ok(Self(Trytes::from_valid(s)))
    }

    /// The all-`9` hash.
    pub fn null() -> Self {
        Self(Trytes::from_valid("9".repeat(HASH_TRYTES_SIZE)))
    }

    /// Whether this is the all-`9` hash.
    pub fn is_null(&self) -> bool {
        self.0.as_str().bytes().all(|b| b == b'9')
    }

    /// Packs the hash into its fixed binary width.
    pub fn to_bytes(&self) -> [u8; HASH_BYTES_SIZE] {
        let packed = trytes_to_bytes(&self.0, HASH_TRYTES_SIZE);
        let mut bytes = [0u8; HASH_BYTES_SIZE];
        bytes.copy_from_slice(&packed);
        bytes
    }

    /// Unpacks a hash from exactly [`HASH_BYTES_SIZE`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TrinaryError> {
        bytes_to_trytes(bytes, HASH_TRYTES_SIZE).map(Self)
    }

    /// Returns the tryte string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying trytes.
    pub fn as_trytes(&self) -> &Trytes {
        &self.0
    }
}

impl TryFrom<String> for Hash {
    type Error = TrinaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Hash> for String {
    fn from(value: Hash) -> Self {
        value.0.into()
    }
}

impl AsRef<str> for Hash {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
