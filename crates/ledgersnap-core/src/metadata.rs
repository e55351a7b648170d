use serde::{Deserialize, Serialize};

/// Bit index of the "spent-addresses tracking enabled" flag.
pub const SPENT_ADDRESSES_ENABLED: u8 = 0;

/// Number of addressable flag bits.
const FLAG_BITS: u8 = 8;

/// Snapshot metadata flags, one byte on the wire.
///
/// Only bit [`SPENT_ADDRESSES_ENABLED`] is assigned. The remaining bits are
/// reserved and carried through encode/decode untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(u8);

impl Metadata {
    /// Wraps a raw flag byte.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Returns the raw flag byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether `bit` is set. Indices past the byte are never set.
    pub fn has_flag(self, bit: u8) -> bool {
        bit < FLAG_BITS && self.0 & (1 << bit) != 0
    }

    /// Returns a copy with `bit` set to `value`; every other bit is unchanged.
    pub fn with_flag(self, bit: u8, value: bool) -> Self {
        if bit >= FLAG_BITS || self.has_flag(bit) == value {
            return self;
        }
        Self(self.0 ^ (1 << bit))
    }

    /// Sets `bit` to `value` in place.
    pub fn set_flag(&mut self, bit: u8, value: bool) {
        *self = self.with_flag(bit, value);
    }
}

impl From<u8> for Metadata {
    fn from(bits: u8) -> Self {
        Self(bits)
    }
}
