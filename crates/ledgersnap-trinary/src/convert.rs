use crate::errors::TrinaryError;
use crate::trytes::{Trytes, TRYTE_ALPHABET};

/// Balanced trits per tryte.
pub const TRITS_PER_TRYTE: usize = 3;

/// Balanced trits packed into one byte.
pub const TRITS_PER_BYTE: usize = 5;

/// Largest magnitude five balanced trits can express (`(3^5 - 1) / 2`).
const MAX_BYTE_VALUE: i8 = 121;

type Trit = i8;

fn tryte_value(ch: u8) -> i8 {
    // The alphabet position doubles as the value for 0..=13; the upper half
    // wraps to -13..=-1.
    let position = match ch {
        b'9' => 0,
        b'A'..=b'Z' => (ch - b'A' + 1) as i8,
        _ => unreachable!("trytes are validated on construction"),
    };
    if position > 13 {
        position - 27
    } else {
        position
    }
}

fn tryte_char(value: i8) -> char {
    let position = (if value < 0 { value + 27 } else { value }) as usize;
    TRYTE_ALPHABET.as_bytes()[position] as char
}

/// Splits `value` into `count` balanced trits, least significant first.
fn balanced_trits(mut value: i16, count: usize, out: &mut Vec<Trit>) {
    for _ in 0..count {
        let trit = match value.rem_euclid(3) {
            0 => 0,
            1 => 1,
            _ => -1,
        };
        out.push(trit);
        value = (value - trit as i16) / 3;
    }
}

fn trits_value(trits: &[Trit]) -> i16 {
    trits.iter().rev().fold(0i16, |acc, &t| acc * 3 + t as i16)
}

/// Number of bytes needed to pack `trytes` trytes.
pub fn packed_len(trytes: usize) -> usize {
    (trytes * TRITS_PER_TRYTE).div_ceil(TRITS_PER_BYTE)
}

/// Packs trytes into bytes, five trits per byte.
///
/// The input is right-padded with `9` or truncated to `logical_len` trytes
/// first, so the output is always `packed_len(logical_len)` bytes.
pub fn trytes_to_bytes(trytes: &Trytes, logical_len: usize) -> Vec<u8> {
    let mut trits = Vec::with_capacity(logical_len * TRITS_PER_TRYTE);
    let raw = trytes.as_str().as_bytes();
    for i in 0..logical_len {
        let value = raw.get(i).map_or(0, |&ch| tryte_value(ch));
        balanced_trits(value as i16, TRITS_PER_TRYTE, &mut trits);
    }

    trits
        .chunks(TRITS_PER_BYTE)
        .map(|chunk| trits_value(chunk) as i8 as u8)
        .collect()
}

/// Unpacks `logical_len` trytes from a packed byte span.
///
/// The span must be exactly `packed_len(logical_len)` bytes, every byte must
/// lie in `-121..=121`, and the trits beyond the logical length in the final
/// byte must be zero. Together these make the result re-pack to `bytes`.
pub fn bytes_to_trytes(bytes: &[u8], logical_len: usize) -> Result<Trytes, TrinaryError> {
    let expected = packed_len(logical_len);
    if bytes.len() != expected {
        return Err(TrinaryError::InvalidByteLength {
            trytes: logical_len,
            expected,
            actual: bytes.len(),
        });
    }

    let trit_count = logical_len * TRITS_PER_TRYTE;
    let mut trits = Vec::with_capacity(bytes.len() * TRITS_PER_BYTE);
    for (index, &byte) in bytes.iter().enumerate() {
        let value = byte as i8;
        if !(-MAX_BYTE_VALUE..=MAX_BYTE_VALUE).contains(&value) {
            return Err(TrinaryError::InvalidByte { index, value });
        }
        balanced_trits(value as i16, TRITS_PER_BYTE, &mut trits);
    }

    if trits[trit_count..].iter().any(|&t| t != 0) {
        return Err(TrinaryError::NonZeroPadding {
            index: bytes.len() - 1,
        });
    }

    let text: String = trits[..trit_count]
        .chunks(TRITS_PER_TRYTE)
        .map(|chunk| tryte_char(trits_value(chunk) as i8))
        .collect();
    Ok(Trytes::from_valid(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trytes::{HASH_BYTES_SIZE, HASH_TRYTES_SIZE};
    use proptest::prelude::*;

    #[test]
    fn packed_len_for_hash() {
        assert_eq!(packed_len(HASH_TRYTES_SIZE), HASH_BYTES_SIZE);
        assert_eq!(packed_len(0), 0);
        assert_eq!(packed_len(5), 3);
    }

    #[test]
    fn tryte_values_cover_alphabet() {
        assert_eq!(tryte_value(b'9'), 0);
        assert_eq!(tryte_value(b'A'), 1);
        assert_eq!(tryte_value(b'M'), 13);
        assert_eq!(tryte_value(b'N'), -13);
        assert_eq!(tryte_value(b'Z'), -1);
        for ch in TRYTE_ALPHABET.bytes() {
            assert_eq!(tryte_char(tryte_value(ch)) as u8, ch);
        }
    }

    #[test]
    fn single_tryte_packs_known_value() {
        // 'A' = trits [1, 0, 0] => 1; 'M' = 13 => [1, 1, 1]
        let a = Trytes::parse("A").unwrap();
        assert_eq!(trytes_to_bytes(&a, 1), vec![1]);
        let m = Trytes::parse("M").unwrap();
        assert_eq!(trytes_to_bytes(&m, 1), vec![13]);
        let z = Trytes::parse("Z").unwrap();
        assert_eq!(trytes_to_bytes(&z, 1), vec![(-1i8) as u8]);
    }

    #[test]
    fn short_input_is_padded_with_nines() {
        let short = Trytes::parse("A").unwrap();
        let padded = Trytes::parse("A99").unwrap();
        assert_eq!(trytes_to_bytes(&short, 3), trytes_to_bytes(&padded, 3));
    }

    #[test]
    fn long_input_is_truncated() {
        let long = Trytes::parse("ABCDEF").unwrap();
        let cut = Trytes::parse("ABC").unwrap();
        assert_eq!(trytes_to_bytes(&long, 3), trytes_to_bytes(&cut, 3));
    }

    #[test]
    fn rejects_wrong_span_length() {
        let err = bytes_to_trytes(&[0u8; 48], HASH_TRYTES_SIZE).unwrap_err();
        assert_eq!(
            err,
            TrinaryError::InvalidByteLength {
                trytes: 81,
                expected: 49,
                actual: 48
            }
        );
    }

    #[test]
    fn rejects_out_of_range_byte() {
        let mut bytes = [0u8; HASH_BYTES_SIZE];
        bytes[7] = 122;
        assert_eq!(
            bytes_to_trytes(&bytes, HASH_TRYTES_SIZE).unwrap_err(),
            TrinaryError::InvalidByte { index: 7, value: 122 }
        );
        bytes[7] = (-128i8) as u8;
        assert!(bytes_to_trytes(&bytes, HASH_TRYTES_SIZE).is_err());
    }

    #[test]
    fn rejects_non_zero_padding_trits() {
        // The last byte of a hash carries 3 significant trits; 27 sets the 4th.
        let mut bytes = [0u8; HASH_BYTES_SIZE];
        bytes[HASH_BYTES_SIZE - 1] = 27;
        assert_eq!(
            bytes_to_trytes(&bytes, HASH_TRYTES_SIZE).unwrap_err(),
            TrinaryError::NonZeroPadding { index: 48 }
        );
    }

    fn arb_trytes(len: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(0usize..27, len).prop_map(|positions| {
            positions
                .into_iter()
                .map(|p| TRYTE_ALPHABET.as_bytes()[p] as char)
                .collect()
        })
    }

    proptest! {
        #[test]
        fn hash_round_trips_through_bytes(text in arb_trytes(HASH_TRYTES_SIZE)) {
            let trytes = Trytes::parse(text.clone()).unwrap();
            let bytes = trytes_to_bytes(&trytes, HASH_TRYTES_SIZE);
            prop_assert_eq!(bytes.len(), HASH_BYTES_SIZE);
            let restored = bytes_to_trytes(&bytes, HASH_TRYTES_SIZE).unwrap();
            prop_assert_eq!(restored.as_str(), text.as_str());
        }

        #[test]
        fn accepted_spans_repack_identically(
            raw in proptest::collection::vec(any::<u8>(), HASH_BYTES_SIZE)
        ) {
            if let Ok(trytes) = bytes_to_trytes(&raw, HASH_TRYTES_SIZE) {
                prop_assert_eq!(trytes_to_bytes(&trytes, HASH_TRYTES_SIZE), raw);
            }
        }
    }
}
