// Unit tests for src/block/varint.rs: LZ4 length extension codec
//
// Verifies:
//   - encode_length / encoded_len agree and follow the 255-run layout
//   - decode_length consumes exactly the continuation bytes
//   - Truncated chains and oversized totals are rejected

use lz4block::block::varint::{
    decode_length, decode_length_with_limit, encode_length, encoded_len, NIBBLE_MAX,
};
use lz4block::DecodeError;
use proptest::prelude::*;

#[test]
fn nibble_max_is_fifteen() {
    assert_eq!(NIBBLE_MAX, 15);
}

#[test]
fn encode_known_values() {
    assert_eq!(encode_length(0), Vec::<u8>::new());
    assert_eq!(encode_length(14), Vec::<u8>::new());
    assert_eq!(encode_length(15), vec![0]);
    assert_eq!(encode_length(16), vec![1]);
    assert_eq!(encode_length(269), vec![254]);
    assert_eq!(encode_length(270), vec![255, 0]);
    assert_eq!(encode_length(1000), vec![255, 255, 255, 220]);
}

#[test]
fn decode_known_values() {
    assert_eq!(decode_length(0, &[]), Ok((0, 0)));
    assert_eq!(decode_length(14, &[]), Ok((14, 0)));
    assert_eq!(decode_length(15, &[0]), Ok((15, 1)));
    assert_eq!(decode_length(15, &[255, 255, 255, 220]), Ok((1000, 4)));
}

#[test]
fn decode_truncated() {
    assert_eq!(decode_length(15, &[]), Err(DecodeError::TruncatedInput));
    assert_eq!(decode_length(15, &[255]), Err(DecodeError::TruncatedInput));
}

#[test]
fn decode_limit_is_inclusive() {
    assert_eq!(decode_length_with_limit(15, &[5], 20), Ok((20, 1)));
    assert_eq!(
        decode_length_with_limit(15, &[6], 20),
        Err(DecodeError::LengthOverflow { limit: 20 })
    );
}

proptest! {
    #[test]
    fn encoded_len_matches_encoding(n in 0usize..1_000_000) {
        let bytes = encode_length(n);
        prop_assert_eq!(bytes.len(), encoded_len(n));
        if let Some((last, run)) = bytes.split_last() {
            prop_assert!(*last < 255);
            prop_assert!(run.iter().all(|&b| b == 255));
        }
    }

    #[test]
    fn decode_inverts_encode(n in 15usize..1_000_000, tail in proptest::collection::vec(any::<u8>(), 0..4)) {
        let mut bytes = encode_length(n);
        let used = bytes.len();
        bytes.extend_from_slice(&tail);
        prop_assert_eq!(decode_length(15, &bytes), Ok((n, used)));
    }
}
