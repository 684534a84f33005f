//! E2E Test Suite 01: Block Round-Trip
//!
//! Compress then decompress through every public entry point and check the
//! original bytes come back.
//!
//! Coverage:
//! - Fixed examples: empty, single byte, "abcdabcdabcd", 1 MiB of zeros
//! - All 256 byte values, pseudo-random data, long literal runs
//! - Property tests over arbitrary inputs and acceleration factors

use lz4block::{
    compress, compress_bound, compress_fast, compress_into, decompress, decompress_into,
    decompress_to_slice,
};
use proptest::prelude::*;

fn round_trip(input: &[u8]) {
    let block = compress(input);
    assert!(block.len() <= compress_bound(input.len()));
    assert_eq!(decompress(&block).expect("decompress"), input);
    assert_eq!(
        decompress_into(&block, input.len()).expect("decompress_into"),
        input
    );
}

/// xorshift64 bytes; reproducible without pulling in an RNG crate.
fn noise(len: usize, mut seed: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(len + 8);
    while out.len() < len {
        seed ^= seed << 13;
        seed ^= seed >> 7;
        seed ^= seed << 17;
        out.extend_from_slice(&seed.to_le_bytes());
    }
    out.truncate(len);
    out
}

// ═════════════════════════════════════════════════════════════════════════════
// Fixed examples
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_empty_input() {
    assert_eq!(compress(b""), vec![0x00]);
    assert_eq!(decompress(&[0x00]).expect("valid"), Vec::<u8>::new());
    round_trip(b"");
}

#[test]
fn test_single_byte() {
    assert_eq!(compress(b"A"), vec![0x10, b'A']);
    round_trip(b"A");
}

#[test]
fn test_abcd_repeated() {
    round_trip(b"abcdabcdabcd");
}

#[test]
fn test_one_mebibyte_of_zeros() {
    let input = vec![0u8; 1 << 20];
    let block = compress(&input);
    assert!(
        block.len() < 8 * 1024,
        "1 MiB of zeros compressed to {} bytes",
        block.len()
    );
    assert_eq!(decompress(&block).expect("valid"), input);
}

#[test]
fn test_all_byte_values() {
    let input: Vec<u8> = (0..=255u8).collect();
    round_trip(&input);
    let repeated: Vec<u8> = (0..=255u8).cycle().take(256 * 40).collect();
    round_trip(&repeated);
}

#[test]
fn test_incompressible_noise() {
    for len in [13usize, 100, 4096, 100_000] {
        round_trip(&noise(len, 0xDEAD_BEEF ^ len as u64));
    }
}

#[test]
fn test_long_literal_run_then_repeat() {
    // 70 000 bytes of noise push matches out of the 64 KiB window.
    let mut input = noise(70_000, 42);
    let head = input[..1000].to_vec();
    let tail = input[69_000..70_000].to_vec();
    input.extend_from_slice(&head);
    input.extend_from_slice(&tail);
    round_trip(&input);
}

#[test]
fn test_slice_variants_agree() {
    let input = noise(5000, 7).repeat(3);
    let mut dst = vec![0u8; compress_bound(input.len())];
    let n = compress_into(&input, &mut dst).expect("bound-sized buffer");
    assert_eq!(&dst[..n], compress(&input).as_slice());

    let mut out = vec![0u8; input.len()];
    assert_eq!(decompress_to_slice(&dst[..n], &mut out), Ok(input.len()));
    assert_eq!(out, input);
}

// ═════════════════════════════════════════════════════════════════════════════
// Properties
// ═════════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_round_trip(input in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let block = compress(&input);
        prop_assert!(block.len() <= compress_bound(input.len()));
        prop_assert_eq!(decompress(&block).expect("valid"), input);
    }

    #[test]
    fn prop_round_trip_low_entropy(
        input in proptest::collection::vec(0u8..4, 0..8192),
        acceleration in 1u32..100,
    ) {
        let block = compress_fast(&input, acceleration);
        prop_assert_eq!(decompress_into(&block, input.len()).expect("valid"), input);
    }
}
