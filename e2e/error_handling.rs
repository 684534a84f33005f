//! E2E Test Suite 02: Error Handling & Edge Cases
//!
//! Malformed, truncated and hostile blocks must come back as a typed error,
//! never a panic, and never as partial output.
//!
//! Coverage:
//! - Every strict prefix of valid blocks (size-known and raw decoders)
//! - Offsets of zero and offsets past the start of the output
//! - Length chains that try to exceed the output limit
//! - Output buffers that are too small on both sides of the codec

use lz4block::block::token::SequenceReader;
use lz4block::{
    compress, compress_bound, compress_into, decompress, decompress_into, decompress_to_slice,
    decompress_with_limit, CompressError, DecodeError,
};

fn samples() -> Vec<Vec<u8>> {
    vec![
        b"abcdabcdabcd".to_vec(),
        b"hello hello hello hello hello hello".to_vec(),
        (0..3000u32).map(|i| (i % 61) as u8).collect(),
        vec![0u8; 5000],
    ]
}

// ═════════════════════════════════════════════════════════════════════════════
// Truncation
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_every_prefix_fails_when_size_is_known() {
    for input in samples() {
        let block = compress(&input);
        for cut in 0..block.len() {
            assert_eq!(
                decompress_into(&block[..cut], input.len()),
                Err(DecodeError::TruncatedInput),
                "input len {} cut {cut}",
                input.len()
            );
        }
    }
}

#[test]
fn test_raw_decoder_never_panics_on_prefixes() {
    for input in samples() {
        let block = compress(&input);
        for cut in 0..block.len() {
            if let Ok(out) = decompress(&block[..cut]) {
                // Only a cut after five or more literals of a token with a
                // zero match nibble still reads as a complete block.
                assert!(out.len() < input.len());
                assert_eq!(&input[..out.len()], &out[..]);
            }
        }
    }
}

/// Offsets of every token that follows a match in `block`.
fn tokens_after_matches(block: &[u8]) -> Vec<usize> {
    let mut reader = SequenceReader::new(block, usize::MAX);
    let mut positions = Vec::new();
    while let Some(seq) = reader.next() {
        if seq.expect("valid block").matched.is_some() {
            positions.push(reader.position());
        }
    }
    positions
}

#[test]
fn test_raw_decoder_rejects_cut_after_match() {
    let input = b"abcdabcdabcdabcdXYZWabcdabcdabcdtail!tail!".repeat(5);
    let block = compress(&input);
    let tokens = tokens_after_matches(&block);
    assert!(!tokens.is_empty());
    for token in tokens {
        // Keep the token, drop everything after it.
        assert_eq!(
            decompress(&block[..token + 1]),
            Err(DecodeError::TruncatedInput),
            "cut after token at {token}"
        );
    }
}

#[test]
fn test_short_tail_after_match_is_truncated() {
    // "abcd", copy 8 from 4 back, then a bare zero token.
    let cut = [0x44, b'a', b'b', b'c', b'd', 0x04, 0x00, 0x00];
    assert_eq!(decompress(&cut), Err(DecodeError::TruncatedInput));

    let short = [0x44, b'a', b'b', b'c', b'd', 0x04, 0x00, 0x40, b'w', b'x', b'y', b'z'];
    assert_eq!(decompress(&short), Err(DecodeError::TruncatedInput));

    let full = [0x44, b'a', b'b', b'c', b'd', 0x04, 0x00, 0x50, b'v', b'w', b'x', b'y', b'z'];
    assert_eq!(
        decompress(&full).as_deref(),
        Ok(&b"abcdabcdabcdvwxyz"[..])
    );
}

#[test]
fn test_empty_block() {
    assert_eq!(decompress(&[]), Err(DecodeError::TruncatedInput));
    assert_eq!(decompress_into(&[], 0), Err(DecodeError::TruncatedInput));
}

#[test]
fn test_cut_inside_offset() {
    let block = [0x14, b'a', 0x01];
    assert_eq!(decompress(&block), Err(DecodeError::TruncatedInput));
}

// ═════════════════════════════════════════════════════════════════════════════
// Offsets
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_offset_past_start() {
    let block = [0x20, b'a', b'b', 0x05, 0x00, 0x10, b'c'];
    assert_eq!(
        decompress(&block),
        Err(DecodeError::InvalidOffset {
            offset: 5,
            available: 2
        })
    );
}

#[test]
fn test_zero_offset() {
    let block = [0x20, b'a', b'b', 0x00, 0x00, 0x10, b'c'];
    assert_eq!(
        decompress(&block),
        Err(DecodeError::InvalidOffset {
            offset: 0,
            available: 2
        })
    );
}

#[test]
fn test_corrupted_offset_in_real_block() {
    let input = b"0123456789abcdef".repeat(8);
    let mut block = compress(&input);
    // First sequence: token, 16 literals, then the offset.
    assert_eq!(block[0] >> 4, 15);
    let offset_pos = 1 + 1 + 16;
    block[offset_pos] = 0xFF;
    block[offset_pos + 1] = 0x7F;
    assert!(matches!(
        decompress(&block),
        Err(DecodeError::InvalidOffset { offset: 0x7FFF, available: 16 })
    ));
}

// ═════════════════════════════════════════════════════════════════════════════
// Limits
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_decompression_bomb_is_capped() {
    // 1 literal + a match chain declaring ~25 MB.
    let mut block = vec![0x1F, b'x', 0x01, 0x00];
    block.extend(std::iter::repeat(255u8).take(100_000));
    block.push(0);
    block.extend_from_slice(&[0x50, 1, 2, 3, 4, 5]);
    assert_eq!(
        decompress_with_limit(&block, 1 << 20),
        Err(DecodeError::LengthOverflow { limit: 1 << 20 })
    );
    let mut small = vec![0u8; 4096];
    assert_eq!(
        decompress_to_slice(&block, &mut small),
        Err(DecodeError::LengthOverflow { limit: 4096 })
    );
}

#[test]
fn test_zero_capacity_slice() {
    assert_eq!(decompress_to_slice(&[0x00], &mut []), Ok(0));
    assert_eq!(
        decompress_to_slice(&[0x10, b'a'], &mut []),
        Err(DecodeError::LengthOverflow { limit: 0 })
    );
}

#[test]
fn test_compress_into_small_buffers() {
    let input = b"hello hello hello hello hello hello";
    let need = compress(input).len();
    for cap in 0..need {
        let mut dst = vec![0u8; cap];
        assert!(matches!(
            compress_into(input, &mut dst),
            Err(CompressError::OutputTooSmall { capacity, .. }) if capacity == cap
        ));
    }
    let mut dst = vec![0u8; compress_bound(input.len())];
    assert_eq!(compress_into(input, &mut dst), Ok(need));
}

#[test]
fn test_garbage_never_panics() {
    let mut state = 0x1234_5678u32;
    for _ in 0..2000 {
        let len = (state % 64) as usize;
        let mut buf = Vec::with_capacity(len);
        for _ in 0..len {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            buf.push(state as u8);
        }
        let _ = decompress_with_limit(&buf, 1 << 16);
        let _ = decompress_into(&buf, 100);
        state = state.wrapping_add(1);
    }
}
