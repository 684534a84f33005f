//! E2E Test Suite 03: Block Format Interoperability
//!
//! Compatibility is checked in both directions:
//!
//! - Streams laid out by hand the way the reference encoder writes them
//!   decode to the expected bytes.
//! - Our encoder's output is re-parsed by an independent, test-side token
//!   parser that enforces the block format's end-of-block restrictions.
//! - `lz4_flex` decodes every block we write, and we decode every block
//!   `lz4_flex` writes.

use lz4block::{compress, compress_fast, decompress, decompress_into};

// ─────────────────────────────────────────────────────────────────────────────
// Independent token parser
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug)]
struct ParsedToken {
    literals: usize,
    offset: Option<usize>,
    match_len: usize,
}

fn read_len(block: &[u8], pos: &mut usize, nibble: usize) -> usize {
    let mut len = nibble;
    if nibble == 15 {
        loop {
            let b = block[*pos] as usize;
            *pos += 1;
            len += b;
            if b != 255 {
                break;
            }
        }
    }
    len
}

/// Parse a well-formed block; panics on anything malformed.
fn parse(block: &[u8]) -> Vec<ParsedToken> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    loop {
        let token = block[pos] as usize;
        pos += 1;
        let literals = read_len(block, &mut pos, token >> 4);
        pos += literals;
        assert!(pos <= block.len(), "literal run overruns block");
        if pos == block.len() {
            assert_eq!(token & 15, 0, "final token declares a match");
            tokens.push(ParsedToken {
                literals,
                offset: None,
                match_len: 0,
            });
            return tokens;
        }
        let offset = u16::from_le_bytes([block[pos], block[pos + 1]]) as usize;
        pos += 2;
        let match_len = read_len(block, &mut pos, token & 15) + 4;
        tokens.push(ParsedToken {
            literals,
            offset: Some(offset),
            match_len,
        });
    }
}

/// Check the end-of-block restrictions of the LZ4 block format.
fn assert_well_formed(input: &[u8], block: &[u8]) {
    let tokens = parse(block);
    let mut produced = 0usize;
    let last = tokens.len() - 1;
    for (i, t) in tokens.iter().enumerate() {
        produced += t.literals;
        if let Some(offset) = t.offset {
            assert!((1..=produced).contains(&offset), "token {i}: bad offset {offset}");
            assert!(t.match_len >= 4, "token {i}: match shorter than 4");
            assert!(
                produced + 12 <= input.len(),
                "token {i}: match starts within the last 12 bytes"
            );
            produced += t.match_len;
            assert!(
                produced + 5 <= input.len(),
                "token {i}: match reaches into the last 5 bytes"
            );
        } else {
            assert_eq!(i, last);
        }
    }
    assert_eq!(produced, input.len());
    if tokens.len() > 1 {
        assert!(tokens[last].literals >= 5);
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Hand-assembled streams
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_reference_literal_only_block() {
    // 20 literals: nibble 15 + one extension byte of 5.
    let mut block = vec![0xF0, 5];
    block.extend_from_slice(b"twenty literal bytes");
    assert_eq!(decompress(&block).expect("valid"), b"twenty literal bytes");
}

#[test]
fn test_reference_rle_block() {
    // What the reference encoder emits for 32 × 'a':
    // 1 literal, match(offset 1, len 26), 5 trailing literals.
    let block = [0x1F, b'a', 0x01, 0x00, 0x07, 0x50, b'a', b'a', b'a', b'a', b'a'];
    assert_eq!(decompress(&block).expect("valid"), vec![b'a'; 32]);
    assert_eq!(compress(&[b'a'; 32]), block);
}

#[test]
fn test_reference_zero_literal_token() {
    // "abcd" + match(4, 8) + zero-literal match(12, 4) + "tail!"
    let block = [
        0x44, b'a', b'b', b'c', b'd', 0x04, 0x00, // abcd, copy 8 from 4 back
        0x00, 0x0C, 0x00, // no literals, copy 4 from 12 back
        0x50, b't', b'a', b'i', b'l', b'!',
    ];
    assert_eq!(
        decompress(&block).expect("valid"),
        b"abcdabcdabcdabcdtail!"
    );
}

#[test]
fn test_reference_long_match_extension() {
    // match length 4 + 15 + 255 + 255 + 3 = 532
    let block = [0x1F, b'z', 0x01, 0x00, 255, 255, 3, 0x50, b'1', b'2', b'3', b'4', b'5'];
    let out = decompress(&block).expect("valid");
    assert_eq!(out.len(), 1 + 532 + 5);
    assert!(out[..533].iter().all(|&b| b == b'z'));
    assert_eq!(&out[533..], b"12345");
}

#[test]
fn test_reference_max_offset() {
    let mut input: Vec<u8> = (0..65_535u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 24) as u8).collect();
    let head = input[..16].to_vec();
    input.extend_from_slice(&head);
    input.extend_from_slice(b"trailing bytes");

    // literals for the first 65 535 bytes, then a 16-byte match at offset 65 535.
    let mut block = vec![0xFC];
    let mut ext = 65_535 - 15;
    while ext >= 255 {
        block.push(255);
        ext -= 255;
    }
    block.push(ext as u8);
    block.extend_from_slice(&input[..65_535]);
    block.extend_from_slice(&[0xFF, 0xFF]);
    block.extend_from_slice(&[0xE0]);
    block.extend_from_slice(b"trailing bytes");
    assert_eq!(decompress(&block).expect("valid"), input);
}

// ═════════════════════════════════════════════════════════════════════════════
// Our output obeys the format restrictions
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_encoder_respects_end_of_block_rules() {
    let mut inputs: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"x".to_vec(),
        vec![0; 12],
        vec![0; 13],
        vec![0; 17],
        b"abcdabcdabcd".to_vec(),
        b"abcdabcdabcdabcdabcd".to_vec(),
    ];
    for len in [100usize, 1000, 70_000] {
        inputs.push(
            b"pack my box with five dozen liquor jugs "
                .iter()
                .copied()
                .cycle()
                .take(len)
                .collect(),
        );
        inputs.push((0..len).map(|i| (i % 7) as u8).collect());
    }
    for input in &inputs {
        assert_well_formed(input, &compress(input));
        assert_well_formed(input, &compress_fast(input, 9));
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Cross-implementation: lz4_flex
// ═════════════════════════════════════════════════════════════════════════════

fn xorshift_bytes(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        })
        .collect()
}

fn interop_inputs() -> Vec<Vec<u8>> {
    let mut inputs: Vec<Vec<u8>> = vec![
        Vec::new(),
        b"A".to_vec(),
        b"abcdabcdabcd".to_vec(),
        b"abcdabcdabcdabcdXYZWabcdabcdabcdtail!tail!".repeat(5),
        vec![0; 1 << 20],
        (0..=255u8).collect(),
    ];
    for len in [13usize, 100, 4096, 65_535, 65_536, 65_600, 200_000] {
        // Random, low-entropy, and text-like.
        inputs.push(xorshift_bytes(len as u32, len));
        inputs.push(xorshift_bytes(len as u32, len).iter().map(|b| b & 0x03).collect());
        inputs.push(
            b"It was the best of times, it was the worst of times, "
                .iter()
                .copied()
                .cycle()
                .take(len)
                .collect(),
        );
    }
    // Repeats farther apart than the match window.
    let far = xorshift_bytes(7, 70_000);
    inputs.push([far.as_slice(), far.as_slice()].concat());
    inputs
}

#[test]
fn test_lz4_flex_decodes_our_blocks() {
    for input in interop_inputs() {
        for block in [compress(&input), compress_fast(&input, 50)] {
            let out = lz4_flex::block::decompress(&block, input.len())
                .unwrap_or_else(|e| panic!("lz4_flex rejected {} bytes: {e}", input.len()));
            assert_eq!(out, input, "len {}", input.len());
        }
    }
}

#[test]
fn test_we_decode_lz4_flex_blocks() {
    for input in interop_inputs() {
        let block = lz4_flex::block::compress(&input);
        assert_eq!(decompress(&block).expect("valid lz4_flex block"), input);
        assert_eq!(
            decompress_into(&block, input.len()).expect("valid lz4_flex block"),
            input
        );
    }
}
