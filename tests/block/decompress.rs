// Unit tests for src/block/decompress.rs: block decompression API
//
// Verifies:
//   - decompress / decompress_with_limit / decompress_into / decompress_to_slice
//     agree on valid input
//   - Error kinds for truncated input, bad offsets and oversized output
//   - Overlapping copies for every small offset

use lz4block::{
    compress, decompress, decompress_into, decompress_to_slice, decompress_with_limit,
    DecodeError, MAX_BLOCK_SIZE,
};

#[test]
fn all_variants_agree() {
    let input: Vec<u8> = (0..20_000u32).map(|i| (i * 7 % 13) as u8).collect();
    let block = compress(&input);

    assert_eq!(decompress(&block).expect("valid"), input);
    assert_eq!(
        decompress_with_limit(&block, input.len()).expect("valid"),
        input
    );
    assert_eq!(decompress_into(&block, input.len()).expect("valid"), input);

    let mut dst = vec![0u8; input.len() + 10];
    let n = decompress_to_slice(&block, &mut dst).expect("valid");
    assert_eq!(&dst[..n], &input[..]);
}

#[test]
fn limit_one_short_overflows() {
    let input = vec![1u8; 1000];
    let block = compress(&input);
    assert_eq!(
        decompress_with_limit(&block, 999),
        Err(DecodeError::LengthOverflow { limit: 999 })
    );
    let mut dst = vec![0u8; 999];
    assert_eq!(
        decompress_to_slice(&block, &mut dst),
        Err(DecodeError::LengthOverflow { limit: 999 })
    );
}

#[test]
fn overlapping_offsets_replicate_period() {
    for offset in 1u8..=8 {
        // `offset` literal bytes, then a 40-byte match at that offset, then 5
        // literal bytes.
        let mut block = vec![(offset << 4) | 0x0F];
        block.extend(1..=offset);
        block.extend_from_slice(&[offset, 0, 40 - 19]);
        block.extend_from_slice(&[0x50, b'e', b'n', b'd', b'!', b'!']);

        let out = decompress(&block).expect("valid");
        assert_eq!(out.len(), offset as usize + 40 + 5);
        for (i, &b) in out[..offset as usize + 40].iter().enumerate() {
            assert_eq!(b, (i % offset as usize) as u8 + 1, "offset {offset} byte {i}");
        }
        assert_eq!(&out[out.len() - 5..], b"end!!");
    }
}

#[test]
fn offset_equal_to_output_is_allowed() {
    let block = [0x30, b'x', b'y', b'z', 0x03, 0x00, 0x50, b'.', b'.', b'.', b'.', b'.'];
    assert_eq!(decompress(&block).expect("valid"), b"xyzxyzx.....");
}

#[test]
fn offset_beyond_output_is_rejected() {
    let block = [0x30, b'x', b'y', b'z', 0x04, 0x00, 0x10, b'.'];
    assert_eq!(
        decompress(&block),
        Err(DecodeError::InvalidOffset {
            offset: 4,
            available: 3
        })
    );
}

#[test]
fn match_before_any_literal_is_rejected() {
    let block = [0x00, 0x01, 0x00, 0x00];
    assert_eq!(
        decompress(&block),
        Err(DecodeError::InvalidOffset {
            offset: 1,
            available: 0
        })
    );
}

#[test]
fn endless_length_chain_is_bounded() {
    let mut block = vec![0xF0];
    block.extend(std::iter::repeat(255u8).take(100_000));
    assert_eq!(decompress(&block), Err(DecodeError::TruncatedInput));

    let mut capped = vec![0xF0];
    capped.extend(std::iter::repeat(255u8).take(100));
    capped.push(0);
    assert_eq!(
        decompress_with_limit(&capped, 1000),
        Err(DecodeError::LengthOverflow { limit: 1000 })
    );
}

#[test]
fn default_limit_is_max_block_size() {
    // One literal, then a match whose length chain passes the default cap
    // before anything is copied.
    let mut block = vec![0x1F, b'a', 0x01, 0x00];
    let runs = MAX_BLOCK_SIZE / 255 + 1;
    block.extend(std::iter::repeat(255u8).take(runs));
    block.push(0);
    assert_eq!(
        decompress(&block),
        Err(DecodeError::LengthOverflow {
            limit: MAX_BLOCK_SIZE
        })
    );
}

#[test]
fn exact_size_mismatch() {
    let block = compress(b"exactly this many bytes");
    assert_eq!(decompress_into(&block, 23).expect("valid"), b"exactly this many bytes");
    assert_eq!(decompress_into(&block, 24), Err(DecodeError::TruncatedInput));
    assert_eq!(
        decompress_into(&block, 22),
        Err(DecodeError::LengthOverflow { limit: 22 })
    );
}
