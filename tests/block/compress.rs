// Unit tests for src/block/compress.rs: block compression API
//
// Verifies:
//   - compress_bound() returns the LZ4_COMPRESSBOUND worst case
//   - compress() / compress_fast() / compress_into() agree and round-trip
//   - compress_into() refuses buffers one byte short of the block
//   - Parsing restrictions: no match in the last 5 bytes, short inputs are literals

use lz4block::block::token::SequenceReader;
use lz4block::{
    compress, compress_bound, compress_fast, compress_into, decompress, CompressError,
};

fn sample_text(len: usize) -> Vec<u8> {
    b"It was the best of times, it was the worst of times, it was the age of wisdom, "
        .iter()
        .copied()
        .cycle()
        .take(len)
        .collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// compress_bound
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn bound_small_values() {
    assert_eq!(compress_bound(0), 16);
    assert_eq!(compress_bound(1), 17);
    assert_eq!(compress_bound(254), 270);
    assert_eq!(compress_bound(255), 272);
}

#[test]
fn bound_covers_incompressible_input() {
    // A byte ramp has no 4-byte repeats within any window.
    let input: Vec<u8> = (0..=255u8).cycle().take(255).collect();
    assert!(compress(&input).len() <= compress_bound(input.len()));
}

// ─────────────────────────────────────────────────────────────────────────────
// compress / compress_fast
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compress_is_deterministic() {
    let input = sample_text(10_000);
    assert_eq!(compress(&input), compress(&input));
}

#[test]
fn text_compresses_and_round_trips() {
    let input = sample_text(100_000);
    let block = compress(&input);
    assert!(block.len() < input.len() / 10);
    assert_eq!(decompress(&block).expect("valid"), input);
}

#[test]
fn acceleration_trades_ratio_for_speed() {
    let input = sample_text(50_000);
    for acc in [1, 2, 8, 64, 65_537] {
        let block = compress_fast(&input, acc);
        assert_eq!(decompress(&block).expect("valid"), input, "acceleration {acc}");
    }
}

#[test]
fn twelve_byte_input_is_all_literals() {
    let input = [b'z'; 12];
    let block = compress(&input);
    assert_eq!(block[0], 0xC0);
    assert_eq!(&block[1..], &input);
}

#[test]
fn thirteen_equal_bytes_produce_a_match() {
    let input = [b'z'; 13];
    let block = compress(&input);
    let seqs: Vec<_> = SequenceReader::new(&block, usize::MAX)
        .collect::<Result<_, _>>()
        .expect("valid");
    assert_eq!(seqs.len(), 2);
    let m = seqs[0].matched.expect("first sequence has a match");
    assert_eq!(m.offset, 1);
    assert_eq!(seqs[0].literals.len() + m.length, 8);
    assert_eq!(seqs[1].literals.len(), 5);
}

#[test]
fn last_five_bytes_are_literals() {
    for len in [13usize, 20, 64, 1000, 70_000] {
        let input = vec![0xAAu8; len];
        let block = compress(&input);
        let last = SequenceReader::new(&block, usize::MAX)
            .last()
            .expect("at least one sequence")
            .expect("valid");
        assert!(last.matched.is_none());
        assert!(last.literals.len() >= 5, "len {len}");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// compress_into
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn compress_into_exact_fit() {
    let input = sample_text(4096);
    let expected = compress(&input);

    let mut dst = vec![0u8; expected.len()];
    assert_eq!(compress_into(&input, &mut dst), Ok(expected.len()));
    assert_eq!(dst, expected);

    let mut short = vec![0u8; expected.len() - 1];
    match compress_into(&input, &mut short) {
        Err(CompressError::OutputTooSmall { needed, capacity }) => {
            assert_eq!(capacity, expected.len() - 1);
            assert!(needed > capacity);
        }
        other => panic!("expected OutputTooSmall, got {other:?}"),
    }
}

#[test]
fn compress_into_empty_input() {
    let mut dst = [0xFFu8; 1];
    assert_eq!(compress_into(&[], &mut dst), Ok(1));
    assert_eq!(dst, [0x00]);

    let mut none: [u8; 0] = [];
    assert_eq!(
        compress_into(&[], &mut none),
        Err(CompressError::OutputTooSmall {
            needed: 1,
            capacity: 0
        })
    );
}
