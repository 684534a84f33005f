// Unit tests for src/block/token.rs: sequence parsing and token layout
//
// Verifies:
//   - token_byte packs literal / match nibbles and saturates at 15
//   - SequenceReader walks compressor output back to the original length
//   - SequenceReader stops after the first error

use lz4block::block::token::{token_byte, Match, Sequence, SequenceReader};
use lz4block::{compress, DecodeError};

fn decoded_len(block: &[u8]) -> usize {
    SequenceReader::new(block, usize::MAX)
        .map(|seq| {
            let seq = seq.expect("valid block");
            seq.literals.len() + seq.matched.map_or(0, |m| m.length)
        })
        .sum()
}

#[test]
fn token_saturates_both_nibbles() {
    assert_eq!(token_byte(15, Some(19)), 0xFF);
    assert_eq!(token_byte(1000, Some(1000)), 0xFF);
    assert_eq!(token_byte(14, Some(18)), 0xEE);
    assert_eq!(token_byte(0, Some(4)), 0x00);
}

#[test]
fn encoded_len_of_final_sequence() {
    let seq = Sequence {
        literals: &[1, 2, 3],
        matched: None,
    };
    assert_eq!(seq.encoded_len(), 4);

    let long = [0u8; 15];
    let seq = Sequence {
        literals: &long,
        matched: None,
    };
    assert_eq!(seq.encoded_len(), 1 + 1 + 15);
}

#[test]
fn reader_walks_compressor_output() {
    let input: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8 ^ (i / 700) as u8).collect();
    let block = compress(&input);
    assert_eq!(decoded_len(&block), input.len());
}

#[test]
fn every_match_is_at_least_four_bytes() {
    let input = b"abcabcabcabcabcabcabcabcabcabc-xyzxyzxyzxyzxyzxyzxyz-abcabcabcabc".repeat(20);
    let block = compress(&input);
    let mut matches = 0;
    for seq in SequenceReader::new(&block, usize::MAX) {
        if let Some(Match { offset, length }) = seq.expect("valid block").matched {
            assert!(length >= 4);
            assert!(offset >= 1);
            matches += 1;
        }
    }
    assert!(matches > 0);
}

#[test]
fn reader_reports_position() {
    let block = [0x30, b'a', b'b', b'c'];
    let mut reader = SequenceReader::new(&block, 100);
    let seq = reader.next().expect("one sequence").expect("valid");
    assert_eq!(seq.literals, b"abc");
    assert_eq!(reader.position(), 4);
    assert!(reader.next().is_none());
}

#[test]
fn reader_fuses_after_error() {
    let block = [0xF0];
    let mut reader = SequenceReader::new(&block, 100);
    assert_eq!(reader.next(), Some(Err(DecodeError::TruncatedInput)));
    assert_eq!(reader.next(), None);
}

#[test]
fn reader_applies_limit_to_literal_runs() {
    // 15 + 200 literals declared, limit 100.
    let block = [0xF0, 200];
    let mut reader = SequenceReader::new(&block, 100);
    assert_eq!(
        reader.next(),
        Some(Err(DecodeError::LengthOverflow { limit: 100 }))
    );
}
