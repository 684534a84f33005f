// Unit tests for src/cli/ops.rs: framing and stream helpers behind lz4b
//
// Verifies:
//   - compress_payload honours --varint and --fast
//   - decompress_payload auto-detects the header layout
//   - read_input / write_output round-trip through real files

use lz4block::cli::ops::{compress_payload, decompress_payload, read_input, write_output};
use lz4block::header::is_fixed_header;
use lz4block::{compress_fast, compress_framed, Layout};
use tempfile::TempDir;

#[test]
fn payload_round_trip_all_modes() {
    let input: Vec<u8> = b"cli payload ".iter().copied().cycle().take(10_000).collect();
    for varint in [false, true] {
        for acceleration in [1, 7, 65_537] {
            let framed = compress_payload(&input, varint, acceleration).expect("small");
            assert_eq!(is_fixed_header(&framed), !varint);
            assert_eq!(decompress_payload(&framed).expect("valid"), input);
        }
    }
}

#[test]
fn payload_body_is_the_accelerated_block() {
    let input: Vec<u8> = b"accelerated ".iter().copied().cycle().take(5_000).collect();
    let framed = compress_payload(&input, false, 7).expect("small");
    assert_eq!(&framed[8..], &compress_fast(&input, 7)[..]);
    assert_eq!(framed, compress_framed(&input, Layout::Fixed, 7).expect("small"));
}

#[test]
fn one_byte_payload_uses_short_varint() {
    let framed = compress_payload(b"!", true, 1).expect("small");
    assert_eq!(framed, vec![0x01, 0x10, b'!']);
    assert_eq!(decompress_payload(&framed).expect("valid"), b"!");
}

#[test]
fn decode_errors_carry_context() {
    let err = decompress_payload(&[1, 1, 0, 0, 4, 0, 0, 0, 0x40, b'a']).expect_err("truncated");
    let msg = format!("{err:#}");
    assert!(msg.contains("cannot decode block"), "{msg}");
    assert!(msg.contains("truncated"), "{msg}");
}

#[test]
fn files_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("data.bin");
    write_output(Some(&path), b"file contents").expect("write");
    assert_eq!(read_input(Some(&path)).expect("read"), b"file contents");
}

#[test]
fn missing_file_names_the_path() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("absent.bin");
    let err = read_input(Some(&path)).expect_err("missing file");
    assert!(format!("{err:#}").contains("absent.bin"));
}
