//! E2E Test Suite 04: Concurrency
//!
//! The codec holds no global state: every call owns its hash table and
//! output buffer.  Running many calls at once on the rayon pool must give
//! byte-identical results to running them one after another.

use lz4block::{
    compress, compress_bound, compress_fast, compress_into, compress_with_header, decompress,
    decompress_into, decompress_with_header, Encoding,
};
use rayon::prelude::*;

fn payload(seed: u32, len: usize) -> Vec<u8> {
    let mut state = seed.wrapping_mul(0x9E37_79B9) | 1;
    (0..len)
        .map(|i| {
            if i % 7 < 3 {
                (i % 23) as u8
            } else {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                (state >> 24) as u8
            }
        })
        .collect()
}

fn payloads() -> Vec<Vec<u8>> {
    (0..64u32)
        .map(|seed| payload(seed, 1000 + seed as usize * 997))
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════════
// Parallel vs sequential
// ═════════════════════════════════════════════════════════════════════════════

#[test]
fn test_parallel_compress_matches_sequential() {
    let inputs = payloads();
    let sequential: Vec<Vec<u8>> = inputs.iter().map(|d| compress(d)).collect();
    let parallel: Vec<Vec<u8>> = inputs.par_iter().map(|d| compress(d)).collect();
    assert_eq!(sequential, parallel);
}

#[test]
fn test_parallel_roundtrip() {
    payloads().par_iter().for_each(|input| {
        let block = compress(input);
        assert_eq!(&decompress(&block).expect("valid block"), input);
        assert_eq!(
            &decompress_into(&block, input.len()).expect("valid block"),
            input
        );
    });
}

#[test]
fn test_parallel_mixed_acceleration() {
    let inputs = payloads();
    let jobs: Vec<(usize, u32)> = (0..inputs.len())
        .flat_map(|i| [1u32, 4, 64].into_iter().map(move |a| (i, a)))
        .collect();

    let results: Vec<Vec<u8>> = jobs
        .par_iter()
        .map(|&(i, accel)| compress_fast(&inputs[i], accel))
        .collect();

    for (&(i, accel), block) in jobs.iter().zip(&results) {
        assert_eq!(block, &compress_fast(&inputs[i], accel));
        assert_eq!(decompress(block).expect("valid block"), inputs[i]);
    }
}

#[test]
fn test_parallel_into_disjoint_buffers() {
    let inputs = payloads();
    let mut buffers: Vec<Vec<u8>> = inputs
        .iter()
        .map(|d| vec![0u8; compress_bound(d.len())])
        .collect();

    let sizes: Vec<usize> = buffers
        .par_iter_mut()
        .zip(inputs.par_iter())
        .map(|(dst, src)| compress_into(src, dst).expect("bound is sufficient"))
        .collect();

    for ((buf, size), input) in buffers.iter().zip(&sizes).zip(&inputs) {
        assert_eq!(&buf[..*size], &compress(input)[..]);
    }
}

#[test]
fn test_parallel_headers() {
    payloads().par_iter().enumerate().for_each(|(i, input)| {
        let encoding = match i % 3 {
            0 => Encoding::Utf8,
            1 => Encoding::Binary,
            _ => Encoding::UsAscii,
        };
        let framed = compress_with_header(input, encoding).expect("fits in a header");
        let (got_encoding, out) = decompress_with_header(&framed).expect("valid frame");
        assert_eq!(got_encoding, encoding);
        assert_eq!(&out, input);
    });
}
