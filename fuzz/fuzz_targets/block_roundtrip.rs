#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = lz4block::compress(data);
    assert!(compressed.len() <= lz4block::compress_bound(data.len()));

    // The exact size is known, so use the strict decoder.
    let recovered = lz4block::decompress_into(&compressed, data.len())
        .expect("own output must decode");
    assert_eq!(recovered, data, "block round-trip mismatch");

    // Acceleration changes the search, never the format.
    let fast = lz4block::compress_fast(data, 1 + (data.len() as u32 % 17));
    assert_eq!(lz4block::decompress(&fast).expect("own output must decode"), data);
});
