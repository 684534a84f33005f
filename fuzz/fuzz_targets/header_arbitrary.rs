#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Declared sizes up to 4 GiB must not translate into allocations that
    // large; preallocation is bounded by the body length.
    let _ = lz4block::decompress_with_header(data);
    let _ = lz4block::decompress_varint(data);
});
