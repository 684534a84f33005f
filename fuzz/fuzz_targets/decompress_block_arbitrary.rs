#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Err results are expected; what we verify is no panics.

    // Growable output, capped at 1 MiB so tiny inputs cannot claim huge output.
    let _ = lz4block::decompress_with_limit(data, 1 << 20);

    // Zero-length and small caller buffers.
    let _ = lz4block::decompress_to_slice(data, &mut []);
    let mut dst = vec![0u8; 4096];
    let _ = lz4block::decompress_to_slice(data, &mut dst);

    // Exact-size decode with a size derived from the input.
    let expected = data.len().saturating_mul(3).min(1 << 16);
    let _ = lz4block::decompress_into(data, expected);
});
