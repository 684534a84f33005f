// lz4-block: LZ4 block codec with a size-prefixed container and CLI

pub mod config;
pub mod error;
pub mod block;
pub mod header;
pub mod cli;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 3;
pub const VERSION_RELEASE: u32 = 0;
pub const VERSION_NUMBER: u32 = VERSION_MAJOR * 100 * 100 + VERSION_MINOR * 100 + VERSION_RELEASE;
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version number (`major * 10000 + minor * 100 + release`).
pub fn version_number() -> u32 {
    VERSION_NUMBER
}

/// Returns the library version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use block::{
    compress, compress_bound, compress_fast, compress_into, decompress, decompress_into,
    decompress_to_slice, decompress_with_limit,
};
pub use block::varint::{decode_length, encode_length};
pub use config::MAX_BLOCK_SIZE;
pub use error::{CompressError, DecodeError, HeaderError};
pub use header::{
    compress_framed, compress_varint, compress_with_header, decompress_varint,
    decompress_with_header, Encoding, Layout,
};
