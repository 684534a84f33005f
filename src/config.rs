// config.rs: Compile-time configuration constants for the block codec.
//
// Everything here is a plain `const`; the codec keeps no runtime
// configuration state, so concurrent calls never observe each other.
// The `lz4b` binary layers environment and flag overrides on top of the
// defaults (see `cli::args`).

/// Largest block (compressed input or decoded output) the codec accepts by
/// default.  Matches the reference `LZ4_MAX_INPUT_SIZE` (2 113 929 216 bytes).
pub const MAX_BLOCK_SIZE: usize = 0x7E00_0000;

/// Log2 of the number of `u32` slots in the match-finder hash table.
///
/// 12 bits → 4096 slots → 16 KiB, the reference default
/// (`LZ4_MEMORY_USAGE = 14`).
pub const HASH_LOG: u32 = 12;

/// Default acceleration factor (1 = probe every position).
pub const ACCELERATION_DEFAULT: u32 = 1;

/// Largest accepted acceleration factor; larger values are clamped.
pub const ACCELERATION_MAX: u32 = 65_537;

/// Environment variable read by `lz4b` for a default acceleration factor.
/// Mirrors the reference CLI's `LZ4_CLEVEL` override.
pub const ACCELERATION_ENV: &str = "LZ4B_ACCELERATION";

/// Version byte written in the fixed size header (see [`crate::header`]).
pub const HEADER_VERSION: u8 = 1;

/// Clamp an acceleration factor into `ACCELERATION_DEFAULT..=ACCELERATION_MAX`.
#[inline]
pub fn clamp_acceleration(acceleration: u32) -> u32 {
    acceleration.clamp(ACCELERATION_DEFAULT, ACCELERATION_MAX)
}
