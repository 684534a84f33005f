//! LZ4 block constants, bounds-checked readers, the match hash, and the
//! match-length counter.
//!
//! Everything here operates on borrowed slices; no helper keeps a pointer
//! into caller memory past the call that received it.

use crate::config::HASH_LOG;

// ─────────────────────────────────────────────────────────────────────────────
// Format constants
// Layout follows lz4_Block_format.md from the LZ4 project.
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum match length encoded in an LZ4 block.
pub const MINMATCH: usize = 4;

/// Last N bytes of the input are always emitted as literals.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const LASTLITERALS: usize = 5;

/// A match may not start within the last `MFLIMIT` bytes of the input.
/// See doc/lz4_Block_format.md#parsing-restrictions.
pub const MFLIMIT: usize = 12;

/// Minimum input length that may produce any match at all.
pub const MIN_LENGTH: usize = MFLIMIT + 1;

/// Maximum back-reference distance supported by the LZ4 format.
pub const DISTANCE_MAX: usize = 65_535;

pub const ML_BITS: u32 = 4;
pub const ML_MASK: u32 = (1u32 << ML_BITS) - 1;
pub const RUN_BITS: u32 = 8 - ML_BITS;
pub const RUN_MASK: u32 = (1u32 << RUN_BITS) - 1;

/// Number of `u32` slots in the match-finder hash table.
pub const HASH_SIZE: usize = 1 << HASH_LOG;

/// Higher → faster on incompressible data at the cost of compression ratio.
pub const SKIP_TRIGGER: u32 = 6;

// ─────────────────────────────────────────────────────────────────────────────
// Readers
// ─────────────────────────────────────────────────────────────────────────────

/// Read a little-endian `u32` at `pos`.
///
/// Callers guarantee `pos + 4 <= data.len()`; the slice index panics
/// otherwise, which would be a logic error in the match finder.
#[inline(always)]
pub fn read_u32_le(data: &[u8], pos: usize) -> u32 {
    let bytes: [u8; 4] = [data[pos], data[pos + 1], data[pos + 2], data[pos + 3]];
    u32::from_le_bytes(bytes)
}

/// Read a little-endian `u64` at `pos`, or `None` when fewer than 8 bytes
/// remain.
#[inline(always)]
pub fn read_u64_le(data: &[u8], pos: usize) -> Option<u64> {
    let chunk = data.get(pos..pos.checked_add(8)?)?;
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(chunk);
    Some(u64::from_le_bytes(bytes))
}

/// Read the little-endian 16-bit match offset at `pos`, or `None` if the
/// stream ends first.
#[inline(always)]
pub fn read_u16_le(data: &[u8], pos: usize) -> Option<u16> {
    match data.get(pos..pos.checked_add(2)?)? {
        [lo, hi] => Some(u16::from_le_bytes([*lo, *hi])),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Hash
// ─────────────────────────────────────────────────────────────────────────────

/// 4-byte Knuth-multiplicative hash, keeping the top `HASH_LOG` bits.
///
/// Equivalent to `LZ4_hash4` with a 32-bit table.
#[inline(always)]
pub fn hash4(sequence: u32) -> usize {
    (sequence.wrapping_mul(2_654_435_761u32) >> (32 - HASH_LOG)) as usize
}

// ─────────────────────────────────────────────────────────────────────────────
// Match-length counting
// ─────────────────────────────────────────────────────────────────────────────

/// Count how many bytes match between `data[cur..]` and `data[candidate..]`,
/// never looking at or past `limit`.
///
/// `candidate < cur` and `cur <= limit <= data.len()` are required.  Compares
/// eight bytes at a time and uses `trailing_zeros` on the XOR to locate the
/// first differing byte, like `LZ4_count`.
#[inline]
pub fn common_prefix_len(data: &[u8], candidate: usize, cur: usize, limit: usize) -> usize {
    debug_assert!(candidate < cur && cur <= limit && limit <= data.len());
    let mut n = 0usize;

    while cur + n + 8 <= limit {
        // Both reads are in bounds: candidate + n + 8 < cur + n + 8 <= limit.
        let (Some(a), Some(b)) = (read_u64_le(data, cur + n), read_u64_le(data, candidate + n))
        else {
            break;
        };
        let diff = a ^ b;
        if diff != 0 {
            return n + (diff.trailing_zeros() >> 3) as usize;
        }
        n += 8;
    }

    while cur + n < limit && data[cur + n] == data[candidate + n] {
        n += 1;
    }
    n
}
