//! LZ4 length extension ("varint") codec.
//!
//! Lengths that do not fit in a token nibble (≥ 15) store `n - 15` as a run
//! of `255` bytes terminated by one byte `< 255`:
//!
//! | n    | continuation bytes |
//! |------|--------------------|
//! | 14   | *(none)*           |
//! | 15   | `00`               |
//! | 269  | `FE`               |
//! | 270  | `FF 00`            |
//!
//! Decoding sums bytes while they equal 255, so a malicious stream can
//! describe arbitrarily large lengths; the running total is checked against a
//! caller-supplied ceiling and reported as
//! [`DecodeError::LengthOverflow`](crate::DecodeError::LengthOverflow).

use super::sink::Sink;
use super::types::RUN_MASK;
use crate::config::MAX_BLOCK_SIZE;
use crate::error::DecodeError;

/// Value of a saturated nibble.  Continuation bytes start here.
pub const NIBBLE_MAX: usize = RUN_MASK as usize;

/// Number of continuation bytes needed to encode `n`.
#[inline]
pub fn encoded_len(n: usize) -> usize {
    if n < NIBBLE_MAX {
        0
    } else {
        (n - NIBBLE_MAX) / 255 + 1
    }
}

/// Encode the continuation bytes for length `n`.
///
/// Returns an empty vector when `n` fits in the token nibble.
pub fn encode_length(n: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(n));
    write_length(&mut out, n);
    out
}

/// Append the continuation bytes for `n` to `sink`.
///
/// The caller must already have reserved [`encoded_len`]`(n)` bytes.
#[inline]
pub(crate) fn write_length<S: Sink>(sink: &mut S, n: usize) {
    if n < NIBBLE_MAX {
        return;
    }
    let mut rest = n - NIBBLE_MAX;
    while rest >= 255 {
        sink.push(255);
        rest -= 255;
    }
    sink.push(rest as u8);
}

/// Decode a length whose token nibble was `nibble`, reading continuation
/// bytes from the start of `source`.
///
/// Returns the full length and the number of bytes consumed.  Lengths are
/// capped at [`MAX_BLOCK_SIZE`]; use [`decode_length_with_limit`] for a
/// different ceiling.
pub fn decode_length(nibble: u8, source: &[u8]) -> Result<(usize, usize), DecodeError> {
    decode_length_with_limit(nibble, source, MAX_BLOCK_SIZE)
}

/// [`decode_length`] with an explicit ceiling.
///
/// # Errors
/// - [`DecodeError::TruncatedInput`] if `source` ends before a byte `< 255`.
/// - [`DecodeError::LengthOverflow`] if the length would exceed `limit`.
pub fn decode_length_with_limit(
    nibble: u8,
    source: &[u8],
    limit: usize,
) -> Result<(usize, usize), DecodeError> {
    let mut length = nibble as usize;
    if length < NIBBLE_MAX {
        return Ok((length, 0));
    }

    for (consumed, &byte) in source.iter().enumerate() {
        length = length
            .checked_add(byte as usize)
            .filter(|&total| total <= limit)
            .ok_or(DecodeError::LengthOverflow { limit })?;
        if byte != 255 {
            return Ok((length, consumed + 1));
        }
    }
    Err(DecodeError::TruncatedInput)
}
