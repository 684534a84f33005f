//! LZ4 block decompression.
//!
//! Every entry point parses the block with a [`SequenceReader`] and replays
//! each sequence into an output window.  All reads and writes are bounds
//! checked; malformed input yields a [`DecodeError`], never a panic, and no
//! partially decoded output is ever returned.
//!
//! | Function                  | Output                 | Size policy                        |
//! |---------------------------|------------------------|------------------------------------|
//! | [`decompress`]            | new `Vec<u8>`          | at most [`MAX_BLOCK_SIZE`]         |
//! | [`decompress_with_limit`] | new `Vec<u8>`          | at most `limit`                    |
//! | [`decompress_into`]       | new `Vec<u8>`          | exactly `expected_size`            |
//! | [`decompress_to_slice`]   | caller's `&mut [u8]`   | at most `dst.len()`                |

use super::sink::SliceSink;
use super::token::{Match, SequenceReader};
use crate::config::MAX_BLOCK_SIZE;
use crate::error::DecodeError;

// ─────────────────────────────────────────────────────────────────────────────
// Output windows
// ─────────────────────────────────────────────────────────────────────────────

/// Decoded output so far.  Matches copy from inside it.
trait Window {
    /// Bytes produced so far.
    fn len(&self) -> usize;

    fn push_literals(&mut self, literals: &[u8]);

    /// Copy `length` bytes starting `offset` bytes back.  The caller has
    /// checked `1 <= offset <= len()` and that the result fits.
    fn copy_match(&mut self, offset: usize, length: usize);
}

impl Window for Vec<u8> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push_literals(&mut self, literals: &[u8]) {
        self.extend_from_slice(literals);
    }

    #[inline]
    fn copy_match(&mut self, offset: usize, length: usize) {
        let start = Vec::len(self) - offset;
        if offset >= length {
            self.extend_from_within(start..start + length);
            return;
        }
        // Overlapping match: the source run doubles each pass, and every pass
        // only reads bytes that already exist.
        let mut remaining = length;
        while remaining > 0 {
            let chunk = (Vec::len(self) - start).min(remaining);
            self.extend_from_within(start..start + chunk);
            remaining -= chunk;
        }
    }
}

impl Window for SliceSink<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.pos
    }

    #[inline]
    fn push_literals(&mut self, literals: &[u8]) {
        let end = self.pos + literals.len();
        self.buf[self.pos..end].copy_from_slice(literals);
        self.pos = end;
    }

    #[inline]
    fn copy_match(&mut self, offset: usize, length: usize) {
        let start = self.pos - offset;
        let mut remaining = length;
        while remaining > 0 {
            let chunk = (self.pos - start).min(remaining);
            self.buf.copy_within(start..start + chunk, self.pos);
            self.pos += chunk;
            remaining -= chunk;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Decode loop
// ─────────────────────────────────────────────────────────────────────────────

fn decode_block<W: Window>(input: &[u8], limit: usize, out: &mut W) -> Result<(), DecodeError> {
    let mut reader = SequenceReader::new(input, limit);
    let result = replay(&mut reader, limit, out);
    if let Err(err) = &result {
        log::debug!(
            "block decode failed at input byte {} of {}: {}",
            reader.position(),
            input.len(),
            err
        );
    }
    result
}

fn replay<W: Window>(
    reader: &mut SequenceReader<'_>,
    limit: usize,
    out: &mut W,
) -> Result<(), DecodeError> {
    for sequence in reader {
        let sequence = sequence?;

        if sequence.literals.len() > limit - out.len() {
            return Err(DecodeError::LengthOverflow { limit });
        }
        out.push_literals(sequence.literals);

        let Some(Match { offset, length }) = sequence.matched else {
            continue;
        };
        let offset = offset as usize;
        if offset == 0 || offset > out.len() {
            return Err(DecodeError::InvalidOffset {
                offset,
                available: out.len(),
            });
        }
        if length > limit - out.len() {
            return Err(DecodeError::LengthOverflow { limit });
        }
        out.copy_match(offset, length);
    }
    Ok(())
}

/// Upper bound on what a block of `compressed_len` bytes can expand to.
/// Used only to keep preallocation proportional to the input.
#[inline]
fn expansion_bound(compressed_len: usize) -> usize {
    compressed_len.saturating_mul(255).saturating_add(16)
}

// ─────────────────────────────────────────────────────────────────────────────
// Public API
// ─────────────────────────────────────────────────────────────────────────────

/// Decompress a complete LZ4 block into a new vector.
///
/// Output is capped at [`MAX_BLOCK_SIZE`].
///
/// # Errors
/// - [`DecodeError::TruncatedInput`] if the block ends mid-sequence, including
///   an empty `input`, or ends on fewer than five literals after a match.
/// - [`DecodeError::InvalidOffset`] for a zero offset or one pointing before
///   the start of the output.
/// - [`DecodeError::LengthOverflow`] if the output would exceed the cap.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decompress_with_limit(input, MAX_BLOCK_SIZE)
}

/// [`decompress`] with an explicit maximum output size.
pub fn decompress_with_limit(input: &[u8], limit: usize) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(expansion_bound(input.len()).min(limit));
    decode_block(input, limit, &mut out)?;
    Ok(out)
}

/// Decompress a block whose decompressed size is known in advance.
///
/// The output must be exactly `expected_size` bytes: more is reported as
/// [`DecodeError::LengthOverflow`], fewer as [`DecodeError::TruncatedInput`].
/// Because the size is known, a block cut short anywhere is always detected.
pub fn decompress_into(input: &[u8], expected_size: usize) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(expected_size.min(expansion_bound(input.len())));
    decode_block(input, expected_size, &mut out)?;
    if out.len() != expected_size {
        log::debug!(
            "block decoded to {} bytes, expected {}",
            out.len(),
            expected_size
        );
        return Err(DecodeError::TruncatedInput);
    }
    Ok(out)
}

/// Decompress a block into `dst`, returning the number of bytes written.
///
/// Nothing is allocated.  On error the contents of `dst` are unspecified.
///
/// # Errors
/// As [`decompress`], with [`DecodeError::LengthOverflow`] reported once the
/// output would exceed `dst.len()`.
pub fn decompress_to_slice(input: &[u8], dst: &mut [u8]) -> Result<usize, DecodeError> {
    let limit = dst.len();
    let mut window = SliceSink::new(dst);
    decode_block(input, limit, &mut window)?;
    Ok(window.pos)
}
