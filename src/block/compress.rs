//! LZ4 block compression.
//!
//! A greedy single-pass encoder: probe positions through a `MatchFinder`,
//! extend each hit backwards over pending literals and forwards as far as the
//! parsing restrictions allow, emit one sequence per match, and close the
//! block with a literal-only sequence.
//!
//! | Function            | Output                         | Fails when                    |
//! |---------------------|--------------------------------|-------------------------------|
//! | [`compress`]        | new `Vec<u8>`                  | never                         |
//! | [`compress_fast`]   | new `Vec<u8>`, faster search   | never                         |
//! | [`compress_into`]   | caller's `&mut [u8]`           | buffer too small, input too large |
//!
//! Parsing restrictions (see the LZ4 block format description):
//! - no match starts within the last [`MFLIMIT`] bytes;
//! - the last [`LASTLITERALS`] bytes are always literals;
//! - inputs shorter than [`MIN_LENGTH`] are a single literal run.

use core::convert::Infallible;

use super::match_finder::MatchFinder;
use super::sink::{Sink, SliceSink};
use super::token::{Match, Sequence};
use super::types::{LASTLITERALS, MFLIMIT, MIN_LENGTH, SKIP_TRIGGER};
use crate::config::{clamp_acceleration, ACCELERATION_DEFAULT, MAX_BLOCK_SIZE};
use crate::error::CompressError;

/// Worst-case compressed size for an input of `input_len` bytes.
///
/// Equivalent to `LZ4_COMPRESSBOUND`.  [`compress_into`] never fails with
/// [`CompressError::OutputTooSmall`] on a buffer at least this large.
#[inline]
pub const fn compress_bound(input_len: usize) -> usize {
    input_len + input_len / 255 + 16
}

/// Compress `input` into a new LZ4 block with the default acceleration.
///
/// Empty input yields `[0x00]`.
pub fn compress(input: &[u8]) -> Vec<u8> {
    compress_fast(input, ACCELERATION_DEFAULT)
}

/// Compress `input` with a given acceleration factor.
///
/// `acceleration` is clamped to `1..=ACCELERATION_MAX`.  Larger values probe
/// fewer positions: faster, usually larger output.  The block format is the
/// same for every value.
pub fn compress_fast(input: &[u8], acceleration: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity(compress_bound(input.len()));
    let result: Result<(), Infallible> =
        compress_block(input, clamp_acceleration(acceleration), &mut out);
    if let Err(never) = result {
        match never {}
    }
    log::trace!(
        "compressed {} bytes into {} (acceleration {})",
        input.len(),
        out.len(),
        acceleration
    );
    out
}

/// Compress `input` into `dst`, returning the number of bytes written.
///
/// Capacity is checked before each sequence is written.  On error the
/// contents of `dst` are unspecified.
///
/// # Errors
/// - [`CompressError::InputTooLarge`] if `input` exceeds [`MAX_BLOCK_SIZE`].
/// - [`CompressError::OutputTooSmall`] if `dst` cannot hold the block.
pub fn compress_into(input: &[u8], dst: &mut [u8]) -> Result<usize, CompressError> {
    if input.len() > MAX_BLOCK_SIZE {
        return Err(CompressError::InputTooLarge {
            size: input.len(),
            max: MAX_BLOCK_SIZE,
        });
    }
    let mut sink = SliceSink::new(dst);
    compress_block(input, ACCELERATION_DEFAULT, &mut sink)?;
    log::trace!("compressed {} bytes into {}", input.len(), sink.written());
    Ok(sink.written())
}

/// Core encoder shared by every entry point.
///
/// `acceleration` must already be clamped.
pub(crate) fn compress_block<S: Sink>(
    input: &[u8],
    acceleration: u32,
    sink: &mut S,
) -> Result<(), S::Error> {
    let len = input.len();
    let mut anchor = 0usize;

    'search: {
        if len < MIN_LENGTH {
            break 'search;
        }

        // Last position at which a match may still start, plus one.
        let mflimit_plus_one = len - MFLIMIT + 1;
        // Matches never extend into the trailing literals.
        let match_limit = len - LASTLITERALS;

        let mut finder = MatchFinder::new(input);
        finder.insert(0);
        let mut ip = 1usize;

        loop {
            // ── Find a match ─────────────────────────────────────────────
            let mut forward = ip;
            let mut step = 1usize;
            let mut search_nb = acceleration << SKIP_TRIGGER;
            let candidate = loop {
                ip = forward;
                forward += step;
                step = (search_nb >> SKIP_TRIGGER) as usize;
                search_nb += 1;

                if forward > mflimit_plus_one {
                    break 'search;
                }
                if let Some(candidate) = finder.find(ip) {
                    break candidate;
                }
            };

            // ── Catch up over pending literals ───────────────────────────
            let mut start = ip;
            let mut reference = candidate;
            while start > anchor && reference > 0 && input[start - 1] == input[reference - 1] {
                start -= 1;
                reference -= 1;
            }
            let mut length = (ip - start) + finder.match_length(candidate, ip, match_limit);

            // ── Emit, then test the position right after the match ───────
            loop {
                Sequence {
                    literals: &input[anchor..start],
                    matched: Some(Match {
                        offset: (start - reference) as u16,
                        length,
                    }),
                }
                .write_to(sink)?;

                ip = start + length;
                anchor = ip;
                if ip >= mflimit_plus_one {
                    break 'search;
                }

                finder.insert(ip - 2);
                match finder.find(ip) {
                    Some(next) => {
                        start = ip;
                        reference = next;
                        length = finder.match_length(next, ip, match_limit);
                    }
                    None => {
                        ip += 1;
                        break;
                    }
                }
            }
        }
    }

    Sequence {
        literals: &input[anchor..],
        matched: None,
    }
    .write_to(sink)
}
