//! Sequence (token) encoder and decoder.
//!
//! An LZ4 block is a list of sequences:
//!
//! ```text
//! token | [literal length ext] | literals | offset (LE16) | [match length ext]
//! ```
//!
//! The high nibble of the token is the literal length, the low nibble the
//! match length minus [`MINMATCH`].  The final sequence stops after its
//! literals; it has neither offset nor match length.  Once a block holds any
//! match, its final sequence carries at least [`LASTLITERALS`] literals.

use super::sink::Sink;
use super::types::{read_u16_le, LASTLITERALS, MINMATCH, ML_BITS, ML_MASK, RUN_MASK};
use super::varint::{decode_length_with_limit, encoded_len, write_length};
use crate::error::DecodeError;

/// Back-reference carried by a non-final sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Distance back from the current output position; never 0 in a valid
    /// stream.
    pub offset: u16,
    /// Number of bytes to copy, at least [`MINMATCH`].
    pub length: usize,
}

/// One decoded or to-be-encoded sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence<'a> {
    /// Raw bytes copied verbatim into the output.
    pub literals: &'a [u8],
    /// `None` for the final, literal-only sequence.
    pub matched: Option<Match>,
}

/// Build the token byte for a literal run of `literal_len` bytes followed by
/// an optional match of `match_len` bytes.
#[inline]
pub fn token_byte(literal_len: usize, match_len: Option<usize>) -> u8 {
    let run = literal_len.min(RUN_MASK as usize) as u8;
    let ml = match match_len {
        Some(len) => (len - MINMATCH).min(ML_MASK as usize) as u8,
        None => 0,
    };
    (run << ML_BITS) | ml
}

impl<'a> Sequence<'a> {
    /// Exact number of bytes this sequence occupies once encoded.
    pub fn encoded_len(&self) -> usize {
        let mut n = 1 + encoded_len(self.literals.len()) + self.literals.len();
        if let Some(m) = self.matched {
            n += 2 + encoded_len(m.length - MINMATCH);
        }
        n
    }

    /// Append the encoded sequence to `sink`, reserving its full size first.
    pub(crate) fn write_to<S: Sink>(&self, sink: &mut S) -> Result<(), S::Error> {
        debug_assert!(self.matched.map_or(true, |m| m.offset != 0 && m.length >= MINMATCH));

        sink.reserve(self.encoded_len())?;
        sink.push(token_byte(
            self.literals.len(),
            self.matched.map(|m| m.length),
        ));
        write_length(sink, self.literals.len());
        sink.extend_from_slice(self.literals);
        if let Some(m) = self.matched {
            sink.extend_from_slice(&m.offset.to_le_bytes());
            write_length(sink, m.length - MINMATCH);
        }
        Ok(())
    }
}

/// Streaming parser over the sequences of a compressed block.
///
/// Yields `Err` once and then stops if the block is malformed.  Lengths are
/// capped at `limit`, so a crafted block cannot describe a run longer than
/// the output the caller is willing to produce.
///
/// A block that ends on a literal-only sequence shorter than
/// [`LASTLITERALS`] after a match is reported as
/// [`DecodeError::TruncatedInput`]: no conforming encoder writes one.
#[derive(Debug, Clone)]
pub struct SequenceReader<'a> {
    input: &'a [u8],
    pos: usize,
    limit: usize,
    seen_match: bool,
    done: bool,
}

impl<'a> SequenceReader<'a> {
    /// Parse `input`, rejecting any length greater than `limit`.
    pub fn new(input: &'a [u8], limit: usize) -> Self {
        Self {
            input,
            pos: 0,
            limit,
            seen_match: false,
            done: false,
        }
    }

    /// Bytes of `input` consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn read_length(&mut self, nibble: u8) -> Result<usize, DecodeError> {
        let (len, used) = decode_length_with_limit(nibble, &self.input[self.pos..], self.limit)?;
        self.pos += used;
        Ok(len)
    }

    fn read_sequence(&mut self) -> Result<Sequence<'a>, DecodeError> {
        // A block always ends with a literal-only sequence, so running out
        // of input where a token is expected means the block was cut short.
        let token = *self.input.get(self.pos).ok_or(DecodeError::TruncatedInput)?;
        self.pos += 1;

        let literal_len = self.read_length(token >> ML_BITS)?;
        let literal_end = self
            .pos
            .checked_add(literal_len)
            .filter(|&end| end <= self.input.len())
            .ok_or(DecodeError::TruncatedInput)?;
        let literals = &self.input[self.pos..literal_end];
        self.pos = literal_end;

        let ml_nibble = token & ML_MASK as u8;
        if self.pos == self.input.len() {
            // End of block.  A non-zero match nibble announced an offset
            // that never arrived; a short tail after a match is a cut block.
            if ml_nibble != 0 || (self.seen_match && literals.len() < LASTLITERALS) {
                return Err(DecodeError::TruncatedInput);
            }
            self.done = true;
            return Ok(Sequence {
                literals,
                matched: None,
            });
        }

        let offset = read_u16_le(self.input, self.pos).ok_or(DecodeError::TruncatedInput)?;
        self.pos += 2;
        let extra = self.read_length(ml_nibble)?;
        let length = extra
            .checked_add(MINMATCH)
            .filter(|&len| len <= self.limit)
            .ok_or(DecodeError::LengthOverflow { limit: self.limit })?;
        self.seen_match = true;

        Ok(Sequence {
            literals,
            matched: Some(Match { offset, length }),
        })
    }
}

impl<'a> Iterator for SequenceReader<'a> {
    type Item = Result<Sequence<'a>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.read_sequence();
        if item.is_err() {
            self.done = true;
        }
        Some(item)
    }
}
