//! Output sinks for the block encoder.
//!
//! The encoder writes one sequence at a time and calls [`Sink::reserve`]
//! with the exact size of that sequence before writing any of it.  A growable
//! `Vec<u8>` never refuses; a [`SliceSink`] over caller memory refuses with
//! [`CompressError::OutputTooSmall`] once its capacity would be exceeded.

use core::convert::Infallible;

use crate::error::CompressError;

/// Destination for encoded bytes.
pub(crate) trait Sink {
    /// Error produced when the sink cannot accept more bytes.
    type Error;

    /// Make room for `additional` bytes, or fail without writing anything.
    fn reserve(&mut self, additional: usize) -> Result<(), Self::Error>;

    /// Append one byte.  Only called after a successful `reserve`.
    fn push(&mut self, byte: u8);

    /// Append a run of bytes.  Only called after a successful `reserve`.
    fn extend_from_slice(&mut self, bytes: &[u8]);

    /// Number of bytes written so far.
    fn written(&self) -> usize;
}

impl Sink for Vec<u8> {
    type Error = Infallible;

    #[inline]
    fn reserve(&mut self, additional: usize) -> Result<(), Infallible> {
        Vec::reserve(self, additional);
        Ok(())
    }

    #[inline]
    fn push(&mut self, byte: u8) {
        Vec::push(self, byte);
    }

    #[inline]
    fn extend_from_slice(&mut self, bytes: &[u8]) {
        Vec::extend_from_slice(self, bytes);
    }

    #[inline]
    fn written(&self) -> usize {
        self.len()
    }
}

/// A fixed-capacity cursor over a caller-provided buffer.
///
/// Also serves as the decoder's output window for
/// [`decompress_to_slice`](super::decompress::decompress_to_slice).
pub(crate) struct SliceSink<'a> {
    pub(crate) buf: &'a mut [u8],
    pub(crate) pos: usize,
}

impl<'a> SliceSink<'a> {
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }
}

impl Sink for SliceSink<'_> {
    type Error = CompressError;

    #[inline]
    fn reserve(&mut self, additional: usize) -> Result<(), CompressError> {
        let needed = self.pos.saturating_add(additional);
        if needed > self.buf.len() {
            return Err(CompressError::OutputTooSmall {
                needed,
                capacity: self.buf.len(),
            });
        }
        Ok(())
    }

    #[inline]
    fn push(&mut self, byte: u8) {
        self.buf[self.pos] = byte;
        self.pos += 1;
    }

    #[inline]
    fn extend_from_slice(&mut self, bytes: &[u8]) {
        let end = self.pos + bytes.len();
        self.buf[self.pos..end].copy_from_slice(bytes);
        self.pos = end;
    }

    #[inline]
    fn written(&self) -> usize {
        self.pos
    }
}
