//! Error types for block compression, block decompression, and the size
//! header.
//!
//! Every decode failure is reported through [`DecodeError`]; the codec never
//! panics on malformed input and never returns partially decoded output.

use thiserror::Error;

/// Errors returned while decoding an LZ4 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The stream ended before a token, length extension, literal run,
    /// or match offset was complete.
    #[error("truncated input: compressed block ended unexpectedly")]
    TruncatedInput,

    /// A back-reference was zero or pointed before the start of the output.
    #[error("invalid match offset {offset} with only {available} bytes decoded")]
    InvalidOffset {
        /// Offset read from the stream.
        offset: usize,
        /// Bytes of output produced when the match was read.
        available: usize,
    },

    /// A decoded length would grow the output past the permitted maximum.
    #[error("decoded length exceeds the limit of {limit} bytes")]
    LengthOverflow {
        /// Maximum output size in effect for the call.
        limit: usize,
    },
}

/// Errors returned by the slice-based compressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CompressError {
    /// The destination buffer cannot hold the compressed block.
    #[error("output buffer too small: need at least {needed} bytes, have {capacity}")]
    OutputTooSmall {
        /// Bytes required to finish the token being written.
        needed: usize,
        /// Capacity of the destination buffer.
        capacity: usize,
    },

    /// The input exceeds the largest representable block.
    #[error("input of {size} bytes exceeds the maximum block size of {max} bytes")]
    InputTooLarge {
        /// Input length.
        size: usize,
        /// Maximum accepted length.
        max: usize,
    },
}

/// Errors returned by the size-prefixed container in [`crate::header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The buffer is shorter than the header it claims to start with.
    #[error("truncated header")]
    Truncated,

    /// The fixed header carries a version this crate does not understand.
    #[error("invalid header version: {0}")]
    UnsupportedVersion(u8),

    /// The fixed header carries an unknown encoding tag.
    #[error("unknown encoding tag: {0}")]
    UnknownEncoding(u8),

    /// The uncompressed size does not fit the header's 32-bit size field.
    #[error("size {0} does not fit in a 32-bit size header")]
    SizeTooLarge(u64),

    /// The block following the header failed to decode.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
