//! Size-prefixed blocks.
//!
//! A raw LZ4 block does not record how large its decompressed form is.  This
//! module prepends that size so the block can be decoded with an exact-size
//! buffer, in one of two layouts:
//!
//! ```text
//! fixed (8 bytes):  version:u8 = 1 | encoding:u8 | reserved:[u8; 2] = 0 | size:u32 LE
//! varint (1-5):     size as unsigned LEB128, encoding implied Binary
//! ```
//!
//! The two layouts can be told apart: a fixed header always starts with
//! `01 0x 00 00` and is followed by a block, so at least 9 bytes are present.
//! A varint header starting with `01` declares a 1-byte payload, whose whole
//! framed form is 3 bytes long.  See [`is_fixed_header`].

use crate::block::{compress_fast, decompress_into};
use crate::config::{ACCELERATION_DEFAULT, HEADER_VERSION};
use crate::error::HeaderError;

/// Text encoding tag carried in the fixed header.
///
/// The codec treats every payload as bytes; the tag is stored and returned
/// unchanged so callers can restore string types on their side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Encoding {
    Utf8 = 0,
    #[default]
    Binary = 1,
    UsAscii = 2,
}

impl Encoding {
    /// Decode a header tag.
    pub fn from_u8(tag: u8) -> Result<Self, HeaderError> {
        match tag {
            0 => Ok(Encoding::Utf8),
            1 => Ok(Encoding::Binary),
            2 => Ok(Encoding::UsAscii),
            other => Err(HeaderError::UnknownEncoding(other)),
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Encoding {
    type Error = HeaderError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Encoding::from_u8(tag)
    }
}

/// Decompressed size and encoding of one framed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub encoding: Encoding,
    pub size: u32,
}

impl Header {
    /// Length of the fixed layout.
    pub const FIXED_LEN: usize = 8;
    /// Longest LEB128 encoding of a `u32`.
    pub const MAX_VARINT_LEN: usize = 5;

    pub fn new(size: u32, encoding: Encoding) -> Self {
        Self { encoding, size }
    }

    /// Build a header for `input`, failing if its length does not fit `u32`.
    pub fn for_input(input: &[u8], encoding: Encoding) -> Result<Self, HeaderError> {
        let size = u32::try_from(input.len())
            .map_err(|_| HeaderError::SizeTooLarge(input.len() as u64))?;
        Ok(Self::new(size, encoding))
    }

    /// Append the fixed 8-byte layout.
    pub fn write_fixed(&self, out: &mut Vec<u8>) {
        out.push(HEADER_VERSION);
        out.push(self.encoding.as_u8());
        out.extend_from_slice(&[0, 0]);
        out.extend_from_slice(&self.size.to_le_bytes());
    }

    /// Append the size as LEB128.  The encoding is not stored.
    pub fn write_varint(&self, out: &mut Vec<u8>) {
        let mut rest = self.size;
        while rest >= 0x80 {
            out.push((rest as u8 & 0x7F) | 0x80);
            rest >>= 7;
        }
        out.push(rest as u8);
    }

    /// Parse a fixed header, returning it and the bytes that follow.
    pub fn parse_fixed(bytes: &[u8]) -> Result<(Self, &[u8]), HeaderError> {
        let Some((head, body)) = bytes.split_first_chunk::<8>() else {
            return Err(HeaderError::Truncated);
        };
        if head[0] != HEADER_VERSION {
            return Err(HeaderError::UnsupportedVersion(head[0]));
        }
        let encoding = Encoding::from_u8(head[1])?;
        // head[2..4] is reserved and ignored on read.
        let size = u32::from_le_bytes([head[4], head[5], head[6], head[7]]);
        Ok((Self::new(size, encoding), body))
    }

    /// Parse a LEB128 size header, returning it and the bytes that follow.
    pub fn parse_varint(bytes: &[u8]) -> Result<(Self, &[u8]), HeaderError> {
        let mut size = 0u64;
        for (i, &byte) in bytes.iter().take(Self::MAX_VARINT_LEN).enumerate() {
            size |= u64::from(byte & 0x7F) << (7 * i);
            if byte & 0x80 == 0 {
                let size =
                    u32::try_from(size).map_err(|_| HeaderError::SizeTooLarge(size))?;
                return Ok((Self::new(size, Encoding::Binary), &bytes[i + 1..]));
            }
        }
        if bytes.len() < Self::MAX_VARINT_LEN {
            Err(HeaderError::Truncated)
        } else {
            Err(HeaderError::SizeTooLarge(size))
        }
    }
}

/// Whether `bytes` starts with a fixed header rather than a varint one.
pub fn is_fixed_header(bytes: &[u8]) -> bool {
    matches!(
        bytes,
        [HEADER_VERSION, encoding, 0, 0, _, _, _, _, ..] if *encoding <= Encoding::UsAscii as u8
    )
}

/// Which of the two header layouts to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Fixed,
    Varint,
}

fn frame(header: Header, input: &[u8], layout: Layout, acceleration: u32) -> Vec<u8> {
    let block = compress_fast(input, acceleration);
    let mut out = Vec::with_capacity(Header::FIXED_LEN + block.len());
    match layout {
        Layout::Fixed => header.write_fixed(&mut out),
        Layout::Varint => header.write_varint(&mut out),
    }
    out.extend_from_slice(&block);
    log::trace!(
        "framed {} bytes as {} ({:?} header)",
        input.len(),
        out.len(),
        layout
    );
    out
}

/// Compress a binary payload behind either header layout with a given
/// acceleration factor (see [`compress_fast`]).
///
/// # Errors
/// [`HeaderError::SizeTooLarge`] if `input` is longer than `u32::MAX` bytes.
pub fn compress_framed(
    input: &[u8],
    layout: Layout,
    acceleration: u32,
) -> Result<Vec<u8>, HeaderError> {
    let header = Header::for_input(input, Encoding::Binary)?;
    Ok(frame(header, input, layout, acceleration))
}

/// Compress `input` behind a fixed 8-byte header.
///
/// # Errors
/// [`HeaderError::SizeTooLarge`] if `input` is longer than `u32::MAX` bytes.
pub fn compress_with_header(input: &[u8], encoding: Encoding) -> Result<Vec<u8>, HeaderError> {
    let header = Header::for_input(input, encoding)?;
    Ok(frame(header, input, Layout::Fixed, ACCELERATION_DEFAULT))
}

/// Compress `input` behind a LEB128 size header.
///
/// # Errors
/// [`HeaderError::SizeTooLarge`] if `input` is longer than `u32::MAX` bytes.
pub fn compress_varint(input: &[u8]) -> Result<Vec<u8>, HeaderError> {
    compress_framed(input, Layout::Varint, ACCELERATION_DEFAULT)
}

/// Decode a block framed by [`compress_with_header`].
///
/// The declared size must match exactly; a cut-short body is reported as
/// [`HeaderError::Decode`] with [`DecodeError::TruncatedInput`](crate::DecodeError::TruncatedInput).
pub fn decompress_with_header(bytes: &[u8]) -> Result<(Encoding, Vec<u8>), HeaderError> {
    let (header, body) = Header::parse_fixed(bytes)?;
    let out = decompress_into(body, header.size as usize)?;
    Ok((header.encoding, out))
}

/// Decode a block framed by [`compress_varint`].
pub fn decompress_varint(bytes: &[u8]) -> Result<Vec<u8>, HeaderError> {
    let (header, body) = Header::parse_varint(bytes)?;
    Ok(decompress_into(body, header.size as usize)?)
}
