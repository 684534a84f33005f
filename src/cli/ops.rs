//! The two operations behind `lz4b compress` and `lz4b decompress`.
//!
//! Payload transforms are pure functions over byte buffers; stream plumbing
//! (`read_input` / `write_output`) is kept separate so tests can drive the
//! transforms directly.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::header::{
    compress_framed, decompress_varint, decompress_with_header, is_fixed_header, Layout,
};

/// Frame `input` as one block with a fixed (or varint) size header.
pub fn compress_payload(input: &[u8], varint: bool, acceleration: u32) -> Result<Vec<u8>> {
    let layout = if varint { Layout::Varint } else { Layout::Fixed };
    compress_framed(input, layout, acceleration).context("input is too large for a single block")
}

/// Decode a framed block, detecting the header layout from its first bytes.
pub fn decompress_payload(framed: &[u8]) -> Result<Vec<u8>> {
    if is_fixed_header(framed) {
        let (_, out) = decompress_with_header(framed).context("cannot decode block")?;
        Ok(out)
    } else {
        decompress_varint(framed).context("cannot decode block")
    }
}

/// Read all of `path`, or stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) => fs::read(p).with_context(|| format!("cannot read {}", p.display())),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("cannot read stdin")?;
            Ok(buf)
        }
    }
}

/// Write `data` to `path`, or stdout when `path` is `None`.
pub fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(p) => fs::write(p, data).with_context(|| format!("cannot write {}", p.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data).context("cannot write stdout")?;
            stdout.flush().context("cannot write stdout")
        }
    }
}
