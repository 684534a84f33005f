//! Binary entry point for the `lz4b` command-line tool.
//!
//! # Control flow
//!
//! 1. `clap` parses argv into a [`Cli`].
//! 2. The display level is set from `-v` / `-q`.
//! 3. [`run`] reads the input, frames or unframes it, and writes the output.
//!
//! Exit code is 0 on success and 1 on any error, with the error chain printed
//! to stderr unless `-q` silenced it.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use lz4block::cli::args::{effective_acceleration, resolve_path, Cli, Command};
use lz4block::cli::display::set_display_level;
use lz4block::cli::ops::{compress_payload, decompress_payload, read_input, write_output};

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Compress {
            input,
            output,
            varint,
            fast,
        } => {
            let acceleration = effective_acceleration(fast);
            let data = read_input(resolve_path(input.as_deref()))?;
            let framed = compress_payload(&data, varint, acceleration)?;
            write_output(resolve_path(output.as_deref()), &framed)?;
            lz4block::displaylevel!(
                2,
                "Compressed {} bytes into {} bytes ({:.2}%)\n",
                data.len(),
                framed.len(),
                ratio(framed.len(), data.len())
            );
            lz4block::displaylevel!(
                3,
                "acceleration {}, {} header\n",
                acceleration,
                if varint { "varint" } else { "fixed" }
            );
        }
        Command::Decompress { input, output } => {
            let framed = read_input(resolve_path(input.as_deref()))?;
            let data = decompress_payload(&framed)?;
            write_output(resolve_path(output.as_deref()), &data)?;
            lz4block::displaylevel!(
                2,
                "Decompressed {} bytes into {} bytes\n",
                framed.len(),
                data.len()
            );
        }
    }
    Ok(())
}

fn ratio(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        100.0
    } else {
        compressed as f64 * 100.0 / original as f64
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    set_display_level(cli.display_level());

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            lz4block::displaylevel!(1, "Error: {:#}\n", err);
            ExitCode::from(1)
        }
    }
}
