//! Command-line arguments for `lz4b`.
//!
//! Parsing is done by `clap`; this module adds the environment default for the
//! acceleration factor and resolves `-` / missing paths to the standard
//! streams.

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};

use crate::cli::display::{display_level, level_from_flags};
use crate::config::{clamp_acceleration, ACCELERATION_DEFAULT, ACCELERATION_ENV};

/// Path spelling for stdin / stdout.
pub const STDIO_MARK: &str = "-";

#[derive(Debug, Parser)]
#[command(name = "lz4b")]
#[command(about = "Compress and decompress single LZ4 blocks with a size header")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compress INPUT into one size-prefixed LZ4 block
    Compress {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,

        /// Output file, `-` or omitted for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the compact LEB128 size header instead of the 8-byte header
        #[arg(long)]
        varint: bool,

        /// Acceleration factor (overrides $LZ4B_ACCELERATION)
        #[arg(long, value_name = "N")]
        fast: Option<u32>,
    },

    /// Decompress a block written by `lz4b compress`
    Decompress {
        /// Input file, `-` or omitted for stdin
        input: Option<PathBuf>,

        /// Output file, `-` or omitted for stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    /// Display level implied by `-v` / `-q`.
    pub fn display_level(&self) -> u32 {
        level_from_flags(self.verbose, self.quiet)
    }
}

/// `None` when `path` names a standard stream.
pub fn resolve_path(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| p.as_os_str() != STDIO_MARK)
}

/// Read the default acceleration from [`ACCELERATION_ENV`].
pub fn init_acceleration() -> u32 {
    init_acceleration_from(std::env::var(ACCELERATION_ENV).ok().as_deref())
}

/// Testable core of [`init_acceleration`].
///
/// Unset or unparsable values fall back to [`ACCELERATION_DEFAULT`], with a
/// warning for the latter.
pub fn init_acceleration_from(env_val: Option<&str>) -> u32 {
    let Some(env) = env_val else {
        return ACCELERATION_DEFAULT;
    };
    match env.trim().parse::<u32>() {
        Ok(val) => clamp_acceleration(val),
        Err(_) => {
            if display_level() >= 2 {
                eprintln!(
                    "Ignore environment variable setting {}={}: not a valid unsigned value ",
                    ACCELERATION_ENV, env
                );
            }
            ACCELERATION_DEFAULT
        }
    }
}

/// Acceleration for a compress run: `--fast` wins over the environment.
pub fn effective_acceleration(fast: Option<u32>) -> u32 {
    fast.map(clamp_acceleration).unwrap_or_else(init_acceleration)
}
