//! Command-line interface for the `lz4b` binary.
//!
//! | Submodule   | Responsibility |
//! |-------------|----------------|
//! | [`display`] | Process-wide display level and the `displaylevel!` macro. |
//! | [`args`]    | `clap` definitions, `$LZ4B_ACCELERATION` default, stdio path handling. |
//! | [`ops`]     | Framing / unframing payloads and reading / writing streams. |
//!
//! Typical call sequence: `Cli::parse` → `set_display_level` → `ops::*`.

pub mod display;
pub mod args;
pub mod ops;
