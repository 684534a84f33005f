// Unit tests for src/cli/args.rs and src/cli/display.rs
//
// Verifies:
//   - clap definitions accept the documented command lines and reject others
//   - -v / -q map onto display levels
//   - LZ4B_ACCELERATION parsing falls back to the default on bad values

use std::path::{Path, PathBuf};

use clap::Parser;
use lz4block::cli::args::{init_acceleration_from, resolve_path, Cli, Command, STDIO_MARK};
use lz4block::cli::display::{level_from_flags, DISPLAY_LEVEL_DEFAULT};
use lz4block::config::{ACCELERATION_DEFAULT, ACCELERATION_MAX};

#[test]
fn compress_defaults() {
    let cli = Cli::try_parse_from(["lz4b", "compress"]).expect("valid args");
    assert_eq!(cli.display_level(), DISPLAY_LEVEL_DEFAULT);
    match cli.command {
        Command::Compress {
            input,
            output,
            varint,
            fast,
        } => {
            assert!(input.is_none());
            assert!(output.is_none());
            assert!(!varint);
            assert!(fast.is_none());
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn long_output_flag() {
    let cli = Cli::try_parse_from(["lz4b", "compress", "--output", "x.lz4b", "in.txt"])
        .expect("valid args");
    match cli.command {
        Command::Compress { input, output, .. } => {
            assert_eq!(input, Some(PathBuf::from("in.txt")));
            assert_eq!(output, Some(PathBuf::from("x.lz4b")));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn rejects_unknown_subcommand_and_bad_fast() {
    assert!(Cli::try_parse_from(["lz4b", "list"]).is_err());
    assert!(Cli::try_parse_from(["lz4b", "compress", "--fast", "quick"]).is_err());
    assert!(Cli::try_parse_from(["lz4b", "decompress", "--varint"]).is_err());
    assert!(Cli::try_parse_from(["lz4b"]).is_err());
}

#[test]
fn quiet_flags_stack() {
    let cli = Cli::try_parse_from(["lz4b", "-qq", "decompress"]).expect("valid args");
    assert_eq!(cli.display_level(), 0);
    assert_eq!(level_from_flags(2, 0), 4);
}

#[test]
fn stdio_mark_resolves_to_none() {
    assert_eq!(resolve_path(Some(Path::new(STDIO_MARK))), None);
    assert_eq!(resolve_path(Some(Path::new("./-"))), Some(Path::new("./-")));
}

#[test]
fn acceleration_env_values() {
    assert_eq!(init_acceleration_from(None), ACCELERATION_DEFAULT);
    assert_eq!(init_acceleration_from(Some("12")), 12);
    assert_eq!(init_acceleration_from(Some("999999999")), ACCELERATION_MAX);
    assert_eq!(init_acceleration_from(Some("-3")), ACCELERATION_DEFAULT);
    assert_eq!(init_acceleration_from(Some("")), ACCELERATION_DEFAULT);
}
