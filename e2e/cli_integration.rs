// e2e/cli_integration.rs: CLI integration tests (Suite 05)
//
// Drives the `lz4b` binary as a black box with std::process::Command.
// Covers both subcommands, the two header layouts, stdio paths, the
// acceleration knobs, exit codes, and the display level.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn lz4b() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_lz4b"));
    cmd.env_remove("LZ4B_ACCELERATION");
    cmd
}

/// Create a TempDir containing a text file with ~4 KB of content.
fn make_temp_input() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    let content = "Hello, LZ4 block!\n".repeat(230);
    fs::write(&input_path, content).unwrap();
    (dir, input_path)
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

fn run_with_stdin(mut cmd: Command, stdin: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lz4b");
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

// ── 1. Compress / decompress roundtrip ───────────────────────────────────────

#[test]
fn test_cli_file_roundtrip() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let compressed = dir.path().join("input.lz4b");
    let restored = dir.path().join("restored.txt");

    let status = lz4b()
        .args(["compress", path_str(&input), "-o", path_str(&compressed)])
        .status()
        .expect("failed to run lz4b compress");
    assert!(status.success(), "compress should exit 0");

    let framed = fs::read(&compressed).unwrap();
    assert!(framed.len() < original.len(), "repetitive input should shrink");
    // Fixed header: version, encoding, two reserved bytes, LE size.
    assert_eq!(&framed[..4], &[1, 1, 0, 0]);
    assert_eq!(
        u32::from_le_bytes(framed[4..8].try_into().unwrap()) as usize,
        original.len()
    );

    let status = lz4b()
        .args(["decompress", path_str(&compressed), "-o", path_str(&restored)])
        .status()
        .expect("failed to run lz4b decompress");
    assert!(status.success(), "decompress should exit 0");
    assert_eq!(fs::read(&restored).unwrap(), original);
}

#[test]
fn test_cli_varint_roundtrip() {
    let (dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let compressed = dir.path().join("input.lz4b");
    let restored = dir.path().join("restored.txt");

    let status = lz4b()
        .args(["compress", "--varint", path_str(&input), "-o", path_str(&compressed)])
        .status()
        .unwrap();
    assert!(status.success());

    let framed = fs::read(&compressed).unwrap();
    let (size, used) = lz4block::header::Header::parse_varint(&framed)
        .map(|(h, body)| (h.size as usize, framed.len() - body.len()))
        .expect("varint header");
    assert_eq!(size, original.len());
    assert_eq!(used, 2, "4140 needs two LEB128 bytes");

    let status = lz4b()
        .args(["decompress", path_str(&compressed), "-o", path_str(&restored)])
        .status()
        .unwrap();
    assert!(status.success(), "decompress auto-detects the varint header");
    assert_eq!(fs::read(&restored).unwrap(), original);
}

// ── 2. Standard streams ──────────────────────────────────────────────────────

#[test]
fn test_cli_stdin_stdout() {
    let payload = b"stream stream stream stream stream stream stream".repeat(20);

    let mut cmd = lz4b();
    cmd.args(["compress", "-"]);
    let compressed = run_with_stdin(cmd, &payload);
    assert!(compressed.status.success());
    assert!(!compressed.stdout.is_empty());

    let mut cmd = lz4b();
    cmd.args(["decompress", "-o", "-"]);
    let restored = run_with_stdin(cmd, &compressed.stdout);
    assert!(restored.status.success());
    assert_eq!(restored.stdout, payload);
}

#[test]
fn test_cli_empty_input() {
    let mut cmd = lz4b();
    cmd.arg("compress");
    let compressed = run_with_stdin(cmd, b"");
    assert!(compressed.status.success());
    assert_eq!(compressed.stdout, [1, 1, 0, 0, 0, 0, 0, 0, 0x00]);

    let mut cmd = lz4b();
    cmd.arg("decompress");
    let restored = run_with_stdin(cmd, &compressed.stdout);
    assert!(restored.status.success());
    assert!(restored.stdout.is_empty());
}

// ── 3. Acceleration ──────────────────────────────────────────────────────────

#[test]
fn test_cli_fast_flag_and_env() {
    let (_dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();
    let expected = lz4block::compress_fast(&original, 9);

    let via_flag = lz4b()
        .args(["compress", "--fast", "9", path_str(&input)])
        .output()
        .unwrap();
    assert!(via_flag.status.success());
    assert_eq!(&via_flag.stdout[8..], &expected[..]);

    let via_env = lz4b()
        .env("LZ4B_ACCELERATION", "9")
        .args(["compress", path_str(&input)])
        .output()
        .unwrap();
    assert!(via_env.status.success());
    assert_eq!(via_env.stdout, via_flag.stdout);

    // --fast wins over the environment.
    let both = lz4b()
        .env("LZ4B_ACCELERATION", "200")
        .args(["compress", "--fast", "9", path_str(&input)])
        .output()
        .unwrap();
    assert_eq!(both.stdout, via_flag.stdout);
}

#[test]
fn test_cli_bad_env_is_ignored() {
    let (_dir, input) = make_temp_input();
    let original = fs::read(&input).unwrap();

    let out = lz4b()
        .env("LZ4B_ACCELERATION", "turbo")
        .args(["compress", path_str(&input)])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert_eq!(&out.stdout[8..], &lz4block::compress(&original)[..]);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("LZ4B_ACCELERATION"), "stderr: {stderr}");
}

// ── 4. Exit codes ────────────────────────────────────────────────────────────

#[test]
fn test_cli_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.txt");
    let out = lz4b()
        .args(["compress", path_str(&missing)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot read"), "stderr: {stderr}");
}

#[test]
fn test_cli_corrupt_input_fails() {
    let (dir, input) = make_temp_input();
    let compressed = dir.path().join("input.lz4b");
    let restored = dir.path().join("restored.txt");
    assert!(lz4b()
        .args(["compress", path_str(&input), "-o", path_str(&compressed)])
        .status()
        .unwrap()
        .success());

    let mut framed = fs::read(&compressed).unwrap();
    framed.truncate(framed.len() - 3);
    fs::write(&compressed, &framed).unwrap();

    let out = lz4b()
        .args(["decompress", path_str(&compressed), "-o", path_str(&restored)])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(!restored.exists(), "no partial output on failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("cannot decode block"), "stderr: {stderr}");
}

#[test]
fn test_cli_unknown_subcommand_fails() {
    let out = lz4b().arg("explode").output().unwrap();
    assert!(!out.status.success());
}

// ── 5. Display level ─────────────────────────────────────────────────────────

#[test]
fn test_cli_quiet_silences_stderr() {
    let (_dir, input) = make_temp_input();
    let out = lz4b()
        .args(["-q", "compress", path_str(&input)])
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty());

    let loud = lz4b()
        .args(["compress", path_str(&input)])
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&loud.stderr).contains("Compressed"));
}

#[test]
fn test_cli_quiet_twice_hides_errors() {
    let out = lz4b()
        .args(["-qq", "decompress", "/nonexistent/lz4b/input"])
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty());
}

#[test]
fn test_cli_version() {
    let out = lz4b().arg("--version").output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains(lz4block::version_string()), "stdout: {stdout}");
}
