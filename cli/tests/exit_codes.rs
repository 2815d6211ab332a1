//! Exit paths of the built binary that never need a live display.
//!
//! `DISPLAY` is set to an unparseable value: any run that got as far as
//! opening the display would exit with 2 instead of the code asserted here.

use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_xcolorpick");
const NO_DISPLAY: &str = ":not-a-display";

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env("DISPLAY", NO_DISPLAY)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run xcolorpick")
}

#[test]
fn test_help_exits_zero_on_stderr() {
    for flag in ["-h", "--help"] {
        let out = run(&[flag]);
        assert_eq!(out.status.code(), Some(0));
        assert!(out.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("Usage"), "{stderr}");
    }
}

#[test]
fn test_version_exits_zero() {
    for flag in ["-v", "--version"] {
        let out = run(&[flag]);
        assert_eq!(out.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.contains(env!("CARGO_PKG_VERSION")), "{stdout}");
    }
}

#[test]
fn test_format_without_template_is_usage_error() {
    for args in [&["--format"][..], &["-f"][..]] {
        let out = run(args);
        assert_eq!(out.status.code(), Some(1));
        assert!(out.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.contains("TEMPLATE"), "{stderr}");
        assert!(stderr.contains("Usage"), "{stderr}");
    }
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let out = run(&["--bogus"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_bad_template_is_usage_error() {
    let out = run(&["-f", "%d %d %d %d"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

#[test]
fn test_conflicting_formats_are_usage_error() {
    let out = run(&["--rgb", "--qhex"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_missing_display_is_fatal() {
    let out = run(&["--rgb"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.starts_with("xcolorpick: error: cannot open display"),
        "{stderr}"
    );
}
