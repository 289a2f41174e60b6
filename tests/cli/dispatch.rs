// End-to-end tests for the `multical` binary: exit codes, collected error
// listings on stderr, help/version short-circuits, and dispatch through the
// reporting pipeline.
//
// All tests spawn the compiled binary; Cargo sets `CARGO_BIN_EXE_multical`
// to its path when running `cargo test`.

use std::path::PathBuf;
use std::process::{Command, Output};

/// Path to the compiled `multical` binary under test.
fn multical_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_multical"))
}

fn run(args: &[&str]) -> Output {
    Command::new(multical_bin())
        .args(args)
        .output()
        .expect("spawn multical")
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ─────────────────────────────────────────────────────────────────────────────
// Help / version short-circuits
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("usage:"), "{err}");
    assert!(err.contains("calibrate"), "{err}");
}

#[test]
fn help_flag_exits_zero() {
    let output = run(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).contains("usage:"));
}

#[test]
fn version_flag_prints_name_and_version() {
    let output = run(&["--version"]);
    assert_eq!(output.status.code(), Some(0));
    let out = String::from_utf8_lossy(&output.stdout).into_owned();
    assert!(out.starts_with("multical v"), "{out}");
}

#[test]
fn per_command_help_lists_schema_flags() {
    let output = run(&["calibrate", "--help"]);
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("--inputs.image_path"), "{err}");
    assert!(err.contains("--camera.distortion_model"), "{err}");
    assert!(err.contains("required"), "{err}");
    assert!(err.contains("default: standard"), "{err}");
}

// ─────────────────────────────────────────────────────────────────────────────
// Successful dispatch
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn minimal_calibrate_invocation_succeeds() {
    let output = run(&["calibrate", "--inputs.image_path", "/data/session1"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert!(stderr(&output).contains("calibrate: images from /data/session1"));
}

#[test]
fn vis_invocation_succeeds() {
    let output = run(&["vis", "--workspace_file", "calibration.pkl"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
}

#[test]
fn boards_invocation_succeeds() {
    let output = run(&["boards", "--boards", "charuco.yaml", "--show"]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
}

#[test]
fn debug_log_level_dumps_resolved_tree() {
    let output = run(&[
        "calibrate",
        "--inputs.image_path",
        "/data",
        "--runtime.log_level",
        "DEBUG",
    ]);
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("\"distortion_model\""), "{err}");
    assert!(err.contains("\"standard\""), "{err}");
}

#[test]
fn warn_log_level_silences_the_info_line() {
    let output = run(&[
        "calibrate",
        "--inputs.image_path",
        "/data",
        "--runtime.log_level",
        "WARN",
    ]);
    assert_eq!(output.status.code(), Some(0));
    assert!(!stderr(&output).contains("calibrate: images"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Validation failures
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_command_lists_known_variants() {
    let output = run(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("unknown command 'frobnicate'"), "{err}");
    for name in ["calibrate", "intrinsic", "boards", "vis"] {
        assert!(err.contains(name), "missing {name}: {err}");
    }
}

#[test]
fn missing_required_field_is_named_on_stderr() {
    let output = run(&["boards"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("boards: missing required value"));
}

#[test]
fn all_validation_errors_are_listed_together() {
    let output = run(&[
        "calibrate",
        "--inputs.image_path",
        "/data",
        "--camera.distortion_model",
        "fisheye",
        "--optimizer.iter",
        "0",
    ]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("invalid choice 'fisheye'"), "{err}");
    assert!(err.contains("out of range"), "{err}");
}

#[test]
fn stray_positional_argument_is_rejected() {
    let output = run(&["calibrate", "/data/session1"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("unrecognized argument '/data/session1'"));
}
