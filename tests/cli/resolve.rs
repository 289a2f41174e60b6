// Integration tests for the argument resolution engine: documented
// defaults, collect-all error gathering, choice validation, and command
// selection, all through the public `resolve_command_line` surface.

use multical::error::ResolveError;
use multical::resolve_command_line;
use multical::schema::value::Value;

fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Documented defaults
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn calibrate_with_only_image_path_resolves_documented_defaults() {
    let config = resolve_command_line(
        "calibrate",
        &argv(&["--inputs.image_path", "/data/session1"]),
    )
    .expect("minimal calibrate invocation should resolve");

    assert_eq!(config.get_str("inputs.image_path"), Some("/data/session1"));
    assert_eq!(config.get_str("camera.distortion_model"), Some("standard"));
    assert_eq!(config.get_int("optimizer.iter"), Some(3));
    assert_eq!(config.get_bool("runtime.no_cache"), Some(false));

    assert_eq!(config.get_str("outputs.name"), Some("calibration"));
    assert_eq!(config.get_float("optimizer.outlier_threshold"), Some(5.0));
    assert_eq!(config.get_str("optimizer.loss"), Some("linear"));
    assert_eq!(config.get_int("camera.limit_intrinsic"), Some(50));
    assert_eq!(config.get_str("parameters.motion_model"), Some("static"));
    assert_eq!(config.get_str("runtime.log_level"), Some("INFO"));
    assert_eq!(config.get_bool("vis"), Some(false));

    // Optionals without a concrete default resolve to none, not an error.
    assert_eq!(config.get("inputs.boards"), Some(&Value::None));
    assert_eq!(config.get("outputs.master"), Some(&Value::None));
    assert_eq!(config.get("optimizer.auto_scale"), Some(&Value::None));

    // Empty list default, freshly owned.
    assert_eq!(config.get_list("inputs.cameras"), Some(&[][..]));

    // Dynamic default: computed from the host, so only its domain is fixed.
    assert!(config.get_int("runtime.num_threads").unwrap() >= 1);
}

#[test]
fn static_defaults_are_deterministic_across_resolutions() {
    let args = argv(&["--inputs.image_path", "/data"]);
    let first = resolve_command_line("calibrate", &args).unwrap();
    let second = resolve_command_line("calibrate", &args).unwrap();
    for (path, value) in first.iter() {
        if path == "runtime.num_threads" {
            continue; // dynamic, legitimately environment-dependent
        }
        assert_eq!(second.get(path), Some(value), "{path} drifted");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Required fields
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_input_reports_exactly_the_required_paths() {
    for (command, required) in [
        ("calibrate", "inputs.image_path"),
        ("intrinsic", "inputs.image_path"),
        ("boards", "boards"),
        ("vis", "workspace_file"),
    ] {
        let report = resolve_command_line(command, &[]).unwrap_err();
        assert_eq!(
            report.errors(),
            &[ResolveError::MissingRequired {
                path: required.into()
            }],
            "{command}"
        );
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Choice constraints
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn choice_member_is_echoed_unchanged() {
    let config = resolve_command_line(
        "calibrate",
        &argv(&[
            "--inputs.image_path",
            "/data",
            "--camera.distortion_model",
            "rational",
            "--optimizer.loss=huber",
        ]),
    )
    .unwrap();
    assert_eq!(config.get_str("camera.distortion_model"), Some("rational"));
    assert_eq!(config.get_str("optimizer.loss"), Some("huber"));
}

#[test]
fn choice_violation_names_path_and_full_allowed_set() {
    let report = resolve_command_line(
        "calibrate",
        &argv(&[
            "--inputs.image_path",
            "/data",
            "--camera.distortion_model",
            "fisheye",
        ]),
    )
    .unwrap_err();
    assert_eq!(report.len(), 1);
    match &report.errors()[0] {
        ResolveError::InvalidChoice {
            path,
            given,
            allowed,
        } => {
            assert_eq!(path, "camera.distortion_model");
            assert_eq!(given, "fisheye");
            assert_eq!(
                allowed.as_slice(),
                &["standard", "rational", "thin_prism", "tilted"]
            );
        }
        other => panic!("expected InvalidChoice, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Collect-all policy
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn two_invalid_fields_are_both_reported() {
    let report = resolve_command_line(
        "calibrate",
        &argv(&[
            "--inputs.image_path",
            "/data",
            "--camera.distortion_model",
            "fisheye",
            "--optimizer.iter",
            "0",
        ]),
    )
    .unwrap_err();
    assert_eq!(report.len(), 2);
    assert!(report
        .iter()
        .any(|e| matches!(e, ResolveError::InvalidChoice { path, .. } if path == "camera.distortion_model")));
    assert!(report
        .iter()
        .any(|e| matches!(e, ResolveError::OutOfRange { path, .. } if path == "optimizer.iter")));
}

#[test]
fn tokenizer_and_field_errors_are_reported_together() {
    let report = resolve_command_line(
        "calibrate",
        &argv(&["--no.such_flag", "x", "--optimizer.iter", "zero"]),
    )
    .unwrap_err();
    // Unknown flag, bad integer, and the untouched required field.
    assert_eq!(report.len(), 3);
    assert!(report
        .iter()
        .any(|e| matches!(e, ResolveError::UnknownFlag { given } if given == "--no.such_flag")));
    assert!(report
        .iter()
        .any(|e| matches!(e, ResolveError::TypeMismatch { path, .. } if path == "optimizer.iter")));
    assert!(report
        .iter()
        .any(|e| matches!(e, ResolveError::MissingRequired { path } if path == "inputs.image_path")));
}

// ─────────────────────────────────────────────────────────────────────────────
// Range constraints
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn out_of_range_values_are_rejected() {
    let report = resolve_command_line(
        "calibrate",
        &argv(&[
            "--inputs.image_path",
            "/data",
            "--optimizer.outlier_threshold",
            "-1.0",
        ]),
    )
    .unwrap_err();
    assert_eq!(
        report.errors(),
        &[ResolveError::OutOfRange {
            path: "optimizer.outlier_threshold".into(),
            given: "-1".into(),
            constraint: "must be > 0".into(),
        }]
    );

    let report = resolve_command_line(
        "boards",
        &argv(&["--boards", "boards.yaml", "--pixels_mm", "0"]),
    )
    .unwrap_err();
    assert_eq!(
        report.errors(),
        &[ResolveError::OutOfRange {
            path: "pixels_mm".into(),
            given: "0".into(),
            constraint: "must be >= 1".into(),
        }]
    );
}

#[test]
fn supplied_auto_scale_must_be_positive() {
    let ok = resolve_command_line(
        "calibrate",
        &argv(&["--inputs.image_path", "/data", "--optimizer.auto_scale", "2.5"]),
    )
    .unwrap();
    assert_eq!(ok.get_float("optimizer.auto_scale"), Some(2.5));

    let report = resolve_command_line(
        "calibrate",
        &argv(&["--inputs.image_path", "/data", "--optimizer.auto_scale", "0"]),
    )
    .unwrap_err();
    assert!(matches!(
        report.errors()[0],
        ResolveError::OutOfRange { ref path, .. } if path == "optimizer.auto_scale"
    ));
}

// ─────────────────────────────────────────────────────────────────────────────
// Command selection
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn unknown_command_short_circuits_before_field_evaluation() {
    let report =
        resolve_command_line("frobnicate", &argv(&["--inputs.image_path", "/data"]))
            .unwrap_err();
    // One error only: no field of any sibling variant was touched.
    assert_eq!(report.len(), 1);
    match &report.errors()[0] {
        ResolveError::UnknownCommand { given, known } => {
            assert_eq!(given, "frobnicate");
            assert_eq!(known.as_slice(), &["calibrate", "intrinsic", "boards", "vis"]);
        }
        other => panic!("expected UnknownCommand, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// List fields
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn repeated_camera_flags_form_an_ordered_sequence() {
    let config = resolve_command_line(
        "calibrate",
        &argv(&[
            "--inputs.image_path",
            "/data",
            "--inputs.cameras",
            "cam2",
            "--inputs.cameras",
            "cam0",
            "--inputs.cameras",
            "cam1",
        ]),
    )
    .unwrap();
    assert_eq!(
        config.get_list("inputs.cameras"),
        Some(&["cam2".to_owned(), "cam0".to_owned(), "cam1".to_owned()][..])
    );
}

#[test]
fn sibling_variant_fields_do_not_exist_in_the_resolved_tree() {
    let config =
        resolve_command_line("vis", &argv(&["--workspace_file", "calibration.pkl"])).unwrap();
    assert_eq!(config.len(), 1);
    assert_eq!(config.get_str("workspace_file"), Some("calibration.pkl"));
    assert_eq!(config.get("inputs.image_path"), None);
    assert_eq!(config.get("boards"), None);
}
