//! The reusable option groups.
//!
//! Each group is an ordered, named collection of fields, defined
//! independently and embedded by one or more commands (the `inputs` group,
//! for instance, appears in both `calibrate` and `intrinsic`).  Field names
//! are unique within a group; commands qualify them with the group namespace
//! (`inputs.image_path`) so identically-named fields in different groups
//! never collide.
//!
//! Groups are pure declarative data: the constructors below build fresh
//! definitions, and [`by_name`] is the registry lookup.

use crate::config;
use crate::schema::field::Field;
use crate::schema::value::{Choices, Value};

/// A named, ordered collection of fields sharing one namespace.
#[derive(Debug, Clone)]
pub struct OptionGroup {
    pub name: &'static str,
    pub doc: &'static str,
    pub fields: Vec<Field>,
}

impl OptionGroup {
    /// Looks up a field by its bare (unqualified) name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Names of every defined group, in canonical order.
pub const GROUP_NAMES: &[&str] = &[
    "inputs",
    "outputs",
    "camera",
    "parameters",
    "runtime",
    "optimizer",
];

/// Registry lookup: the group definition for `name`, if one exists.
pub fn by_name(name: &str) -> Option<OptionGroup> {
    match name {
        "inputs" => Some(inputs()),
        "outputs" => Some(outputs()),
        "camera" => Some(camera()),
        "parameters" => Some(parameters()),
        "runtime" => Some(runtime()),
        "optimizer" => Some(optimizer()),
        _ => None,
    }
}

// ── Group definitions ─────────────────────────────────────────────────────────

/// Input files and paths.
pub fn inputs() -> OptionGroup {
    OptionGroup {
        name: "inputs",
        doc: "Input files and paths",
        fields: vec![
            Field::required_str("image_path", "Path to search for image folders"),
            Field::opt_str("boards", "Configuration file (YAML) for calibration boards"),
            Field::opt_str(
                "camera_pattern",
                "Camera path pattern, e.g. \"{camera}/extrinsic\"",
            ),
            Field::list("cameras", "Explicit camera list"),
        ],
    }
}

/// Output path and filename options.
pub fn outputs() -> OptionGroup {
    OptionGroup {
        name: "outputs",
        doc: "Output path and filename options",
        fields: vec![
            Field::str(
                "name",
                config::DEFAULT_OUTPUT_NAME,
                "Filename to save outputs, e.g. calibration.json",
            ),
            Field::opt_str(
                "output_path",
                "Path to save outputs, uses image path if unspecified",
            ),
            Field::opt_str(
                "master",
                "Use camera as master when exporting (default use first camera)",
            ),
        ],
    }
}

/// Camera model settings.
pub fn camera() -> OptionGroup {
    OptionGroup {
        name: "camera",
        doc: "Camera model settings",
        fields: vec![
            Field::flag("fix_aspect", "Fix aspect ratio of cameras"),
            Field::flag("allow_skew", "Allow skew parameter in camera intrinsics"),
            Field::choice(
                "distortion_model",
                Choices(config::DISTORTION_MODELS),
                config::DEFAULT_DISTORTION_MODEL,
                "Lens distortion model",
            ),
            Field::opt_int(
                "limit_intrinsic",
                Some(config::DEFAULT_LIMIT_INTRINSIC),
                "Limit intrinsic images to enable faster initialisation",
            ),
        ],
    }
}

/// Optimization enable/disable toggles.
pub fn parameters() -> OptionGroup {
    OptionGroup {
        name: "parameters",
        doc: "Options for different parameter optimization to enable/disable",
        fields: vec![
            Field::flag("fix_intrinsic", "Constant camera intrinsic parameters"),
            Field::flag(
                "fix_camera_poses",
                "Constant camera pose (extrinsic) parameters",
            ),
            Field::flag("fix_board_poses", "Constant poses between boards"),
            Field::flag("fix_motion", "Constant camera motion estimates"),
            Field::flag("adjust_board", "Enable optimization for board non-planarity"),
            Field::choice(
                "motion_model",
                Choices(config::MOTION_MODELS),
                config::DEFAULT_MOTION_MODEL,
                "Camera motion model to use",
            ),
        ],
    }
}

/// Miscellaneous runtime parameters.
pub fn runtime() -> OptionGroup {
    OptionGroup {
        name: "runtime",
        doc: "Miscellaneous runtime parameters",
        fields: vec![
            Field::dynamic_int(
                "num_threads",
                host_parallelism,
                "Number of cpu threads to use",
            ),
            Field::choice(
                "log_level",
                Choices(config::LOG_LEVELS),
                config::DEFAULT_LOG_LEVEL,
                "Minimum log level",
            ),
            Field::flag("no_cache", "Don't attempt to load detections from cache"),
        ],
    }
}

/// General optimizer settings including outlier rejection.
pub fn optimizer() -> OptionGroup {
    OptionGroup {
        name: "optimizer",
        doc: "General optimizer settings including outlier rejection settings",
        fields: vec![
            Field::int(
                "iter",
                config::DEFAULT_ITER,
                "Iterations of bundle adjustment/outlier rejection",
            )
            .min(1),
            Field::choice(
                "loss",
                Choices(config::LOSS_FUNCTIONS),
                config::DEFAULT_LOSS,
                "Loss function to use in bundle adjustment",
            ),
            Field::float(
                "outlier_threshold",
                config::DEFAULT_OUTLIER_THRESHOLD,
                "Threshold for outliers (factor of upper quartile of reprojection error)",
            )
            .positive(),
            Field::opt_float(
                "auto_scale",
                "Threshold for auto_scale to reduce outlier influence \
                 (factor of upper quartile of reprojection error) - requires non-linear loss",
            )
            .positive(),
        ],
    }
}

// ── Dynamic default providers ─────────────────────────────────────────────────

/// Host parallelism, queried at resolution time so two resolutions in the
/// same process may observe different values if the environment changes.
fn host_parallelism() -> Value {
    Value::Int(num_cpus::get() as i64)
}
