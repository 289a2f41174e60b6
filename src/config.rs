// config.rs — Default values and enumerated choice sets for the option schema.
//
// Every literal that appears in a field default or a choice constraint is
// named here so the schema definitions in `schema::groups` and
// `schema::command` stay free of magic values, and so help text and tests
// can reference the same constants.

// ── Output defaults ───────────────────────────────────────────────────────────

/// Default basename for exported calibration files (`calibration.json` etc.).
pub const DEFAULT_OUTPUT_NAME: &str = "calibration";

// ── Camera model ──────────────────────────────────────────────────────────────

/// Supported lens distortion models.
pub const DISTORTION_MODELS: &[&str] = &["standard", "rational", "thin_prism", "tilted"];
pub const DEFAULT_DISTORTION_MODEL: &str = "standard";

/// Default cap on the number of images used for intrinsic initialisation.
pub const DEFAULT_LIMIT_INTRINSIC: i64 = 50;

// ── Runtime ───────────────────────────────────────────────────────────────────

/// Accepted minimum log levels, coarsest filtering last.
pub const LOG_LEVELS: &[&str] = &["INFO", "DEBUG", "WARN"];
pub const DEFAULT_LOG_LEVEL: &str = "INFO";

// ── Parameter toggles ─────────────────────────────────────────────────────────

/// Camera motion models usable during bundle adjustment.
pub const MOTION_MODELS: &[&str] = &["rolling", "static"];
pub const DEFAULT_MOTION_MODEL: &str = "static";

// ── Optimizer ─────────────────────────────────────────────────────────────────

/// Loss functions accepted by the bundle adjustment backend.
pub const LOSS_FUNCTIONS: &[&str] = &["linear", "soft_l1l", "huber", "arctan"];
pub const DEFAULT_LOSS: &str = "linear";

/// Default number of bundle adjustment / outlier rejection rounds.
pub const DEFAULT_ITER: i64 = 3;

/// Default outlier threshold, as a factor of the upper quartile of
/// reprojection error.
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 5.0;

// ── Board generation ──────────────────────────────────────────────────────────

/// Default pattern resolution when rendering board images.
pub const DEFAULT_PIXELS_MM: i64 = 1;

/// Default border width when rendering board images.
pub const DEFAULT_MARGIN_MM: i64 = 20;
