// multical — multi-camera calibration front-end: option schema, argument
// resolution, and command dispatch.  The calibration algorithms themselves
// live behind the `program::Pipeline` trait and are not part of this crate.

pub mod cli;
pub mod config;
pub mod error;
pub mod program;
pub mod schema;

// ── Version constants ─────────────────────────────────────────────────────────
pub const MULTICAL_VERSION_MAJOR: u32 = 0;
pub const MULTICAL_VERSION_MINOR: u32 = 1;
pub const MULTICAL_VERSION_RELEASE: u32 = 0;
pub const MULTICAL_VERSION_STRING: &str = "0.1.0";

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    MULTICAL_VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use cli::resolve::{default_snapshot, resolve_command_line, ResolvedConfig};
pub use error::{ResolveError, ResolveReport};
pub use program::{Pipeline, Program};
pub use schema::command::CommandKind;
