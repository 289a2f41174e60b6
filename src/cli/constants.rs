//! Program identity strings and the shared verbosity state.
//!
//! Verbosity is a crate-level atomic so the `vlog!` macro can be used from
//! any module without threading a handle around.  The resolved
//! `runtime.log_level` field is its single source of truth at runtime.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ──────────────────────────────────────────────────────────────────

pub const PROGRAM_NAME: &str = "multical";
pub const PROGRAM_DESC: &str = "multi camera calibration";

// ── Verbosity ─────────────────────────────────────────────────────────────────
//
// 0 = silent; 1 = warnings and errors; 2 = normal (INFO); 3 = verbose (DEBUG)

pub const VERBOSITY_WARN: u32 = 1;
pub const VERBOSITY_INFO: u32 = 2;
pub const VERBOSITY_DEBUG: u32 = 3;

pub static VERBOSITY: AtomicU32 = AtomicU32::new(VERBOSITY_INFO);

/// Returns the current verbosity.
#[inline]
pub fn verbosity() -> u32 {
    VERBOSITY.load(Ordering::Relaxed)
}

/// Sets the verbosity.
#[inline]
pub fn set_verbosity(level: u32) {
    VERBOSITY.store(level, Ordering::Relaxed);
}

/// Maps a resolved `runtime.log_level` literal to a verbosity.
///
/// Unknown literals leave the verbosity untouched; the choice constraint on
/// the field means they cannot reach here from resolved input.
pub fn set_verbosity_from_level(level: &str) {
    match level {
        "WARN" => set_verbosity(VERBOSITY_WARN),
        "INFO" => set_verbosity(VERBOSITY_INFO),
        "DEBUG" => set_verbosity(VERBOSITY_DEBUG),
        _ => {}
    }
}

/// Conditionally print a line to stderr at or above `level`.
#[macro_export]
macro_rules! vlog {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::verbosity() >= $level {
            eprintln!($($arg)*);
        }
    };
}
