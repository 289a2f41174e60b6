//! Resolution-time error model.
//!
//! Every error produced while turning raw input into a resolved
//! configuration is one of the [`ResolveError`] kinds.  Field-level errors
//! never short-circuit their siblings: the resolution engine gathers them
//! into a [`ResolveReport`] and returns the full set to the caller, which is
//! responsible for presentation.  Only `UnknownCommand` aborts early, since
//! no field schema exists without a known command.
//!
//! Failures coming back from the execution contract are not represented
//! here; they propagate as `anyhow::Error` unmodified.

use std::fmt;

use thiserror::Error;

use crate::schema::value::{Choices, FieldKind};

// ── Error kinds ───────────────────────────────────────────────────────────────

/// A single resolution failure, tied to a fully-qualified field path where
/// one exists.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    /// The command discriminator matched none of the known commands.
    #[error("unknown command '{given}' (commands: {known})")]
    UnknownCommand { given: String, known: Choices },

    /// A required field was not supplied and has no default.
    #[error("{path}: missing required value")]
    MissingRequired { path: String },

    /// A supplied value could not be coerced to the field's semantic type.
    #[error("{path}: expected {expected}, got '{given}'")]
    TypeMismatch {
        path: String,
        expected: FieldKind,
        given: String,
    },

    /// A supplied value is not a member of the field's enumerated set.
    #[error("{path}: invalid choice '{given}' (choose from {allowed})")]
    InvalidChoice {
        path: String,
        given: String,
        allowed: Choices,
    },

    /// A numeric value violates the field's documented range.
    #[error("{path}: value {given} out of range ({constraint})")]
    OutOfRange {
        path: String,
        given: String,
        constraint: String,
    },

    /// An argument matched no field of the selected command.
    #[error("unrecognized argument '{given}'")]
    UnknownFlag { given: String },

    /// A non-boolean flag appeared with no attached value.
    #[error("{path}: option requires a value")]
    MissingValue { path: String },
}

impl ResolveError {
    /// The field path this error refers to, when it has one.
    pub fn path(&self) -> Option<&str> {
        match self {
            ResolveError::MissingRequired { path }
            | ResolveError::TypeMismatch { path, .. }
            | ResolveError::InvalidChoice { path, .. }
            | ResolveError::OutOfRange { path, .. }
            | ResolveError::MissingValue { path } => Some(path),
            ResolveError::UnknownCommand { .. } | ResolveError::UnknownFlag { .. } => None,
        }
    }
}

// ── Collected report ──────────────────────────────────────────────────────────

/// The full, ordered set of errors from one resolution attempt.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolveReport {
    errors: Vec<ResolveError>,
}

impl ResolveReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ResolveError) {
        self.errors.push(error);
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolveError> {
        self.errors.iter()
    }

    pub fn errors(&self) -> &[ResolveError] {
        &self.errors
    }
}

impl From<ResolveError> for ResolveReport {
    fn from(error: ResolveError) -> Self {
        ResolveReport {
            errors: vec![error],
        }
    }
}

impl From<Vec<ResolveError>> for ResolveReport {
    fn from(errors: Vec<ResolveError>) -> Self {
        ResolveReport { errors }
    }
}

impl fmt::Display for ResolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ResolveReport {}
