//! Per-field metadata and single-field resolution.
//!
//! A [`Field`] couples a name with a semantic type, a default source, a
//! value constraint, and a one-line description.  [`Field::resolve`] is the
//! whole constraint-and-default model: coerce and validate a supplied raw
//! value, or produce the effective default when nothing was supplied.
//!
//! Invariants, enforced by the constructors:
//! - a required field has no default of any kind;
//! - a non-required field has exactly one default source, static or dynamic;
//! - a choice default is a member of its own choice set.

use crate::error::ResolveError;
use crate::schema::value::{Choices, FieldKind, RawValue, Value};

// ── Default sources ───────────────────────────────────────────────────────────

/// Where a field's value comes from when the input does not supply one.
///
/// `Dynamic` providers are plain function pointers invoked at resolution
/// time, once per field per resolution call, never cached across calls.
/// Fields whose default is an empty list also use `Dynamic` so every
/// resolution owns a fresh, independent sequence.
#[derive(Debug, Clone)]
pub enum DefaultSource {
    /// No default: the field must be supplied or resolution fails.
    Required,
    Static(Value),
    Dynamic(fn() -> Value),
}

// ── Constraints ───────────────────────────────────────────────────────────────

/// Validation applied to a supplied value after type coercion.
#[derive(Debug, Clone)]
pub enum Constraint {
    Anything,
    /// Value must be a member of the enumerated literal set.
    Choice(Choices),
    /// Integer lower bound, inclusive.
    MinInt(i64),
    /// Float must be strictly positive.
    PositiveFloat,
}

impl Constraint {
    /// Checks `value` against the constraint.  Absent optional values
    /// (`Value::None`) always pass; constraints bind supplied values and
    /// concrete defaults only.
    fn check(&self, path: &str, value: &Value) -> Result<(), ResolveError> {
        match (self, value) {
            (_, Value::None) => Ok(()),
            (Constraint::Anything, _) => Ok(()),
            (Constraint::Choice(allowed), Value::Str(s)) => {
                if allowed.contains(s) {
                    Ok(())
                } else {
                    Err(ResolveError::InvalidChoice {
                        path: path.to_owned(),
                        given: s.clone(),
                        allowed: *allowed,
                    })
                }
            }
            (Constraint::MinInt(min), Value::Int(i)) => {
                if i >= min {
                    Ok(())
                } else {
                    Err(ResolveError::OutOfRange {
                        path: path.to_owned(),
                        given: i.to_string(),
                        constraint: format!("must be >= {min}"),
                    })
                }
            }
            (Constraint::PositiveFloat, Value::Float(x)) => {
                if *x > 0.0 {
                    Ok(())
                } else {
                    Err(ResolveError::OutOfRange {
                        path: path.to_owned(),
                        given: x.to_string(),
                        constraint: "must be > 0".to_owned(),
                    })
                }
            }
            // Constraint and value kind do not overlap; nothing to check.
            _ => Ok(()),
        }
    }
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// One atomic configuration unit of the schema.
#[derive(Debug, Clone)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub default: DefaultSource,
    pub constraint: Constraint,
    pub doc: &'static str,
}

impl Field {
    // -- Constructors ----------------------------------------------------------

    /// Required string field: no default of any kind.
    pub fn required_str(name: &'static str, doc: &'static str) -> Field {
        Field {
            name,
            kind: FieldKind::Str,
            default: DefaultSource::Required,
            constraint: Constraint::Anything,
            doc,
        }
    }

    pub fn str(name: &'static str, default: &str, doc: &'static str) -> Field {
        Field {
            name,
            kind: FieldKind::Str,
            default: DefaultSource::Static(Value::Str(default.to_owned())),
            constraint: Constraint::Anything,
            doc,
        }
    }

    /// Presence flag: absent means `false`.
    pub fn flag(name: &'static str, doc: &'static str) -> Field {
        Field {
            name,
            kind: FieldKind::Bool,
            default: DefaultSource::Static(Value::Bool(false)),
            constraint: Constraint::Anything,
            doc,
        }
    }

    pub fn int(name: &'static str, default: i64, doc: &'static str) -> Field {
        Field {
            name,
            kind: FieldKind::Int,
            default: DefaultSource::Static(Value::Int(default)),
            constraint: Constraint::Anything,
            doc,
        }
    }

    pub fn float(name: &'static str, default: f64, doc: &'static str) -> Field {
        Field {
            name,
            kind: FieldKind::Float,
            default: DefaultSource::Static(Value::Float(default)),
            constraint: Constraint::Anything,
            doc,
        }
    }

    /// Optional string: absent resolves to `Value::None`.
    pub fn opt_str(name: &'static str, doc: &'static str) -> Field {
        Field {
            name,
            kind: FieldKind::OptStr,
            default: DefaultSource::Static(Value::None),
            constraint: Constraint::Anything,
            doc,
        }
    }

    /// Optional integer, with or without a concrete default.
    pub fn opt_int(name: &'static str, default: Option<i64>, doc: &'static str) -> Field {
        Field {
            name,
            kind: FieldKind::OptInt,
            default: DefaultSource::Static(default.map_or(Value::None, Value::Int)),
            constraint: Constraint::Anything,
            doc,
        }
    }

    pub fn opt_float(name: &'static str, doc: &'static str) -> Field {
        Field {
            name,
            kind: FieldKind::OptFloat,
            default: DefaultSource::Static(Value::None),
            constraint: Constraint::Anything,
            doc,
        }
    }

    /// String list, empty by default.  The default goes through a factory so
    /// each resolution owns a fresh sequence.
    pub fn list(name: &'static str, doc: &'static str) -> Field {
        fn empty_list() -> Value {
            Value::List(Vec::new())
        }
        Field {
            name,
            kind: FieldKind::List,
            default: DefaultSource::Dynamic(empty_list),
            constraint: Constraint::Anything,
            doc,
        }
    }

    /// Integer whose default is computed by `provider` at resolution time.
    pub fn dynamic_int(
        name: &'static str,
        provider: fn() -> Value,
        doc: &'static str,
    ) -> Field {
        Field {
            name,
            kind: FieldKind::Int,
            default: DefaultSource::Dynamic(provider),
            constraint: Constraint::Anything,
            doc,
        }
    }

    /// Choice-constrained string with a default from its own set.
    pub fn choice(
        name: &'static str,
        allowed: Choices,
        default: &'static str,
        doc: &'static str,
    ) -> Field {
        debug_assert!(allowed.contains(default), "choice default outside its set");
        Field {
            name,
            kind: FieldKind::Str,
            default: DefaultSource::Static(Value::Str(default.to_owned())),
            constraint: Constraint::Choice(allowed),
            doc,
        }
    }

    // -- Builder adjustments ---------------------------------------------------

    /// Attaches an inclusive integer lower bound.
    pub fn min(mut self, min: i64) -> Field {
        self.constraint = Constraint::MinInt(min);
        self
    }

    /// Requires a strictly positive float when supplied.
    pub fn positive(mut self) -> Field {
        self.constraint = Constraint::PositiveFloat;
        self
    }

    // -- Queries ---------------------------------------------------------------

    #[inline]
    pub fn is_required(&self) -> bool {
        matches!(self.default, DefaultSource::Required)
    }

    /// The choice set, when this field is choice-constrained.
    pub fn choices(&self) -> Option<Choices> {
        match self.constraint {
            Constraint::Choice(allowed) => Some(allowed),
            _ => None,
        }
    }

    // -- Resolution ------------------------------------------------------------

    /// Resolves this field at `path` from an optional raw occurrence.
    ///
    /// Supplied values are coerced to the field's kind and checked against
    /// its constraint.  Absent values fall back to the default source;
    /// dynamic providers run here, on every call.
    pub fn resolve(&self, path: &str, raw: Option<&RawValue>) -> Result<Value, ResolveError> {
        match raw {
            Some(raw) => {
                let value = self.coerce(path, raw)?;
                self.constraint.check(path, &value)?;
                Ok(value)
            }
            None => match &self.default {
                DefaultSource::Required => Err(ResolveError::MissingRequired {
                    path: path.to_owned(),
                }),
                DefaultSource::Static(value) => Ok(value.clone()),
                DefaultSource::Dynamic(provider) => Ok(provider()),
            },
        }
    }

    /// Coerces one raw occurrence to this field's kind.
    fn coerce(&self, path: &str, raw: &RawValue) -> Result<Value, ResolveError> {
        let mismatch = |given: String| ResolveError::TypeMismatch {
            path: path.to_owned(),
            expected: self.kind,
            given,
        };

        match (self.kind, raw) {
            (FieldKind::Bool, RawValue::Flag) => Ok(Value::Bool(true)),
            // `--flag=true` / `--flag=false` inline form.
            (FieldKind::Bool, RawValue::Single(s)) => match s.as_str() {
                "true" => Ok(Value::Bool(true)),
                "false" => Ok(Value::Bool(false)),
                _ => Err(mismatch(s.clone())),
            },
            (FieldKind::Str | FieldKind::OptStr, RawValue::Single(s)) => {
                Ok(Value::Str(s.clone()))
            }
            (FieldKind::Int | FieldKind::OptInt, RawValue::Single(s)) => s
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| mismatch(s.clone())),
            (FieldKind::Float | FieldKind::OptFloat, RawValue::Single(s)) => s
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| mismatch(s.clone())),
            (FieldKind::List, RawValue::Single(s)) => Ok(Value::List(vec![s.clone()])),
            (FieldKind::List, RawValue::Repeated(items)) => Ok(Value::List(items.clone())),
            (_, RawValue::Flag) => Err(mismatch(String::new())),
            (_, RawValue::Repeated(items)) => Err(mismatch(items.join(","))),
        }
    }
}
