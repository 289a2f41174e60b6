//! Concrete and raw value model for the option schema.
//!
//! [`Value`] is what resolution produces: every field of a resolved command
//! maps to exactly one `Value`.  [`RawValue`] is what the tokenizer produces
//! from `argv` before coercion.  [`FieldKind`] names a field's semantic type
//! and drives both tokenization (booleans consume no value) and coercion.

use std::fmt;

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

// ── Semantic field types ──────────────────────────────────────────────────────

/// Semantic type of a schema field.
///
/// The `Opt*` kinds differ from their base kinds only in their resolved
/// shape: an absent optional field resolves to [`Value::None`] instead of
/// requiring a default of the base type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Str,
    Bool,
    Int,
    Float,
    OptStr,
    OptInt,
    OptFloat,
    /// Ordered sequence of strings, built from repeated flag occurrences.
    List,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Str => "string",
            FieldKind::Bool => "boolean",
            FieldKind::Int => "integer",
            FieldKind::Float => "float",
            FieldKind::OptStr => "optional string",
            FieldKind::OptInt => "optional integer",
            FieldKind::OptFloat => "optional float",
            FieldKind::List => "string list",
        };
        f.write_str(name)
    }
}

// ── Choice sets ───────────────────────────────────────────────────────────────

/// Fixed set of accepted literals for a choice-constrained field.
///
/// Also reused for the known-command set in `UnknownCommand` errors, so both
/// render their alternatives the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choices(pub &'static [&'static str]);

impl Choices {
    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(&value)
    }

    #[inline]
    pub fn as_slice(&self) -> &'static [&'static str] {
        self.0
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, choice) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(choice)?;
        }
        Ok(())
    }
}

// ── Resolved values ───────────────────────────────────────────────────────────

/// A fully resolved field value.
///
/// `None` is the resolved state of an optional field that was neither
/// supplied nor given a concrete default.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bool(bool),
    Int(i64),
    Float(f64),
    List(Vec<String>),
    None,
}

impl Value {
    /// Returns the contained string, if this is a `Str` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::List(items) => f.write_str(&items.join(",")),
            Value::None => f.write_str("none"),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Str(s) => serializer.serialize_str(s),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::None => serializer.serialize_none(),
        }
    }
}

// ── Raw values ────────────────────────────────────────────────────────────────

/// A raw occurrence of a field in the input, before coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Presence flag with no attached value (`--runtime.no_cache`).
    Flag,
    /// Single attached value (`--optimizer.iter 5` or `--optimizer.iter=5`).
    Single(String),
    /// Accumulated values of a repeated list flag, in occurrence order.
    Repeated(Vec<String>),
}

impl RawValue {
    /// Appends one more occurrence to a `Repeated` value.
    pub fn push(&mut self, item: String) {
        if let RawValue::Repeated(items) = self {
            items.push(item);
        }
    }
}
