//! The argument resolution engine.
//!
//! Resolution turns a command schema plus raw input into a
//! [`ResolvedConfig`]: an immutable tree where every field of the command
//! holds exactly one concrete value.  The policy is collect-all, never
//! fail-fast — every field in the flattened schema is evaluated
//! independently and all errors come back together, so a user fixing their
//! invocation sees the complete picture at once.  Only command selection
//! short-circuits, since no field schema exists for an unknown command.
//!
//! [`default_snapshot`] is the programmatic entry point for other tooling:
//! resolution against entirely empty input.  It succeeds exactly when the
//! command has no required field that is left unsupplied.

use std::collections::BTreeMap;

use crate::cli::raw::RawInput;
use crate::error::{ResolveError, ResolveReport};
use crate::schema::command::{self, CommandKind, CommandSchema};
use crate::schema::value::Value;

// ── Resolved configuration tree ───────────────────────────────────────────────

/// Immutable snapshot of one fully resolved command.
///
/// Every field of the command's flattened schema maps to exactly one value;
/// required fields are concrete, choice-constrained fields are members of
/// their sets.  Consumed once by the dispatcher, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    kind: CommandKind,
    values: BTreeMap<String, Value>,
}

impl ResolvedConfig {
    #[inline]
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        self.values.get(path)
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.get(path).and_then(Value::as_bool)
    }

    pub fn get_int(&self, path: &str) -> Option<i64> {
        self.get(path).and_then(Value::as_int)
    }

    pub fn get_float(&self, path: &str) -> Option<f64> {
        self.get(path).and_then(Value::as_float)
    }

    pub fn get_list(&self, path: &str) -> Option<&[String]> {
        self.get(path).and_then(Value::as_list)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(path, value)| (path.as_str(), value))
    }

    /// Renders the tree as nested JSON: one object per group, top-level
    /// fields and the command name at the root.
    pub fn to_json(&self) -> serde_json::Value {
        let mut root = serde_json::Map::new();
        root.insert(
            "command".to_owned(),
            serde_json::Value::String(self.kind.name().to_owned()),
        );
        for (path, value) in &self.values {
            // Non-finite floats serialize as null.
            let json = serde_json::to_value(value).unwrap_or(serde_json::Value::Null);
            match path.split_once('.') {
                Some((group, name)) => {
                    let entry = root
                        .entry(group.to_owned())
                        .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
                    if let serde_json::Value::Object(map) = entry {
                        map.insert(name.to_owned(), json);
                    }
                }
                None => {
                    root.insert(path.clone(), json);
                }
            }
        }
        serde_json::Value::Object(root)
    }
}

// ── Resolution ────────────────────────────────────────────────────────────────

/// Resolves `raw` against `schema`, evaluating every flattened field
/// independently and collecting all errors.
pub fn resolve(schema: &CommandSchema, raw: &RawInput) -> Result<ResolvedConfig, ResolveReport> {
    let mut values = BTreeMap::new();
    let mut errors = Vec::new();

    for (path, field) in schema.flatten() {
        match field.resolve(&path, raw.get(&path)) {
            Ok(value) => {
                values.insert(path, value);
            }
            Err(error) => errors.push(error),
        }
    }

    // Programmatically supplied occurrences outside the schema are rejected
    // the same way unknown argv flags are.
    for path in raw.paths() {
        if !schema.has_path(path) {
            errors.push(ResolveError::UnknownFlag {
                given: format!("--{path}"),
            });
        }
    }

    if errors.is_empty() {
        Ok(ResolvedConfig {
            kind: schema.kind,
            values,
        })
    } else {
        Err(ResolveReport::from(errors))
    }
}

/// Full command-line resolution: select the command by `token`, tokenize
/// `rest`, resolve.  Tokenization and field errors are reported together.
pub fn resolve_command_line(
    token: &str,
    rest: &[String],
) -> Result<ResolvedConfig, ResolveReport> {
    let schema = command::select(token).map_err(ResolveReport::from)?;
    let (raw, token_errors) = RawInput::parse(schema, rest);

    match resolve(schema, &raw) {
        Ok(config) if token_errors.is_empty() => Ok(config),
        Ok(_) => Err(ResolveReport::from(token_errors)),
        Err(report) => {
            let mut errors = token_errors;
            errors.extend(report.iter().cloned());
            Err(ResolveReport::from(errors))
        }
    }
}

/// Default-valued snapshot of a command, produced without any input.
///
/// Fails with `MissingRequired` for each required field of the command, so
/// it is well-defined only for describing the non-required portion of the
/// schema or for commands whose required fields are supplied separately via
/// [`resolve`].
pub fn default_snapshot(kind: CommandKind) -> Result<ResolvedConfig, ResolveReport> {
    resolve(command::schema_for(kind), &RawInput::empty())
}
