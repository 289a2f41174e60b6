//! Tokenization of `argv` into raw field occurrences.
//!
//! Flags are the fully-qualified dotted field paths of the selected command
//! (`--inputs.image_path`, `--optimizer.iter`).  Values attach either inline
//! (`--optimizer.iter=5`) or as the next token (`--optimizer.iter 5`).
//! Boolean fields are presence flags and consume no value.  List fields
//! accumulate repeated occurrences in order.  A repeated scalar flag keeps
//! its last occurrence.
//!
//! Tokenization is schema-directed (it must know which flags are boolean)
//! and collect-all: unrecognized or valueless flags are recorded as errors
//! and the loop continues, so one bad token never hides the next.

use std::collections::BTreeMap;

use crate::error::ResolveError;
use crate::schema::command::CommandSchema;
use crate::schema::value::{FieldKind, RawValue};

/// Raw occurrences keyed by fully-qualified field path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    entries: BTreeMap<String, RawValue>,
}

impl RawInput {
    /// An input with no occurrences at all; resolving against it yields the
    /// default snapshot of a command.
    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, path: &str) -> Option<&RawValue> {
        self.entries.get(path)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Paths of every raw occurrence.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Records an occurrence programmatically (the non-argv entry point for
    /// tooling that supplies required fields to a snapshot).
    pub fn set(&mut self, path: &str, raw: RawValue) {
        self.entries.insert(path.to_owned(), raw);
    }

    /// Appends one value to a list field, preserving occurrence order.
    fn push_item(&mut self, path: &str, item: String) {
        match self.entries.get_mut(path) {
            Some(raw) => raw.push(item),
            None => {
                self.entries
                    .insert(path.to_owned(), RawValue::Repeated(vec![item]));
            }
        }
    }

    /// Tokenizes `argv` (everything after the command discriminator) against
    /// `schema`.  Returns the collected occurrences together with every
    /// tokenization error encountered.
    pub fn parse(schema: &CommandSchema, argv: &[String]) -> (RawInput, Vec<ResolveError>) {
        let mut raw = RawInput::empty();
        let mut errors = Vec::new();

        let mut i = 0usize;
        while i < argv.len() {
            let argument = &argv[i];
            i += 1;

            let Some(body) = argument.strip_prefix("--") else {
                // Stray positional token.
                errors.push(ResolveError::UnknownFlag {
                    given: argument.clone(),
                });
                continue;
            };

            let (path, inline) = match body.split_once('=') {
                Some((path, value)) => (path, Some(value)),
                None => (body, None),
            };

            let Some(field) = schema.lookup(path) else {
                errors.push(ResolveError::UnknownFlag {
                    given: argument.clone(),
                });
                // Swallow a detached value so it is not misread as another
                // stray token.
                if inline.is_none() && i < argv.len() && !argv[i].starts_with("--") {
                    i += 1;
                }
                continue;
            };

            if field.kind == FieldKind::Bool {
                match inline {
                    Some(value) => raw.set(path, RawValue::Single(value.to_owned())),
                    None => raw.set(path, RawValue::Flag),
                }
                continue;
            }

            let value = match inline {
                Some(value) => Some(value.to_owned()),
                // Detached value: next token, unless it is another flag.
                // A single leading '-' is allowed so negative numbers pass.
                None if i < argv.len() && !argv[i].starts_with("--") => {
                    let value = argv[i].clone();
                    i += 1;
                    Some(value)
                }
                None => None,
            };

            match value {
                Some(value) if field.kind == FieldKind::List => raw.push_item(path, value),
                Some(value) => raw.set(path, RawValue::Single(value)),
                None => errors.push(ResolveError::MissingValue {
                    path: path.to_owned(),
                }),
            }
        }

        (raw, errors)
    }
}
