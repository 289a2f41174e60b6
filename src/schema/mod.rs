//! Option schema for the `multical` command set.
//!
//! | Submodule   | Responsibility |
//! |-------------|---------------|
//! | [`value`]   | `Value` / `FieldKind` / `RawValue` — the concrete and raw value model, plus `Choices` literal sets. |
//! | [`field`]   | `Field` — per-field metadata (type, default source, constraint, doc) and single-field resolution. |
//! | [`groups`]  | The reusable option groups (inputs, outputs, camera, parameters, runtime, optimizer). |
//! | [`command`] | `CommandKind` / `CommandSchema` — the closed command set, path flattening, and the init-once registry. |
//!
//! Schemas are declarative data: defined once at first use, immutable
//! afterwards.  Resolution (turning raw input into concrete values) lives in
//! [`crate::cli::resolve`] and calls back into [`field::Field::resolve`].

pub mod command;
pub mod field;
pub mod groups;
pub mod value;
