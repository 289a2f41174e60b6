//! Command-line interface for the `multical` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity strings, the `VERBOSITY` atomic, and the `vlog!` output macro. |
//! | [`raw`]       | `RawInput` — the argv tokenizer: dotted flags, inline/detached values, presence flags, repeats. |
//! | [`resolve`]   | Collect-all resolution engine, `ResolvedConfig` tree, and the `default_snapshot` entry point. |
//! | [`help`]      | Usage and per-command help printers, generated from the schema. |
//!
//! Typical call sequence: select command → `RawInput::parse` →
//! `resolve` → dispatch through [`crate::program::Program`].

pub mod constants;
pub mod help;
pub mod raw;
pub mod resolve;
