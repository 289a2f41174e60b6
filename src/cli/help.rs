//! Usage and help text, generated from the schema.
//!
//! Help output is derived from the same registry the resolution engine
//! reads, so flag names, defaults, and choice sets can never drift from the
//! behavior they describe.

use crate::cli::constants::{PROGRAM_DESC, PROGRAM_NAME};
use crate::schema::command::{self, CommandSchema};
use crate::schema::field::{DefaultSource, Field};
use crate::schema::value::Value;
use crate::MULTICAL_VERSION_STRING;

/// Print the top-level usage summary to stderr.
pub fn print_usage() {
    eprintln!("{PROGRAM_NAME} - {PROGRAM_DESC}");
    eprintln!();
    eprintln!("usage: {PROGRAM_NAME} <command> [options]");
    eprintln!();
    eprintln!("commands:");
    for schema in command::registry() {
        eprintln!("  {:<12}{}", schema.kind.name(), schema.doc);
    }
    eprintln!();
    eprintln!("run '{PROGRAM_NAME} <command> --help' for the options of a command");
}

/// Print the full option table of one command to stderr.
pub fn print_command_help(schema: &CommandSchema) {
    eprintln!("usage: {PROGRAM_NAME} {} [options]", schema.kind.name());
    eprintln!();
    eprintln!("{}", schema.doc);
    for group in &schema.groups {
        eprintln!();
        eprintln!("{} ({}):", group.name, group.doc);
        for field in &group.fields {
            print_field_line(&format!("{}.{}", group.name, field.name), field);
        }
    }
    if !schema.fields.is_empty() {
        eprintln!();
        eprintln!("options:");
        for field in &schema.fields {
            print_field_line(field.name, field);
        }
    }
}

/// Print name and version to stdout.
pub fn print_version() {
    println!("{PROGRAM_NAME} v{MULTICAL_VERSION_STRING}");
}

fn print_field_line(path: &str, field: &Field) {
    eprintln!("  --{:<28} {}{}", path, field.doc, annotation(field));
}

/// The parenthesized tail of a help line: requiredness, choice set, default.
fn annotation(field: &Field) -> String {
    let mut parts = Vec::new();
    if let Some(choices) = field.choices() {
        parts.push(format!("choices: {choices}"));
    }
    match &field.default {
        DefaultSource::Required => parts.push("required".to_owned()),
        DefaultSource::Static(Value::None) => {}
        DefaultSource::Static(Value::Bool(false)) => {}
        DefaultSource::Static(value) => parts.push(format!("default: {value}")),
        DefaultSource::Dynamic(_) => parts.push("default: auto".to_owned()),
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join("; "))
    }
}
