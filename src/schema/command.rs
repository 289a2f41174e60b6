//! The closed command set and its schemas.
//!
//! [`CommandKind`] is the discriminator; [`CommandSchema`] composes option
//! groups with command-local top-level fields and flattens them into
//! fully-qualified dotted paths (`<group>.<field>`, bare names for top-level
//! fields).  Paths double as external flag names and as the field paths in
//! error messages.
//!
//! Schemas are built once into a process-wide registry and never mutated
//! afterwards; every resolution reads the same immutable definitions.

use std::sync::OnceLock;

use crate::config;
use crate::error::ResolveError;
use crate::schema::field::Field;
use crate::schema::groups::{self, OptionGroup};
use crate::schema::value::Choices;

// ── Command discriminators ────────────────────────────────────────────────────

/// One alternative of the closed command set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Calibrate,
    Intrinsic,
    Boards,
    Vis,
}

/// Every known discriminator token, in registry order.
pub const COMMAND_NAMES: Choices = Choices(&["calibrate", "intrinsic", "boards", "vis"]);

impl CommandKind {
    pub const ALL: [CommandKind; 4] = [
        CommandKind::Calibrate,
        CommandKind::Intrinsic,
        CommandKind::Boards,
        CommandKind::Vis,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Calibrate => "calibrate",
            CommandKind::Intrinsic => "intrinsic",
            CommandKind::Boards => "boards",
            CommandKind::Vis => "vis",
        }
    }

    pub fn from_token(token: &str) -> Option<CommandKind> {
        match token {
            "calibrate" => Some(CommandKind::Calibrate),
            "intrinsic" => Some(CommandKind::Intrinsic),
            "boards" => Some(CommandKind::Boards),
            "vis" => Some(CommandKind::Vis),
            _ => None,
        }
    }
}

// ── Command schemas ───────────────────────────────────────────────────────────

/// Schema of one command: embedded groups plus command-local fields.
#[derive(Debug, Clone)]
pub struct CommandSchema {
    pub kind: CommandKind,
    pub doc: &'static str,
    pub groups: Vec<OptionGroup>,
    /// Top-level fields, addressed by bare name.
    pub fields: Vec<Field>,
}

impl CommandSchema {
    /// All fields with their fully-qualified paths, in declaration order:
    /// group fields first (group order, then field order), then top-level
    /// fields.
    pub fn flatten(&self) -> Vec<(String, &Field)> {
        let mut flat = Vec::new();
        for group in &self.groups {
            for field in &group.fields {
                flat.push((format!("{}.{}", group.name, field.name), field));
            }
        }
        for field in &self.fields {
            flat.push((field.name.to_owned(), field));
        }
        flat
    }

    /// Looks up a field by fully-qualified path.
    pub fn lookup(&self, path: &str) -> Option<&Field> {
        match path.split_once('.') {
            Some((group, name)) => self
                .groups
                .iter()
                .find(|g| g.name == group)?
                .field(name),
            None => self.fields.iter().find(|f| f.name == path),
        }
    }

    #[inline]
    pub fn has_path(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Paths of every required field of this command.
    pub fn required_paths(&self) -> Vec<String> {
        self.flatten()
            .into_iter()
            .filter(|(_, field)| field.is_required())
            .map(|(path, _)| path)
            .collect()
    }
}

// ── Registry ──────────────────────────────────────────────────────────────────

fn calibrate() -> CommandSchema {
    CommandSchema {
        kind: CommandKind::Calibrate,
        doc: "Run camera calibration",
        groups: vec![
            groups::inputs(),
            groups::outputs(),
            groups::camera(),
            groups::parameters(),
            groups::runtime(),
            groups::optimizer(),
        ],
        fields: vec![Field::flag("vis", "Visualize result after calibration")],
    }
}

fn intrinsic() -> CommandSchema {
    CommandSchema {
        kind: CommandKind::Intrinsic,
        doc: "Run separate intrinsic calibration for set of cameras",
        groups: vec![
            groups::inputs(),
            groups::outputs(),
            groups::camera(),
            groups::runtime(),
        ],
        fields: Vec::new(),
    }
}

fn boards() -> CommandSchema {
    CommandSchema {
        kind: CommandKind::Boards,
        doc: "Generate boards and show/detect for configuration file",
        groups: Vec::new(),
        fields: vec![
            Field::required_str("boards", "Configuration file (YAML) for calibration boards"),
            Field::opt_str("detect", "Show detections from an example image"),
            Field::flag("show", "Show image of boards"),
            Field::opt_str("write", "Directory to write board images"),
            Field::int("pixels_mm", config::DEFAULT_PIXELS_MM, "Pixels per mm of pattern")
                .min(1),
            Field::int("margin_mm", config::DEFAULT_MARGIN_MM, "Border width in mm").min(0),
            Field::opt_str(
                "paper_size_mm",
                "Paper size in mm WxH or standard size A0..A4",
            ),
        ],
    }
}

fn vis() -> CommandSchema {
    CommandSchema {
        kind: CommandKind::Vis,
        doc: "Visualize a calibration from a workspace file",
        groups: Vec::new(),
        fields: vec![Field::required_str(
            "workspace_file",
            "Workspace file saved by a previous calibration",
        )],
    }
}

/// The process-wide schema registry: built on first use, immutable after.
pub fn registry() -> &'static [CommandSchema] {
    static REGISTRY: OnceLock<Vec<CommandSchema>> = OnceLock::new();
    REGISTRY.get_or_init(|| vec![calibrate(), intrinsic(), boards(), vis()])
}

/// The schema of a known command.
pub fn schema_for(kind: CommandKind) -> &'static CommandSchema {
    // The registry holds every CommandKind by construction.
    registry()
        .iter()
        .find(|schema| schema.kind == kind)
        .unwrap_or_else(|| unreachable!("registry misses {:?}", kind))
}

/// Selects a command by discriminator token.  An unknown token fails before
/// any field is considered.
pub fn select(token: &str) -> Result<&'static CommandSchema, ResolveError> {
    match CommandKind::from_token(token) {
        Some(kind) => Ok(schema_for(kind)),
        None => Err(ResolveError::UnknownCommand {
            given: token.to_owned(),
            known: COMMAND_NAMES,
        }),
    }
}
