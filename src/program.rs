//! Program dispatch: exactly one resolved command, forwarded to its
//! execution contract.
//!
//! [`Command`] is the closed sum of resolved command variants.  [`Pipeline`]
//! is the execution contract the calibration backend implements; this module
//! performs no calibration work itself and reports whatever the contract
//! returns, unmodified.

use anyhow::Result;

use crate::cli::constants::{VERBOSITY_DEBUG, VERBOSITY_INFO};
use crate::cli::resolve::ResolvedConfig;
use crate::schema::command::CommandKind;
use crate::vlog;

// ── Execution contract ────────────────────────────────────────────────────────

/// The operations the downstream calibration pipeline provides.  Each takes
/// the resolved configuration tree as its sole input; failures propagate to
/// the dispatcher's caller unchanged.
pub trait Pipeline {
    fn calibrate(&self, config: &ResolvedConfig) -> Result<()>;
    fn intrinsic(&self, config: &ResolvedConfig) -> Result<()>;
    fn boards(&self, config: &ResolvedConfig) -> Result<()>;
    fn vis(&self, config: &ResolvedConfig) -> Result<()>;
}

// ── Command sum type ──────────────────────────────────────────────────────────

/// One resolved command variant, carrying its configuration tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Calibrate(ResolvedConfig),
    Intrinsic(ResolvedConfig),
    Boards(ResolvedConfig),
    Vis(ResolvedConfig),
}

impl Command {
    /// Wraps a resolved configuration in the variant matching its kind.
    pub fn from_config(config: ResolvedConfig) -> Command {
        match config.kind() {
            CommandKind::Calibrate => Command::Calibrate(config),
            CommandKind::Intrinsic => Command::Intrinsic(config),
            CommandKind::Boards => Command::Boards(config),
            CommandKind::Vis => Command::Vis(config),
        }
    }

    pub fn config(&self) -> &ResolvedConfig {
        match self {
            Command::Calibrate(config)
            | Command::Intrinsic(config)
            | Command::Boards(config)
            | Command::Vis(config) => config,
        }
    }

    pub fn kind(&self) -> CommandKind {
        self.config().kind()
    }
}

// ── Program ───────────────────────────────────────────────────────────────────

/// Top-level entity: holds exactly one resolved command.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub command: Command,
}

impl Program {
    pub fn new(config: ResolvedConfig) -> Program {
        Program {
            command: Command::from_config(config),
        }
    }

    /// Forwards control to the matching execution contract, synchronously.
    /// Pure pass-through: no result is reinterpreted here.
    pub fn run(&self, pipeline: &dyn Pipeline) -> Result<()> {
        match &self.command {
            Command::Calibrate(config) => pipeline.calibrate(config),
            Command::Intrinsic(config) => pipeline.intrinsic(config),
            Command::Boards(config) => pipeline.boards(config),
            Command::Vis(config) => pipeline.vis(config),
        }
    }
}

// ── Reporting pipeline ────────────────────────────────────────────────────────

/// Pipeline used by the binary: reports what each command would run on,
/// with the full resolved tree at DEBUG verbosity.  Stands in until the
/// calibration backend is wired up.
pub struct ReportPipeline;

impl ReportPipeline {
    fn report(&self, what: &str, config: &ResolvedConfig) -> Result<()> {
        vlog!(VERBOSITY_INFO, "{what}");
        vlog!(VERBOSITY_DEBUG, "{:#}", config.to_json());
        Ok(())
    }
}

impl Pipeline for ReportPipeline {
    fn calibrate(&self, config: &ResolvedConfig) -> Result<()> {
        let image_path = config.get_str("inputs.image_path").unwrap_or("?");
        self.report(&format!("calibrate: images from {image_path}"), config)
    }

    fn intrinsic(&self, config: &ResolvedConfig) -> Result<()> {
        let image_path = config.get_str("inputs.image_path").unwrap_or("?");
        self.report(&format!("intrinsic: images from {image_path}"), config)
    }

    fn boards(&self, config: &ResolvedConfig) -> Result<()> {
        let boards = config.get_str("boards").unwrap_or("?");
        self.report(&format!("boards: configuration {boards}"), config)
    }

    fn vis(&self, config: &ResolvedConfig) -> Result<()> {
        let workspace = config.get_str("workspace_file").unwrap_or("?");
        self.report(&format!("vis: workspace {workspace}"), config)
    }
}
