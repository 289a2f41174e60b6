//! Binary entry point for the `multical` command-line tool.
//!
//! Control flow:
//!
//! 1. Handle `--help` / `--version` (and their per-command forms) before any
//!    resolution; these exit 0 without touching the schema engine.
//! 2. Select the command by its discriminator token, tokenize the remaining
//!    arguments, and resolve them into a configuration tree.  Every
//!    validation error is printed — the engine collects all of them rather
//!    than stopping at the first.
//! 3. Dispatch the resolved program to the execution contract and map its
//!    outcome to the process exit code.

use multical::cli::constants::{set_verbosity_from_level, PROGRAM_NAME};
use multical::cli::help;
use multical::cli::resolve::resolve_command_line;
use multical::program::{Program, ReportPipeline};
use multical::schema::command;

/// Resolve and dispatch one invocation.  Returns the process exit code
/// (0 = success, non-zero = validation or execution failure).
fn run(argv: &[String]) -> i32 {
    let Some(token) = argv.first() else {
        help::print_usage();
        return 1;
    };

    match token.as_str() {
        "-h" | "--help" => {
            help::print_usage();
            return 0;
        }
        "-V" | "--version" => {
            help::print_version();
            return 0;
        }
        _ => {}
    }

    // Per-command help short-circuits resolution for known commands.
    if let Ok(schema) = command::select(token) {
        if argv[1..].iter().any(|a| a == "-h" || a == "--help") {
            help::print_command_help(schema);
            return 0;
        }
    }

    let config = match resolve_command_line(token, &argv[1..]) {
        Ok(config) => config,
        Err(report) => {
            for error in report.iter() {
                eprintln!("{PROGRAM_NAME}: {error}");
            }
            eprintln!("{PROGRAM_NAME}: run '{PROGRAM_NAME} --help' for usage");
            return 1;
        }
    };

    if let Some(level) = config.get_str("runtime.log_level") {
        set_verbosity_from_level(level);
    }

    let program = Program::new(config);
    match program.run(&ReportPipeline) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("{PROGRAM_NAME}: {error:#}");
            1
        }
    }
}

fn main() {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run(&argv));
}
