//! Command implementations.
//!
//! Each submodule handles one CLI subcommand. Loading errors are
//! reported here so every command gets the same failure path: message
//! to stderr, [`EXIT_ERROR`](crate::cli::EXIT_ERROR), no comparison.

mod bus;
mod cpu;
mod raw;

use std::path::Path;

use crate::cli::{Cli, Commands, EXIT_ERROR};
use crate::terminal;

/// Dispatch CLI command to the appropriate handler.
pub fn run_command(cli: &Cli) -> i32 {
    match &cli.command {
        Commands::Cpu {
            actual,
            expected,
            limit,
        } => cpu::cmd_cpu(actual, expected, *limit),
        Commands::Bus {
            actual,
            expected,
            mode,
        } => bus::cmd_bus(actual, expected, *mode),
        Commands::Raw { actual, expected } => raw::cmd_raw(actual, expected),
    }
}

/// Load a log file behind a spinner, mapping failure to an exit code.
pub fn load_lines(path: &Path) -> Result<Vec<String>, i32> {
    let spinner = terminal::Spinner::new(format!("Reading {}", path.display()));
    match gbdiff::io::read_log_lines(path) {
        Ok(lines) => {
            spinner.finish_with_success(&format!("{}: {} lines", path.display(), lines.len()));
            Ok(lines)
        }
        Err(e) => {
            spinner.finish_with_failure(&e.to_string());
            Err(EXIT_ERROR)
        }
    }
}
