use std::path::Path;

use gbdiff::{cpu, report};

use super::load_lines;
use crate::cli::EXIT_SUCCESS;

/// Compare two register-snapshot logs and print the full report.
///
/// Exhaustive scan: differences do not fail the run, the report is the
/// product. Only an unreadable input is a failure.
pub fn cmd_cpu(actual: &Path, expected: &Path, limit: usize) -> i32 {
    let actual_lines = match load_lines(actual) {
        Ok(lines) => lines,
        Err(code) => return code,
    };
    let expected_lines = match load_lines(expected) {
        Ok(lines) => lines,
        Err(code) => return code,
    };

    let comparison = cpu::compare_logs(&expected_lines, &actual_lines, limit);
    print!("{}", report::render_cpu(&comparison));

    EXIT_SUCCESS
}
