use std::path::Path;

use gbdiff::{bus, report};

use super::load_lines;
use crate::cli::{BusModeArg, EXIT_DIVERGENCE, EXIT_SUCCESS};
use crate::terminal;

/// Compare two bus-write logs.
///
/// `first` mode treats any divergence as fatal for the run and exits
/// non-zero; `full` mode enumerates all differences and the report is
/// the product.
pub fn cmd_bus(actual: &Path, expected: &Path, mode: BusModeArg) -> i32 {
    let actual_lines = match load_lines(actual) {
        Ok(lines) => lines,
        Err(code) => return code,
    };
    let expected_lines = match load_lines(expected) {
        Ok(lines) => lines,
        Err(code) => return code,
    };

    let actual_writes = bus::parse_log(&actual_lines);
    let expected_writes = bus::parse_log(&expected_lines);
    terminal::info(&format!(
        "{} writes in actual, {} in expected",
        actual_writes.len(),
        expected_writes.len()
    ));

    match mode {
        BusModeArg::First => {
            let scan = bus::first_divergence(&expected_writes, &actual_writes);
            print!("{}", report::render_bus_first(&scan));
            if scan.divergence.is_some() {
                EXIT_DIVERGENCE
            } else {
                EXIT_SUCCESS
            }
        }
        BusModeArg::Full => {
            let comparison = bus::compare_writes(&expected_writes, &actual_writes);
            print!("{}", report::render_bus_full(&comparison));
            EXIT_SUCCESS
        }
    }
}
