use std::path::Path;

use gbdiff::{raw, report};

use super::load_lines;
use crate::cli::EXIT_SUCCESS;

/// Compare two logs line by line with no field parsing.
pub fn cmd_raw(actual: &Path, expected: &Path) -> i32 {
    let actual_lines = match load_lines(actual) {
        Ok(lines) => lines,
        Err(code) => return code,
    };
    let expected_lines = match load_lines(expected) {
        Ok(lines) => lines,
        Err(code) => return code,
    };

    let comparison = raw::compare_lines(&expected_lines, &actual_lines);
    print!("{}", report::render_raw(&comparison));

    EXIT_SUCCESS
}
