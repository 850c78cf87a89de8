//! Format-agnostic line comparison.
//!
//! Compares two logs as plain text, line by line, with no field
//! parsing at all. Useful when one side's format is unknown or broken
//! badly enough that the structured comparators see nothing.

use tracing::debug;

/// Detailed entries reported per run.
pub const RAW_DETAIL_CAP: usize = 50;

/// Placeholder for positions past the end of the shorter log.
pub const EOF_MARKER: &str = "<EOF>";

/// One differing line pair.
#[derive(Debug, Clone)]
pub struct RawDiff {
    /// 1-based line number.
    pub line: usize,
    pub expected: String,
    pub actual: String,
}

/// Result of the raw line scan.
#[derive(Debug)]
pub struct RawComparison {
    pub expected_lines: usize,
    pub actual_lines: usize,
    /// Positions examined: the longer length, the shorter log's missing
    /// tail reading as [`EOF_MARKER`] lines.
    pub compared: usize,
    /// Differences in scan order, detailed up to [`RAW_DETAIL_CAP`].
    pub differences: Vec<RawDiff>,
    /// Differences beyond the cap, counted but not detailed.
    pub omitted: usize,
}

impl RawComparison {
    /// Total differences found, detailed or not.
    #[must_use]
    pub fn total_differences(&self) -> usize {
        self.differences.len() + self.omitted
    }
}

/// Compare two logs line by line as opaque text.
///
/// Walks to the longer length; the shorter log's missing tail compares
/// as [`EOF_MARKER`], so trailing extra lines are ordinary differences
/// here (unlike the structured scans, which treat length mismatch as
/// informational only).
#[must_use]
pub fn compare_lines(expected: &[String], actual: &[String]) -> RawComparison {
    let compared = expected.len().max(actual.len());
    let side = |log: &[String], i: usize| {
        log.get(i)
            .map_or(EOF_MARKER, |line| line.trim())
            .to_string()
    };

    let mut differences = Vec::new();
    let mut omitted = 0usize;
    for i in 0..compared {
        let exp = side(expected, i);
        let act = side(actual, i);
        if exp == act {
            continue;
        }
        if differences.len() < RAW_DETAIL_CAP {
            differences.push(RawDiff {
                line: i + 1,
                expected: exp,
                actual: act,
            });
        } else {
            omitted += 1;
        }
    }

    debug!(
        compared,
        detailed = differences.len(),
        omitted,
        "raw line comparison finished"
    );

    RawComparison {
        expected_lines: expected.len(),
        actual_lines: actual.len(),
        compared,
        differences,
        omitted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| (*l).to_string()).collect()
    }

    #[test]
    fn test_identical_logs() {
        let lines = log(&["a", "b", "c"]);
        let result = compare_lines(&lines, &lines);
        assert_eq!(result.total_differences(), 0);
        assert_eq!(result.compared, 3);
    }

    #[test]
    fn test_missing_tail_reads_as_eof() {
        let expected = log(&["a", "b", "c"]);
        let actual = log(&["a"]);
        let result = compare_lines(&expected, &actual);

        assert_eq!(result.compared, 3);
        assert_eq!(result.differences.len(), 2);
        assert_eq!(result.differences[0].line, 2);
        assert_eq!(result.differences[0].actual, EOF_MARKER);
        assert_eq!(result.differences[1].expected, "c");
    }

    #[test]
    fn test_cap() {
        let expected: Vec<String> = (0..RAW_DETAIL_CAP * 2).map(|i| format!("x{i}")).collect();
        let actual: Vec<String> = (0..RAW_DETAIL_CAP * 2).map(|i| format!("y{i}")).collect();
        let result = compare_lines(&expected, &actual);

        assert_eq!(result.differences.len(), RAW_DETAIL_CAP);
        assert_eq!(result.omitted, RAW_DETAIL_CAP);
    }

    #[test]
    fn test_whitespace_insensitive_at_line_ends() {
        let expected = log(&["a  "]);
        let actual = log(&["a"]);
        let result = compare_lines(&expected, &actual);
        assert_eq!(result.total_differences(), 0);
    }
}
