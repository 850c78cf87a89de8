//! Report rendering.
//!
//! Pure formatting from comparison results to text. The reporter holds
//! no state of its own: every report is reconstructible from the result
//! value alone. Output is plain (unstyled) so it survives piping to a
//! file or another tool.

use std::fmt::Write;

use crate::bus::{BusComparison, ContextPair, DivergenceScan};
use crate::cpu::{CpuComparison, DiffDetail, RegField};
use crate::raw::RawComparison;

const SEPARATOR_WIDTH: usize = 80;

fn separator() -> String {
    "=".repeat(SEPARATOR_WIDTH)
}

fn marker(matches: bool) -> char {
    if matches { '✓' } else { '✗' }
}

/// Render the exhaustive register-log comparison.
#[must_use]
pub fn render_cpu(cmp: &CpuComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Comparing logs:");
    let _ = writeln!(out, "  Actual:   {} lines", cmp.actual_lines);
    let _ = writeln!(out, "  Expected: {} lines", cmp.expected_lines);
    let _ = writeln!(out, "  Comparing first {} lines", cmp.compared);
    let _ = writeln!(out);

    if cmp.total_differences() == 0 {
        if cmp.length_mismatch() == 0 {
            let _ = writeln!(out, "✓ Logs are identical! No differences found.");
        } else {
            let _ = writeln!(
                out,
                "✓ First {} lines match, but logs have different lengths",
                cmp.compared
            );
            let _ = writeln!(out, "  {}", extra_note(cmp.actual_lines, cmp.expected_lines, "lines"));
        }
        return out;
    }

    let _ = writeln!(out, "Found {} difference(s):", cmp.total_differences());
    let _ = writeln!(out);

    for (idx, diff) in cmp.differences.iter().enumerate() {
        let _ = writeln!(out, "{}", separator());
        let _ = writeln!(out, "Difference #{} at line {}", idx + 1, diff.line);
        let _ = writeln!(out, "{}", separator());

        match &diff.detail {
            DiffDetail::Fields {
                expected,
                actual,
                fields,
            } => {
                let _ = write!(out, "PC: {}  Opcode: {}", actual.pc, actual.op);
                if let Some(cb) = &actual.cb {
                    let _ = write!(out, " CB={cb}");
                }
                let _ = writeln!(out);
                let _ = writeln!(out);

                let diff_fields: Vec<RegField> = fields.iter().map(|f| f.field).collect();
                for field in RegField::ALL {
                    let exp = expected.field(field);
                    let act = actual.field(field);
                    if field == RegField::Cb && exp.is_none() && act.is_none() {
                        continue;
                    }
                    let _ = writeln!(
                        out,
                        "  {:3}: expected={:6} actual={:6} {}",
                        field.to_string(),
                        exp.unwrap_or("-"),
                        act.unwrap_or("-"),
                        marker(!diff_fields.contains(&field)),
                    );
                }

                let _ = writeln!(out);
                let _ = writeln!(out, "Full lines:");
                let _ = writeln!(out, "  Actual:   {}", actual.raw);
                let _ = writeln!(out, "  Expected: {}", expected.raw);
            }
            DiffDetail::Unparsed { expected, actual } => {
                let _ = writeln!(out, "  Actual:   {actual}");
                let _ = writeln!(out, "  Expected: {expected}");
                let _ = writeln!(out, "  Reason:   parse error or format mismatch");
            }
        }
        let _ = writeln!(out);
    }

    if cmp.omitted > 0 {
        let _ = writeln!(out, "... and {} more difference(s)", cmp.omitted);
        let _ = writeln!(out);
        if let Some(first) = cmp.differences.first() {
            let _ = writeln!(out, "First difference at line {}", first.line);
        }
    }

    out
}

/// Render the first-divergence bus scan.
#[must_use]
pub fn render_bus_first(scan: &DivergenceScan) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Comparing {} writes (actual {}, expected {})",
        scan.compared, scan.actual_writes, scan.expected_writes
    );
    let _ = writeln!(out);

    let Some(div) = &scan.divergence else {
        if scan.expected_writes == scan.actual_writes {
            let _ = writeln!(out, "✓ All {} writes match!", scan.compared);
        } else {
            let _ = writeln!(
                out,
                "✓ First {} writes match, but logs have different lengths",
                scan.compared
            );
            let _ = writeln!(out, "  {}", extra_note(scan.actual_writes, scan.expected_writes, "writes"));
        }
        return out;
    };

    let _ = writeln!(out, "First difference at write #{}:", div.number);
    let _ = writeln!(out, "  Actual:   {}", div.actual);
    let _ = writeln!(out, "  Expected: {}", div.expected);

    if !div.before.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Previous {} writes:", div.before.len());
        for pair in &div.before {
            let _ = writeln!(out, "{}", context_line(pair));
        }
    }
    if !div.after.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Next {} writes:", div.after.len());
        for pair in &div.after {
            let _ = writeln!(out, "{}", context_line(pair));
        }
    }

    out
}

fn context_line(pair: &ContextPair) -> String {
    format!(
        "  #{}: actual {} | expected {}",
        pair.number, pair.actual, pair.expected
    )
}

/// Render the exhaustive bus comparison.
#[must_use]
pub fn render_bus_full(cmp: &BusComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Comparing {} writes (actual {}, expected {})",
        cmp.compared, cmp.actual_writes, cmp.expected_writes
    );
    let _ = writeln!(out);

    if cmp.total_differences() == 0 {
        if cmp.expected_writes == cmp.actual_writes {
            let _ = writeln!(out, "✓ All {} writes match!", cmp.compared);
        } else {
            let _ = writeln!(
                out,
                "✓ First {} writes match, but logs have different lengths",
                cmp.compared
            );
            let _ = writeln!(out, "  {}", extra_note(cmp.actual_writes, cmp.expected_writes, "writes"));
        }
        return out;
    }

    let _ = writeln!(out, "Found {} difference(s):", cmp.total_differences());
    let _ = writeln!(out);

    for (idx, diff) in cmp.differences.iter().enumerate() {
        let _ = writeln!(out, "Difference #{} at write #{}", idx + 1, diff.number);
        let rows = [
            ("PC", format!("0x{:04X}", diff.expected.pc), format!("0x{:04X}", diff.actual.pc)),
            ("ADDR", format!("0x{:04X}", diff.expected.addr), format!("0x{:04X}", diff.actual.addr)),
            ("VAL", format!("0x{:02X}", diff.expected.val), format!("0x{:02X}", diff.actual.val)),
        ];
        for (name, exp, act) in rows {
            let _ = writeln!(
                out,
                "  {name:4}: expected={exp:6} actual={act:6} {}",
                marker(exp == act),
            );
        }
        let _ = writeln!(out);
    }

    if cmp.omitted > 0 {
        let _ = writeln!(out, "... and {} more difference(s)", cmp.omitted);
        let _ = writeln!(out);
        if let Some(first) = cmp.differences.first() {
            let _ = writeln!(out, "First difference at write #{}", first.number);
        }
    }

    out
}

/// Render the raw line comparison.
#[must_use]
pub fn render_raw(cmp: &RawComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Comparing logs:");
    let _ = writeln!(out, "  Actual:   {} lines", cmp.actual_lines);
    let _ = writeln!(out, "  Expected: {} lines", cmp.expected_lines);
    let _ = writeln!(out);

    if cmp.total_differences() == 0 {
        let _ = writeln!(out, "✓ Logs are identical! No differences found.");
        return out;
    }

    let _ = writeln!(out, "Found {} difference(s):", cmp.total_differences());
    let _ = writeln!(out);

    for (idx, diff) in cmp.differences.iter().enumerate() {
        let _ = writeln!(out, "Difference #{} at line {}", idx + 1, diff.line);
        let _ = writeln!(out, "  Actual:   {}", diff.actual);
        let _ = writeln!(out, "  Expected: {}", diff.expected);
        let _ = writeln!(out);
    }

    if cmp.omitted > 0 {
        let _ = writeln!(out, "... and {} more difference(s)", cmp.omitted);
        let _ = writeln!(out);
        if let Some(first) = cmp.differences.first() {
            let _ = writeln!(out, "First difference at line {}", first.line);
        }
    }

    out
}

/// "Actual log has N extra lines" / "Expected log has N extra writes".
fn extra_note(actual: usize, expected: usize, unit: &str) -> String {
    if actual > expected {
        format!("Actual log has {} extra {unit}", actual - expected)
    } else {
        format!("Expected log has {} extra {unit}", expected - actual)
    }
}
