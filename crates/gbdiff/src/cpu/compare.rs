use tracing::{debug, warn};

use super::{CpuComparison, DiffDetail, FieldDiff, LineDiff, RegField, RegisterSnapshot};

/// Compare two snapshots field by field.
///
/// Values are compared as exact hex text. CB absent on both sides is
/// equal; CB present on exactly one side is itself a difference. An
/// empty result means the snapshots are identical.
#[must_use]
pub fn compare_snapshots(expected: &RegisterSnapshot, actual: &RegisterSnapshot) -> Vec<FieldDiff> {
    RegField::ALL
        .into_iter()
        .filter(|&field| expected.field(field) != actual.field(field))
        .map(|field| FieldDiff {
            field,
            expected: expected.field(field).map(str::to_string),
            actual: actual.field(field).map(str::to_string),
        })
        .collect()
}

/// Walk two register logs in lockstep and collect every difference.
///
/// Lines are compared up to the shorter length; a length mismatch is
/// informational, never a per-line difference. A line that fails to
/// parse on either side falls back to trimmed raw-text comparison and
/// is only a difference when the text differs. The first `cap`
/// differences are detailed; the rest are counted in `omitted`.
#[must_use]
pub fn compare_logs(expected: &[String], actual: &[String], cap: usize) -> CpuComparison {
    let compared = expected.len().min(actual.len());
    if expected.len() != actual.len() {
        warn!(
            expected = expected.len(),
            actual = actual.len(),
            "log lengths differ, comparing common prefix"
        );
    }

    let mut differences = Vec::new();
    let mut omitted = 0usize;
    let mut record = |diff: LineDiff| {
        if differences.len() < cap {
            differences.push(diff);
        } else {
            omitted += 1;
        }
    };

    for i in 0..compared {
        let line = i + 1;
        match (
            RegisterSnapshot::parse(&expected[i]),
            RegisterSnapshot::parse(&actual[i]),
        ) {
            (Some(exp), Some(act)) => {
                let fields = compare_snapshots(&exp, &act);
                if !fields.is_empty() {
                    record(LineDiff {
                        line,
                        detail: DiffDetail::Fields {
                            expected: exp,
                            actual: act,
                            fields,
                        },
                    });
                }
            }
            _ => {
                // Format mismatch: fall back to raw-text comparison.
                let exp = expected[i].trim();
                let act = actual[i].trim();
                if exp != act {
                    record(LineDiff {
                        line,
                        detail: DiffDetail::Unparsed {
                            expected: exp.to_string(),
                            actual: act.to_string(),
                        },
                    });
                }
            }
        }
    }

    debug!(
        compared,
        detailed = differences.len(),
        omitted,
        "register log comparison finished"
    );

    CpuComparison {
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
    use crate::cpu::CPU_DETAIL_CAP;

    fn snapshot_line() -> String {
        "PC=0100 OP=00 AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE".to_string()
    }

    fn lines(n: usize) -> Vec<String> {
        (0..n).map(|_| snapshot_line()).collect()
    }

    #[test]
    fn test_identical_logs_no_differences() {
        let log = lines(5);
        let result = compare_logs(&log, &log, CPU_DETAIL_CAP);

        assert_eq!(result.compared, 5);
        assert_eq!(result.total_differences(), 0);
        assert_eq!(result.length_mismatch(), 0);
    }

    #[test]
    fn test_empty_logs_identical() {
        let result = compare_logs(&[], &[], CPU_DETAIL_CAP);
        assert_eq!(result.compared, 0);
        assert_eq!(result.total_differences(), 0);
    }

    #[test]
    fn test_each_field_yields_exactly_one_diff() {
        // Changing one field's hex text on one side produces exactly one
        // FieldDiff naming that field.
        let cases = [
            ("PC=0100", "PC=0101", RegField::Pc),
            ("OP=00", "OP=01", RegField::Op),
            ("AF=01B0", "AF=01C0", RegField::Af),
            ("BC=0013", "BC=0014", RegField::Bc),
            ("DE=00D8", "DE=00D9", RegField::De),
            ("HL=014D", "HL=014E", RegField::Hl),
            ("SP=FFFE", "SP=FFFC", RegField::Sp),
        ];

        for (from, to, field) in cases {
            let expected = vec![snapshot_line()];
            let actual = vec![snapshot_line().replace(from, to)];
            let result = compare_logs(&expected, &actual, CPU_DETAIL_CAP);

            assert_eq!(result.differences.len(), 1, "field {field}");
            let DiffDetail::Fields { fields, .. } = &result.differences[0].detail else {
                panic!("expected field-level detail for {field}");
            };
            assert_eq!(fields.len(), 1, "field {field}");
            assert_eq!(fields[0].field, field);
        }
    }

    #[test]
    fn test_cb_on_one_side_only() {
        let expected = vec!["PC=0216 OP=CB CB=6C AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE".to_string()];
        let actual = vec!["PC=0216 OP=CB AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE".to_string()];
        let result = compare_logs(&expected, &actual, CPU_DETAIL_CAP);

        assert_eq!(result.differences.len(), 1);
        let DiffDetail::Fields { fields, .. } = &result.differences[0].detail else {
            panic!("expected field-level detail");
        };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, RegField::Cb);
        assert_eq!(fields[0].expected.as_deref(), Some("6C"));
        assert_eq!(fields[0].actual, None);
    }

    #[test]
    fn test_cb_equal_on_both_sides() {
        let log = vec!["PC=0216 OP=CB CB=6C AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE".to_string()];
        let result = compare_logs(&log, &log, CPU_DETAIL_CAP);
        assert_eq!(result.total_differences(), 0);
    }

    #[test]
    fn test_identical_prefix_with_length_mismatch() {
        // 5 vs 3 lines, first 3 identical: 3 compared, 0 content
        // differences, length mismatch of 2 - not 2 phantom differences.
        let expected = lines(5);
        let actual = lines(3);
        let result = compare_logs(&expected, &actual, CPU_DETAIL_CAP);

        assert_eq!(result.compared, 3);
        assert_eq!(result.total_differences(), 0);
        assert_eq!(result.length_mismatch(), 2);
    }

    #[test]
    fn test_unparsable_lines_fall_back_to_raw_compare() {
        let expected = vec!["boot rom disabled".to_string()];
        let actual = vec!["boot rom enabled".to_string()];
        let result = compare_logs(&expected, &actual, CPU_DETAIL_CAP);

        assert_eq!(result.differences.len(), 1);
        assert!(matches!(
            result.differences[0].detail,
            DiffDetail::Unparsed { .. }
        ));
    }

    #[test]
    fn test_unparsable_but_equal_lines_match() {
        let log = vec!["boot rom disabled".to_string()];
        let result = compare_logs(&log, &log, CPU_DETAIL_CAP);
        assert_eq!(result.total_differences(), 0);
    }

    #[test]
    fn test_cap_limits_detail_but_counts_rest() {
        // 2N differing lines with cap N: N detailed, N omitted.
        let n = CPU_DETAIL_CAP;
        let expected: Vec<String> = (0..2 * n).map(|_| snapshot_line()).collect();
        let actual: Vec<String> = (0..2 * n)
            .map(|_| snapshot_line().replace("AF=01B0", "AF=0FF0"))
            .collect();
        let result = compare_logs(&expected, &actual, n);

        assert_eq!(result.differences.len(), n);
        assert_eq!(result.omitted, n);
        assert_eq!(result.total_differences(), 2 * n);
        assert_eq!(result.differences[0].line, 1);
    }
}
