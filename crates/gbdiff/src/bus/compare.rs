use tracing::{debug, warn};

use super::{
    BUS_DETAIL_CAP, BusComparison, BusDiff, BusDivergence, BusField, BusWrite, CONTEXT_WINDOW,
    ContextPair, DivergenceScan,
};

fn mismatched_fields(expected: BusWrite, actual: BusWrite) -> Vec<BusField> {
    let mut fields = Vec::new();
    if expected.pc != actual.pc {
        fields.push(BusField::Pc);
    }
    if expected.addr != actual.addr {
        fields.push(BusField::Addr);
    }
    if expected.val != actual.val {
        fields.push(BusField::Val);
    }
    fields
}

/// Walk both write streams in lockstep and stop at the first mismatch.
///
/// Indices run over valid writes (malformed lines were filtered at
/// parse time). The divergence carries up to [`CONTEXT_WINDOW`] write
/// pairs on each side as context.
#[must_use]
pub fn first_divergence(expected: &[BusWrite], actual: &[BusWrite]) -> DivergenceScan {
    let compared = expected.len().min(actual.len());
    if expected.len() != actual.len() {
        warn!(
            expected = expected.len(),
            actual = actual.len(),
            "bus logs have different lengths"
        );
    }

    let divergence = (0..compared)
        .find(|&i| expected[i] != actual[i])
        .map(|i| {
            let context = |range: std::ops::Range<usize>| {
                range
                    .map(|j| ContextPair {
                        number: j + 1,
                        expected: expected[j],
                        actual: actual[j],
                    })
                    .collect()
            };
            BusDivergence {
                number: i + 1,
                expected: expected[i],
                actual: actual[i],
                before: context(i.saturating_sub(CONTEXT_WINDOW)..i),
                after: context(i + 1..compared.min(i + 1 + CONTEXT_WINDOW)),
            }
        });

    DivergenceScan {
        expected_writes: expected.len(),
        actual_writes: actual.len(),
        compared,
        divergence,
    }
}

/// Walk both write streams in lockstep and collect every mismatching
/// pair, detailed up to [`BUS_DETAIL_CAP`], counting the rest.
#[must_use]
pub fn compare_writes(expected: &[BusWrite], actual: &[BusWrite]) -> BusComparison {
    let compared = expected.len().min(actual.len());
    let mut differences = Vec::new();
    let mut omitted = 0usize;

    for i in 0..compared {
        let fields = mismatched_fields(expected[i], actual[i]);
        if fields.is_empty() {
            continue;
        }
        if differences.len() < BUS_DETAIL_CAP {
            differences.push(BusDiff {
                number: i + 1,
                expected: expected[i],
                actual: actual[i],
                fields,
            });
        } else {
            omitted += 1;
        }
    }

    debug!(
        compared,
        detailed = differences.len(),
        omitted,
        "bus log comparison finished"
    );

    BusComparison {
        expected_writes: expected.len(),
        actual_writes: actual.len(),
        compared,
        differences,
        omitted,
    }
}
