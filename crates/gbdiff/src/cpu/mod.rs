//! CPU register-snapshot log comparison.
//!
//! Compares per-instruction register dumps between the emulator under test
//! and a reference emulator, field by field, to catch bugs at the
//! instruction level rather than just end-state.

mod compare;
mod parse;

pub use compare::{compare_logs, compare_snapshots};

/// Detailed entries reported per run; further differences are only counted.
pub const CPU_DETAIL_CAP: usize = 10;

/// One parsed register-snapshot line.
///
/// Field values are kept as the hex text captured from the log (already
/// uppercase at the source) and compared as opaque strings, so a parsed
/// snapshot can always be printed back exactly as logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSnapshot {
    /// Program counter.
    pub pc: String,
    /// Opcode byte.
    pub op: String,
    /// Extended opcode byte, present only for CB-prefixed instructions.
    pub cb: Option<String>,
    /// AF register pair.
    pub af: String,
    /// BC register pair.
    pub bc: String,
    /// DE register pair.
    pub de: String,
    /// HL register pair.
    pub hl: String,
    /// Stack pointer.
    pub sp: String,
    /// The trimmed original line.
    pub raw: String,
}

impl RegisterSnapshot {
    /// Value of a field, `None` when the snapshot does not carry it (CB).
    #[must_use]
    pub fn field(&self, field: RegField) -> Option<&str> {
        match field {
            RegField::Pc => Some(&self.pc),
            RegField::Op => Some(&self.op),
            RegField::Cb => self.cb.as_deref(),
            RegField::Af => Some(&self.af),
            RegField::Bc => Some(&self.bc),
            RegField::De => Some(&self.de),
            RegField::Hl => Some(&self.hl),
            RegField::Sp => Some(&self.sp),
        }
    }
}

/// Fields of a register snapshot, in comparison and report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegField {
    Pc,
    Op,
    Cb,
    Af,
    Bc,
    De,
    Hl,
    Sp,
}

impl RegField {
    /// All fields in the order they are compared and reported.
    pub const ALL: [Self; 8] = [
        Self::Pc,
        Self::Op,
        Self::Cb,
        Self::Af,
        Self::Bc,
        Self::De,
        Self::Hl,
        Self::Sp,
    ];
}

impl std::fmt::Display for RegField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pc => "PC",
            Self::Op => "OP",
            Self::Cb => "CB",
            Self::Af => "AF",
            Self::Bc => "BC",
            Self::De => "DE",
            Self::Hl => "HL",
            Self::Sp => "SP",
        };
        write!(f, "{name}")
    }
}

/// A single mismatching field between two snapshots.
///
/// `None` on one side means that side's snapshot lacked the field
/// entirely (only possible for CB).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDiff {
    pub field: RegField,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

/// One differing line, in scan order.
#[derive(Debug, Clone)]
pub struct LineDiff {
    /// 1-based line number.
    pub line: usize,
    pub detail: DiffDetail,
}

/// What was known about a differing line.
#[derive(Debug, Clone)]
pub enum DiffDetail {
    /// Both sides parsed; the listed fields mismatched.
    Fields {
        expected: RegisterSnapshot,
        actual: RegisterSnapshot,
        fields: Vec<FieldDiff>,
    },
    /// At least one side failed to parse and the raw text differs.
    Unparsed { expected: String, actual: String },
}

/// Result of comparing two register logs.
#[derive(Debug)]
pub struct CpuComparison {
    /// Line count of the reference log.
    pub expected_lines: usize,
    /// Line count of the log under test.
    pub actual_lines: usize,
    /// Number of line pairs compared (the shorter length).
    pub compared: usize,
    /// Differences in scan order, detailed up to the configured cap.
    pub differences: Vec<LineDiff>,
    /// Differences found beyond the cap, counted but not detailed.
    pub omitted: usize,
}

impl CpuComparison {
    /// Total differences found, detailed or not.
    #[must_use]
    pub fn total_differences(&self) -> usize {
        self.differences.len() + self.omitted
    }

    /// Extra lines in the longer log, zero when lengths match.
    #[must_use]
    pub fn length_mismatch(&self) -> usize {
        self.expected_lines.abs_diff(self.actual_lines)
    }
}
