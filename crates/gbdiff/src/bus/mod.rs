//! Memory-bus write-log comparison.
//!
//! A bus log records one memory-mapped write per line: the program
//! counter at the time of the write, the target address, and the value.
//! Lines that don't describe a complete write (banner output, partial
//! dumps) are dropped at parse time, so comparison indices count valid
//! writes, not raw lines.

mod compare;
mod parse;

pub use compare::{compare_writes, first_divergence};
pub use parse::parse_log;

/// Detailed entries reported by the exhaustive scan.
pub const BUS_DETAIL_CAP: usize = 50;

/// Valid writes shown on each side of a divergence as context.
pub const CONTEXT_WINDOW: usize = 3;

/// A single captured bus write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusWrite {
    /// Program counter at the time of the write.
    pub pc: u16,
    /// Target address.
    pub addr: u16,
    /// Value written.
    pub val: u8,
}

impl std::fmt::Display for BusWrite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PC=0x{:04X} ADDR=0x{:04X} VAL=0x{:02X}",
            self.pc, self.addr, self.val
        )
    }
}

/// Fields of a bus write, in comparison and report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusField {
    Pc,
    Addr,
    Val,
}

impl std::fmt::Display for BusField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Pc => "PC",
            Self::Addr => "ADDR",
            Self::Val => "VAL",
        };
        write!(f, "{name}")
    }
}

/// One differing write pair from the exhaustive scan.
#[derive(Debug, Clone)]
pub struct BusDiff {
    /// 1-based write number (over valid writes, not raw lines).
    pub number: usize,
    pub expected: BusWrite,
    pub actual: BusWrite,
    /// Which of the three fields mismatched.
    pub fields: Vec<BusField>,
}

/// Result of the exhaustive bus scan.
#[derive(Debug)]
pub struct BusComparison {
    /// Valid writes parsed from the reference log.
    pub expected_writes: usize,
    /// Valid writes parsed from the log under test.
    pub actual_writes: usize,
    /// Write pairs compared (the shorter count).
    pub compared: usize,
    /// Differences in scan order, detailed up to [`BUS_DETAIL_CAP`].
    pub differences: Vec<BusDiff>,
    /// Differences beyond the cap, counted but not detailed.
    pub omitted: usize,
}

impl BusComparison {
    /// Total differences found, detailed or not.
    #[must_use]
    pub fn total_differences(&self) -> usize {
        self.differences.len() + self.omitted
    }
}

/// A context pair surrounding a divergence: write number plus the
/// records both logs hold at that position.
#[derive(Debug, Clone, Copy)]
pub struct ContextPair {
    /// 1-based write number.
    pub number: usize,
    pub expected: BusWrite,
    pub actual: BusWrite,
}

/// The first mismatching write pair, with surrounding context.
#[derive(Debug, Clone)]
pub struct BusDivergence {
    /// 1-based write number of the divergence.
    pub number: usize,
    pub expected: BusWrite,
    pub actual: BusWrite,
    /// Up to [`CONTEXT_WINDOW`] matching pairs before the divergence.
    pub before: Vec<ContextPair>,
    /// Up to [`CONTEXT_WINDOW`] pairs after the divergence.
    pub after: Vec<ContextPair>,
}

/// Result of the first-divergence bus scan.
#[derive(Debug)]
pub struct DivergenceScan {
    /// Valid writes parsed from the reference log.
    pub expected_writes: usize,
    /// Valid writes parsed from the log under test.
    pub actual_writes: usize,
    /// Write pairs in the comparable prefix (the shorter count).
    pub compared: usize,
    /// The first divergence, `None` when the prefix matches.
    pub divergence: Option<BusDivergence>,
}
