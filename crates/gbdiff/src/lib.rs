//! gbdiff - Game Boy execution-trace differ
//!
//! Compares trace logs captured from two Game Boy emulator implementations
//! (typically the emulator under development and a reference such as SameBoy)
//! to locate the first point of behavioral divergence.
//!
//! Two log grammars are understood: CPU register snapshots
//! (`PC=0100 OP=00 AF=01B0 ...`) and memory-bus write events
//! (`... PC:C373 ADDR:FF00 VAL:1A` or the legacy `PC=C373 ADDR=FF00 VAL=1A`).
//! A third comparator works on raw lines without any field parsing.
//!
//! # Example
//!
//! ```ignore
//! use gbdiff::{cpu, report};
//!
//! let expected = gbdiff::io::read_log_lines("out_sameboy.txt".as_ref())?;
//! let actual = gbdiff::io::read_log_lines("out_ours.txt".as_ref())?;
//! let comparison = cpu::compare_logs(&expected, &actual, cpu::CPU_DETAIL_CAP);
//! print!("{}", report::render_cpu(&comparison));
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod bus;
pub mod cpu;
pub mod io;
pub mod raw;
pub mod report;

pub use bus::{BusComparison, BusDivergence, BusWrite, DivergenceScan};
pub use cpu::{CpuComparison, FieldDiff, LineDiff, RegField, RegisterSnapshot};
pub use raw::RawComparison;

/// Differ errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot open log file {path}: {source}")]
    OpenLog {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
