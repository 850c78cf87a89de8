//! CLI definitions and argument types.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gbdiff::cpu::CPU_DETAIL_CAP;

/// Exit code for "no divergence".
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for "divergence found".
pub const EXIT_DIVERGENCE: i32 = 1;
/// Exit code for "could not read input".
pub const EXIT_ERROR: i32 = 2;

#[derive(Parser)]
#[command(name = "gbdiff")]
#[command(about = "Game Boy trace differ - locates emulator divergence against a reference log")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (sets RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output (only show errors)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub silent: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare CPU register-snapshot logs line by line
    Cpu {
        /// Log from the emulator under test
        #[arg(value_name = "ACTUAL", default_value = "out_ours.txt")]
        actual: PathBuf,

        /// Reference log (e.g. captured from SameBoy)
        #[arg(value_name = "EXPECTED", default_value = "out_sameboy.txt")]
        expected: PathBuf,

        /// Differences to report in detail; further ones are only counted
        #[arg(long, default_value_t = CPU_DETAIL_CAP)]
        limit: usize,
    },
    /// Compare memory-bus write logs
    Bus {
        /// Log from the emulator under test
        #[arg(value_name = "ACTUAL")]
        actual: PathBuf,

        /// Reference log (e.g. captured from SameBoy)
        #[arg(value_name = "EXPECTED")]
        expected: PathBuf,

        /// Scan mode
        #[arg(long, value_enum, default_value = "first")]
        mode: BusModeArg,
    },
    /// Compare logs line by line without any field parsing
    Raw {
        /// Log from the emulator under test
        #[arg(value_name = "ACTUAL")]
        actual: PathBuf,

        /// Reference log
        #[arg(value_name = "EXPECTED")]
        expected: PathBuf,
    },
}

/// Bus scan mode.
#[derive(Clone, Copy, Debug, ValueEnum, Default)]
pub enum BusModeArg {
    /// Stop at the first mismatching write and exit non-zero (default)
    #[default]
    First,
    /// Enumerate every mismatching write, capped
    Full,
}
