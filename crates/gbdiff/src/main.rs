//! gbdiff CLI - Game Boy trace differ

mod cli;
mod commands;
mod terminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; -v raises the level, -s drops to errors only.
    let default_level = if cli.silent {
        "gbdiff=error"
    } else if cli.verbose {
        "gbdiff=debug"
    } else {
        "gbdiff=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(default_level.parse().unwrap()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = commands::run_command(&cli);
    std::process::exit(exit_code);
}
