//! Prevuelo CLI: terminal pre-flight dashboard
//!
//! ## Usage
//!
//! ```bash
//! prevuelo replay run.jsonl                 # Replay a recorded run
//! prevuelo replay run.jsonl --export logs   # Export the status log after
//! prevuelo replay run.jsonl --toggle-debug  # Flip verbose/simple first
//! ```

use clap::Parser;
use prevuelo_cli::{run_replay, Cli, CliConfig, CliResult, ColorChoice, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    match &cli.command {
        Commands::Replay(args) => run_replay(&config, args),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let verbosity = if cli.quiet {
        Verbosity::Quiet
    } else if cli.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    CliConfig::new().with_verbosity(verbosity).with_color(color)
}
