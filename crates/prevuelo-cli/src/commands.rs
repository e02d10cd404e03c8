//! Command-line argument definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Prevuelo: pre-flight testing dashboard
#[derive(Debug, Parser)]
#[command(name = "prevuelo", version, about = "Pre-flight testing dashboard", long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Failures only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Extra output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replay a recorded driver event stream into the dashboard
    Replay(ReplayArgs),
}

/// Arguments for `prevuelo replay`
#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSONL file of driver events: one {"test", "status", "details"} per line
    pub events: PathBuf,

    /// Declared number of tests (defaults to distinct names in the stream)
    #[arg(long)]
    pub total: Option<usize>,

    /// Directory to export the status log into after the run
    #[arg(long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Preference document governing the verbose/simple debug mode
    #[arg(long, value_name = "FILE", default_value = ".prevuelo/preferences.json")]
    pub prefs: PathBuf,

    /// Toggle the debug mode before replaying (persisted, like the
    /// dashboard's toggle control)
    #[arg(long)]
    pub toggle_debug: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::try_parse_from(["prevuelo", "replay", "events.jsonl"]).unwrap();
        let Commands::Replay(args) = cli.command;
        assert_eq!(args.events, PathBuf::from("events.jsonl"));
        assert_eq!(args.total, None);
        assert!(!args.toggle_debug);
    }

    #[test]
    fn test_parse_replay_flags() {
        let cli = Cli::try_parse_from([
            "prevuelo",
            "replay",
            "run.jsonl",
            "--total",
            "12",
            "--export",
            "out",
            "--toggle-debug",
            "--quiet",
        ])
        .unwrap();
        assert!(cli.quiet);
        let Commands::Replay(args) = cli.command;
        assert_eq!(args.total, Some(12));
        assert_eq!(args.export, Some(PathBuf::from("out")));
        assert!(args.toggle_debug);
    }

    #[test]
    fn test_quiet_verbose_conflict() {
        let result = Cli::try_parse_from(["prevuelo", "--quiet", "--verbose", "replay", "e"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["prevuelo"]).is_err());
    }
}
