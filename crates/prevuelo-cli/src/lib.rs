//! Prevuelo CLI Library
//!
//! Terminal rendering of the pre-flight dashboard: argument parsing,
//! output formatting, and replay of recorded driver event streams.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod commands;
mod config;
mod error;
mod output;
mod replay;

pub use commands::{Cli, Commands, ReplayArgs};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};
pub use output::TerminalView;
pub use replay::{distinct_tests, read_events, run_replay, DriverEvent};
