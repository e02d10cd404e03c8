//! Replay of recorded driver event streams.
//!
//! The external test driver is out of scope; what it produces is a JSONL
//! stream of status transitions. Replay feeds that stream through a
//! dashboard session and renders it live.

use crate::commands::ReplayArgs;
use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use crate::output::TerminalView;
use prevuelo::{Dashboard, DashboardView, JsonPreferences, LogCategory, MirrorSink, TestStatus};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing_subscriber::prelude::*;

/// One driver-reported status transition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DriverEvent {
    /// Test name
    pub test: String,
    /// Reported status
    pub status: TestStatus,
    /// Free-text details
    #[serde(default)]
    pub details: String,
}

/// Parse a JSONL event stream; blank lines are skipped
pub fn read_events(path: &Path) -> CliResult<Vec<DriverEvent>> {
    let text = fs::read_to_string(path)?;
    let mut events = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let event: DriverEvent = serde_json::from_str(line)
            .map_err(|e| CliError::invalid_event(idx + 1, e.to_string()))?;
        events.push(event);
    }
    Ok(events)
}

/// Number of distinct test names in the stream
#[must_use]
pub fn distinct_tests(events: &[DriverEvent]) -> usize {
    events
        .iter()
        .map(|e| e.test.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Run `prevuelo replay`
pub fn run_replay(config: &CliConfig, args: &ReplayArgs) -> CliResult<()> {
    let events = read_events(&args.events)?;
    let total = args.total.unwrap_or_else(|| distinct_tests(&events));

    let prefs = JsonPreferences::new(&args.prefs);
    let mut dash = Dashboard::new(total, prefs);

    // diagnostics and host panics land in the visible log, not just stderr
    let sink = MirrorSink::new(dash.log_handle(), dash.mode_flag());
    let _ = tracing_subscriber::registry().with(sink).try_init();
    prevuelo::install_panic_observer(dash.log_handle());
    tracing::info!("prevuelo {} (session {})", env!("CARGO_PKG_VERSION"), dash.session());

    let mut view = TerminalView::new(config);
    for entry in prevuelo::log::lock(&dash.log_handle()).iter() {
        view.log_appended(entry);
    }
    view.start_progress(total as u64);

    if args.toggle_debug {
        dash.toggle_debug(&mut view)?;
    }

    dash.append_status(
        format!("Replaying {} events from {}", events.len(), args.events.display()),
        LogCategory::Info,
        &mut view,
    );
    dash.mark_milestone("events loaded", &mut view);

    for event in &events {
        dash.report_test_result(&event.test, event.status, &event.details, &mut view);
    }

    dash.report_milestones(&mut view);
    view.finish_progress();

    if !dash.is_complete() {
        let summary = dash.summary();
        dash.append_status(
            format!(
                "Replay ended before completion: {}% ({} passed, {} warnings, {} failed)",
                dash.percentage(),
                summary.passed,
                summary.warning,
                summary.failed
            ),
            LogCategory::Warning,
            &mut view,
        );
    }

    if let Some(dir) = &args.export {
        fs::create_dir_all(dir)?;
        let path = dash.export_logs(dir, &mut view)?;
        dash.append_status(
            format!("Export written to {}", path.display()),
            LogCategory::Info,
            &mut view,
        );
    }

    Ok(())
}
