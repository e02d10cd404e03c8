//! Terminal rendering of the dashboard.
//!
//! Implements the core's view seam with console styling and an indicatif
//! progress bar: test cards become status lines, the status log becomes a
//! scrolling console, and the terminal summary becomes a final panel.

use crate::config::CliConfig;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use prevuelo::{DashboardView, LogCategory, LogEntry, ReportOutcome, RunSummary, TestRecord, TestStatus};

/// Icon for a test status line
fn status_icon(status: TestStatus) -> &'static str {
    match status {
        TestStatus::Testing => "⏳",
        TestStatus::Passed => "✅",
        TestStatus::Failed => "❌",
        TestStatus::Warning => "⚠️",
    }
}

/// Icon for a log console line
fn category_icon(category: LogCategory) -> &'static str {
    match category {
        LogCategory::Info => "ℹ️",
        LogCategory::Success => "✅",
        LogCategory::Warning => "⚠️",
        LogCategory::Error => "❌",
    }
}

/// Dashboard view rendered onto a terminal
#[derive(Debug)]
pub struct TerminalView {
    term: Term,
    progress: Option<ProgressBar>,
    use_color: bool,
    quiet: bool,
}

impl TerminalView {
    /// Create a view from the CLI configuration
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            term: Term::stderr(),
            progress: None,
            use_color: config.color.should_color(),
            quiet: config.verbosity.is_quiet(),
        }
    }

    /// Attach a progress bar spanning `total` tests
    pub fn start_progress(&mut self, total: u64) {
        if self.quiet || total == 0 {
            return;
        }
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {percent}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        self.progress = Some(bar);
    }

    /// Finish and detach the progress bar
    pub fn finish_progress(&mut self) {
        if let Some(bar) = self.progress.take() {
            bar.finish_and_clear();
        }
    }

    fn write_line(&self, line: &str) {
        match &self.progress {
            // suspend keeps the bar pinned below scrolling output
            Some(bar) => bar.suspend(|| {
                let _ = self.term.write_line(line);
            }),
            None => {
                let _ = self.term.write_line(line);
            }
        }
    }

    fn styled_category(&self, category: LogCategory, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match category {
            LogCategory::Info => style(text).dim().to_string(),
            LogCategory::Success => style(text).green().to_string(),
            LogCategory::Warning => style(text).yellow().to_string(),
            LogCategory::Error => style(text).red().to_string(),
        }
    }
}

impl DashboardView for TerminalView {
    fn card_upserted(&mut self, record: &TestRecord, outcome: &ReportOutcome) {
        if self.quiet && !record.status.is_failed() {
            return;
        }
        let verb = if outcome.newly_created { "started" } else { "updated" };
        let details = if record.details.is_empty() {
            String::new()
        } else {
            format!(" - {}", record.details)
        };
        let line = format!(
            "{} {} [{verb}]{details}",
            status_icon(record.status),
            record.name
        );
        self.write_line(&self.styled_category(record.status.log_category(), &line));
    }

    fn progress_changed(&mut self, percentage: u8) {
        if let Some(bar) = &self.progress {
            let position = u64::from(percentage) * bar.length().unwrap_or(100) / 100;
            bar.set_position(position);
        }
    }

    fn log_appended(&mut self, entry: &LogEntry) {
        // failures always surface; everything else respects quiet mode
        if self.quiet && entry.category != LogCategory::Error {
            return;
        }
        let line = format!(
            "[{}] {} {}",
            entry.stamp,
            category_icon(entry.category),
            entry.message
        );
        self.write_line(&self.styled_category(entry.category, &line));
    }

    fn run_complete(&mut self, summary: &RunSummary) {
        self.finish_progress();
        let headline = if summary.is_clean() {
            "Testing complete - all checks passed"
        } else {
            "Testing complete"
        };
        let line = format!(
            "{headline}: {} passed, {} warnings, {} failed",
            summary.passed, summary.warning, summary.failed
        );
        let styled = if !self.use_color {
            line
        } else if summary.failed > 0 {
            style(line).red().bold().to_string()
        } else if summary.warning > 0 {
            style(line).yellow().bold().to_string()
        } else {
            style(line).green().bold().to_string()
        };
        self.write_line(&styled);
    }
}
