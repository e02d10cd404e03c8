//! Dashboard session state.
//!
//! One `Dashboard` is constructed per session and owns the aggregator, the
//! status log, the mode flag, the milestone tracker, and the preference
//! store. Every inbound operation is a synchronous mutation that pushes the
//! resulting changes to the caller's [`DashboardView`]; nothing here is
//! ambient or global.

use crate::aggregator::{ReportOutcome, ResultAggregator, RunSummary};
use crate::export;
use crate::log::{self, LogCategory, LogEntry, SharedLog, StatusLog};
use crate::milestones::MilestoneTracker;
use crate::mode::{self, DebugMode, ModeEffect, ModeFlag};
use crate::prefs::PreferenceStore;
use crate::record::TestRecord;
use crate::result::PrevueloResult;
use crate::session::SessionId;
use crate::status::TestStatus;
use crate::view::DashboardView;
use std::path::{Path, PathBuf};

/// Owned state for one dashboard session
#[derive(Debug)]
pub struct Dashboard<S: PreferenceStore> {
    session: SessionId,
    aggregator: ResultAggregator,
    log: SharedLog,
    mode: ModeFlag,
    milestones: MilestoneTracker,
    prefs: S,
    summary_announced: bool,
}

impl<S: PreferenceStore> Dashboard<S> {
    /// Create a session expecting `total` tests.
    ///
    /// The persisted mode preference is restored (default verbose), a
    /// session identifier is generated, and the initialization is logged.
    pub fn new(total: usize, prefs: S) -> Self {
        let session = SessionId::generate();
        let mode = ModeFlag::new(mode::restore(prefs.load_mode()));
        let log = log::shared(StatusLog::new());
        log::lock(&log).append(
            format!("Pre-flight dashboard initialized (session {session})"),
            LogCategory::Success,
        );
        Self {
            session,
            aggregator: ResultAggregator::new(total),
            log,
            mode,
            milestones: MilestoneTracker::new(),
            prefs,
            summary_announced: false,
        }
    }

    /// Inbound reporting call: a test reached `status` with `details`.
    ///
    /// Updates the record and counters, logs the transition, and notifies
    /// the view of the card, the progress (when it advanced), and the
    /// terminal summary (once, when the run completes).
    pub fn report_test_result(
        &mut self,
        name: &str,
        status: TestStatus,
        details: &str,
        view: &mut dyn DashboardView,
    ) -> ReportOutcome {
        let outcome = self.aggregator.report(name, status, details);
        let record = self
            .aggregator
            .record(name)
            .cloned()
            .unwrap_or_else(|| TestRecord::new(name, status, details));
        view.card_upserted(&record, &outcome);

        if outcome.newly_completed {
            view.progress_changed(outcome.percentage);
        }

        let mut message = format!("Test: {name} - {}", status.as_str().to_uppercase());
        if !details.is_empty() {
            message.push_str(&format!(" ({details})"));
        }
        let entry = log::lock(&self.log).append(message, status.log_category());
        view.log_appended(&entry);

        if self.aggregator.is_complete() && !self.summary_announced {
            self.summary_announced = true;
            let summary = self.aggregator.summary();
            let entry = log::lock(&self.log).append(
                format!(
                    "Testing complete: {} passed, {} warnings, {} failed",
                    summary.passed, summary.warning, summary.failed
                ),
                LogCategory::Success,
            );
            view.log_appended(&entry);
            view.run_complete(&summary);
        }

        outcome
    }

    /// Append a free-form status entry
    pub fn append_status(
        &mut self,
        message: impl Into<String>,
        category: LogCategory,
        view: &mut dyn DashboardView,
    ) -> LogEntry {
        let entry = log::lock(&self.log).append(message, category);
        view.log_appended(&entry);
        entry
    }

    /// Toggle the debug mode, applying the transition's effects.
    ///
    /// The announcement lands in the log and the view; the new mode is
    /// persisted for the next session.
    pub fn toggle_debug(&mut self, view: &mut dyn DashboardView) -> PrevueloResult<DebugMode> {
        let (next, effects) = mode::toggle(self.mode.get());
        self.mode.set(next);
        for effect in effects {
            match effect {
                ModeEffect::Announce { message, category } => {
                    let entry = log::lock(&self.log).append(message, category);
                    view.log_appended(&entry);
                }
                ModeEffect::Persist(mode) => self.prefs.store_mode(mode)?,
            }
        }
        Ok(next)
    }

    /// Clear the status log; the clear notice is the sole surviving entry
    pub fn clear_log(&mut self, view: &mut dyn DashboardView) {
        let entry = log::lock(&self.log).clear();
        view.log_appended(&entry);
    }

    /// Export the log into `dir` and notify the view of the success notice
    pub fn export_logs(
        &mut self,
        dir: &Path,
        view: &mut dyn DashboardView,
    ) -> PrevueloResult<PathBuf> {
        let path = {
            let mut guard = log::lock(&self.log);
            export::export_to_dir(&mut guard, dir)?
        };
        if let Some(entry) = log::lock(&self.log).iter().last().cloned() {
            view.log_appended(&entry);
        }
        Ok(path)
    }

    /// Record a named milestone
    pub fn mark_milestone(&mut self, name: impl Into<String>, view: &mut dyn DashboardView) {
        let entry = self.milestones.mark(name, &mut log::lock(&self.log));
        view.log_appended(&entry);
    }

    /// Log the milestone report for this session
    pub fn report_milestones(&mut self, view: &mut dyn DashboardView) {
        let entries = self
            .milestones
            .report(&mut log::lock(&self.log), self.mode.get());
        for entry in &entries {
            view.log_appended(entry);
        }
    }

    /// Session identifier
    #[must_use]
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    /// Current debug mode
    #[must_use]
    pub fn mode(&self) -> DebugMode {
        self.mode.get()
    }

    /// Shared mode flag, for wiring the mirror sink
    #[must_use]
    pub fn mode_flag(&self) -> ModeFlag {
        self.mode.clone()
    }

    /// Shared log handle, for wiring the mirror sink and panic observer
    #[must_use]
    pub fn log_handle(&self) -> SharedLog {
        self.log.clone()
    }

    /// Completion percentage
    #[must_use]
    pub fn percentage(&self) -> u8 {
        self.aggregator.percentage()
    }

    /// Terminal status counts
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        self.aggregator.summary()
    }

    /// Check if every declared test completed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.aggregator.is_complete()
    }

    /// The aggregator's records, in first-report order
    #[must_use]
    pub fn records(&self) -> &[TestRecord] {
        self.aggregator.records()
    }
}
