//! Rendering collaborator seam.
//!
//! The dashboard core pushes updates through this trait; the visual form
//! (cards, colors, icons, scrollback) belongs entirely to implementations.

use crate::aggregator::{ReportOutcome, RunSummary};
use crate::log::LogEntry;
use crate::record::TestRecord;

/// Consumer of dashboard state changes
pub trait DashboardView {
    /// A test card was created or updated
    fn card_upserted(&mut self, record: &TestRecord, outcome: &ReportOutcome) {
        let _ = (record, outcome);
    }

    /// The completion percentage changed
    fn progress_changed(&mut self, percentage: u8) {
        let _ = percentage;
    }

    /// An entry was appended to the status log
    fn log_appended(&mut self, entry: &LogEntry) {
        let _ = entry;
    }

    /// Every declared test reached a terminal status
    fn run_complete(&mut self, summary: &RunSummary) {
        let _ = summary;
    }
}

/// View that ignores every update; useful in tests and headless runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl DashboardView for NullView {}
