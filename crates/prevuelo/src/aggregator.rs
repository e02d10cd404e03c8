//! Test result aggregation and progress counters.

use crate::record::TestRecord;
use crate::status::TestStatus;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// What a single report changed, for the rendering collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOutcome {
    /// A record was created rather than updated
    pub newly_created: bool,
    /// This report was the first terminal status for its test
    pub newly_completed: bool,
    /// Completion percentage after the report
    pub percentage: u8,
}

/// Counts of terminal statuses across all records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tests that passed
    pub passed: usize,
    /// Tests that completed with a warning
    pub warning: usize,
    /// Tests that failed
    pub failed: usize,
}

impl RunSummary {
    /// Check if no test failed or warned
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed == 0 && self.warning == 0
    }
}

/// Tracks per-test records and completion progress.
///
/// `total` is external input, set once before the run. `completed` advances
/// exactly once per test name, on its first terminal report; repeated
/// terminal reports for the same name update the record but never the
/// counter. Records are kept in first-report order.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    total: usize,
    records: Vec<TestRecord>,
    index: HashMap<String, usize>,
}

impl ResultAggregator {
    /// Create an aggregator expecting `total` tests
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Register or update the record for `name`.
    ///
    /// Synchronous single-owner mutation; nothing here suspends or retries.
    pub fn report(
        &mut self,
        name: &str,
        status: TestStatus,
        details: impl Into<String>,
    ) -> ReportOutcome {
        let (newly_created, newly_completed) = match self.index.get(name) {
            Some(&slot) => {
                let record = &mut self.records[slot];
                let was_terminal = record.status.is_terminal();
                record.apply(status, details);
                (false, !was_terminal && status.is_terminal())
            }
            None => {
                self.index.insert(name.to_string(), self.records.len());
                self.records.push(TestRecord::new(name, status, details));
                (true, status.is_terminal())
            }
        };

        ReportOutcome {
            newly_created,
            newly_completed,
            percentage: self.percentage(),
        }
    }

    /// Declared number of tests in this run
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Completed count: distinct names whose most recent status is
    /// terminal, clamped so it never exceeds `total`.
    ///
    /// A driver that reports more distinct names than it declared saturates
    /// here instead of pushing the percentage past 100.
    #[must_use]
    pub fn completed(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status.is_terminal())
            .count()
            .min(self.total)
    }

    /// Completion percentage, 0..=100.
    ///
    /// `total == 0` is a defined edge, not a division error: the result is 0.
    #[must_use]
    pub fn percentage(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        (self.completed() as f64 / self.total as f64 * 100.0).round() as u8
    }

    /// Check if every declared test has reached a terminal status
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed() == self.total
    }

    /// Counts of passed/warning/failed records
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::default();
        for record in &self.records {
            match record.status {
                TestStatus::Passed => summary.passed += 1,
                TestStatus::Warning => summary.warning += 1,
                TestStatus::Failed => summary.failed += 1,
                TestStatus::Testing => {}
            }
        }
        summary
    }

    /// Look up a record by test name
    #[must_use]
    pub fn record(&self, name: &str) -> Option<&TestRecord> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    /// All records in first-report order
    #[must_use]
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }
}
