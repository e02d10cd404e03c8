//! Wall-clock milestones for the setup run.
//!
//! Marks are mirrored into the status log as they happen; the final report
//! emits a total, plus one line per milestone in verbose mode.

use crate::log::{LogCategory, LogEntry, StatusLog};
use crate::mode::DebugMode;
use std::time::{Duration, Instant};

/// A named point in time relative to tracker creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Milestone name
    pub name: String,
    /// Time since the tracker started
    pub elapsed: Duration,
}

/// Records named milestones against a start instant
#[derive(Debug)]
pub struct MilestoneTracker {
    start: Instant,
    milestones: Vec<Milestone>,
}

impl Default for MilestoneTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MilestoneTracker {
    /// Start the clock
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            milestones: Vec::new(),
        }
    }

    /// Record a milestone and log it, returning the appended entry
    pub fn mark(&mut self, name: impl Into<String>, log: &mut StatusLog) -> LogEntry {
        let name = name.into();
        let elapsed = self.start.elapsed();
        let entry = log.append(
            format!("Milestone: {name} ({}ms)", elapsed.as_millis()),
            LogCategory::Info,
        );
        self.milestones.push(Milestone { name, elapsed });
        entry
    }

    /// Log the total elapsed time, with per-milestone detail in verbose
    /// mode, returning the appended entries
    pub fn report(&self, log: &mut StatusLog, mode: DebugMode) -> Vec<LogEntry> {
        let total = self.start.elapsed();
        let mut appended = vec![log.append(
            format!("Total execution time: {}ms", total.as_millis()),
            LogCategory::Success,
        )];
        if mode.is_verbose() {
            for milestone in &self.milestones {
                appended.push(log.append(
                    format!("  {}: {}ms", milestone.name, milestone.elapsed.as_millis()),
                    LogCategory::Info,
                ));
            }
        }
        appended
    }

    /// Milestones recorded so far, in order
    #[must_use]
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }
}
