//! Capacity-bounded status log.
//!
//! The log is an append-only ordered sequence of timestamped, categorized
//! entries. It is bounded at [`LOG_CAPACITY`] entries; appending at capacity
//! evicts from the head, oldest first. Clearing is itself a logged event.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Maximum number of retained log entries
pub const LOG_CAPACITY: usize = 50;

/// Category of a status log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogCategory {
    /// Informational entry
    Info,
    /// Successful operation
    Success,
    /// Warning
    Warning,
    /// Error
    Error,
}

/// One timestamped entry in the status log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock timestamp, display-formatted (`HH:MM:SS`)
    pub stamp: String,
    /// Entry category
    pub category: LogCategory,
    /// Message text
    pub message: String,
}

impl LogEntry {
    fn now(message: impl Into<String>, category: LogCategory) -> Self {
        Self {
            stamp: chrono::Local::now().format("%H:%M:%S").to_string(),
            category,
            message: message.into(),
        }
    }

    /// Plain-text rendering used by export: `[timestamp] message`.
    ///
    /// Category icons are presentation and belong to the rendering surface.
    #[must_use]
    pub fn render(&self) -> String {
        format!("[{}] {}", self.stamp, self.message)
    }
}

/// Append-only, capacity-bounded log of status entries
#[derive(Debug, Clone)]
pub struct StatusLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusLog {
    /// Create a log bounded at [`LOG_CAPACITY`]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(LOG_CAPACITY)
    }

    /// Create a log with an explicit bound
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an entry stamped with the current wall-clock time.
    ///
    /// Evicts from the head until the bound holds. Returns a copy of the
    /// appended entry for the rendering collaborator.
    pub fn append(&mut self, message: impl Into<String>, category: LogCategory) -> LogEntry {
        let entry = LogEntry::now(message, category);
        self.entries.push_back(entry.clone());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
        entry
    }

    /// Empty the log, then record that the clear happened.
    ///
    /// The resulting log always holds exactly one entry: the clear notice.
    pub fn clear(&mut self) -> LogEntry {
        self.entries.clear();
        self.append("Status log cleared", LogCategory::Info)
    }

    /// Newline-joined plain-text rendering of all entries, in log order.
    ///
    /// An empty log yields an empty string.
    #[must_use]
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(LogEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of retained entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the log holds no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate retained entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }
}

/// Shared handle to a status log.
///
/// The mirror sink and the panic observer are invoked by their hosts from
/// arbitrary threads; the lock preserves the single-writer assumption.
pub type SharedLog = Arc<Mutex<StatusLog>>;

/// Wrap a log in a shared handle
#[must_use]
pub fn shared(log: StatusLog) -> SharedLog {
    Arc::new(Mutex::new(log))
}

/// Lock a shared log, recovering from a poisoned lock.
///
/// A panicking writer can only have completed or not completed an append;
/// either way the log is structurally intact.
pub fn lock(log: &SharedLog) -> std::sync::MutexGuard<'_, StatusLog> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod entry_tests {
        use super::*;

        #[test]
        fn test_render_shape() {
            let mut log = StatusLog::new();
            let entry = log.append("hello", LogCategory::Info);
            let rendered = entry.render();
            assert!(rendered.starts_with('['));
            assert!(rendered.ends_with("] hello"));
        }

        #[test]
        fn test_serde_round_trip() {
            let mut log = StatusLog::new();
            let entry = log.append("persist me", LogCategory::Warning);
            let json = serde_json::to_string(&entry).unwrap();
            let back: LogEntry = serde_json::from_str(&json).unwrap();
            assert_eq!(back, entry);
        }
    }

    mod status_log_tests {
        use super::*;

        #[test]
        fn test_append_in_order() {
            let mut log = StatusLog::new();
            log.append("first", LogCategory::Info);
            log.append("second", LogCategory::Success);
            let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
            assert_eq!(messages, vec!["first", "second"]);
        }

        #[test]
        fn test_capacity_evicts_oldest() {
            let mut log = StatusLog::new();
            for i in 1..=52 {
                log.append(format!("entry {i}"), LogCategory::Info);
            }
            assert_eq!(log.len(), LOG_CAPACITY);
            let messages: Vec<_> = log.iter().map(|e| e.message.as_str()).collect();
            assert_eq!(messages[0], "entry 3");
            assert_eq!(messages[49], "entry 52");
        }

        #[test]
        fn test_fifty_first_evicts_first() {
            let mut log = StatusLog::new();
            for i in 1..=51 {
                log.append(format!("entry {i}"), LogCategory::Info);
            }
            assert_eq!(log.len(), LOG_CAPACITY);
            assert!(log.iter().all(|e| e.message != "entry 1"));
            assert!(log.iter().any(|e| e.message == "entry 51"));
        }

        #[test]
        fn test_clear_self_logs() {
            let mut log = StatusLog::new();
            log.append("about to vanish", LogCategory::Error);
            let notice = log.clear();
            assert_eq!(log.len(), 1);
            assert_eq!(notice.message, "Status log cleared");
            assert_eq!(notice.category, LogCategory::Info);
        }

        #[test]
        fn test_clear_empty_log_still_logs() {
            let mut log = StatusLog::new();
            log.clear();
            assert_eq!(log.len(), 1);
        }

        #[test]
        fn test_export_empty() {
            let log = StatusLog::new();
            assert_eq!(log.export_text(), "");
        }

        #[test]
        fn test_export_one_line_per_entry() {
            let mut log = StatusLog::new();
            log.append("alpha", LogCategory::Info);
            log.append("beta", LogCategory::Error);
            let text = log.export_text();
            let lines: Vec<_> = text.lines().collect();
            assert_eq!(lines.len(), 2);
            assert!(lines[0].ends_with("alpha"));
            assert!(lines[1].ends_with("beta"));
        }

        #[test]
        fn test_shared_lock_round_trip() {
            let handle = shared(StatusLog::new());
            lock(&handle).append("via handle", LogCategory::Info);
            assert_eq!(lock(&handle).len(), 1);
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Length never exceeds the bound for any append sequence
            #[test]
            fn prop_len_bounded(count in 0usize..200) {
                let mut log = StatusLog::new();
                for i in 0..count {
                    log.append(format!("m{i}"), LogCategory::Info);
                    prop_assert!(log.len() <= LOG_CAPACITY);
                }
                prop_assert_eq!(log.len(), count.min(LOG_CAPACITY));
            }

            /// Surviving entries are always the most recent, in order
            #[test]
            fn prop_suffix_survives(count in 1usize..200) {
                let mut log = StatusLog::new();
                for i in 0..count {
                    log.append(format!("m{i}"), LogCategory::Info);
                }
                let first_kept = count.saturating_sub(LOG_CAPACITY);
                let expected: Vec<_> = (first_kept..count).map(|i| format!("m{i}")).collect();
                let actual: Vec<_> = log.iter().map(|e| e.message.clone()).collect();
                prop_assert_eq!(actual, expected);
            }
        }
    }
}
