//! Verbose/simple debug mode.
//!
//! Two states, toggled only by explicit user action or a restored persisted
//! preference. The transition itself is pure: it returns the new state plus
//! the effects to apply (announce in the log, persist the preference),
//! keeping state logic separate from presentation and storage.

use crate::log::LogCategory;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Debug output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebugMode {
    /// Detailed output: mirrored diagnostics are shown
    #[default]
    Verbose,
    /// Simplified output: info-level mirrored diagnostics are suppressed
    Simple,
}

impl DebugMode {
    /// Check if detailed output is enabled
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Verbose => Self::Simple,
            Self::Simple => Self::Verbose,
        }
    }
}

/// Side effect of a mode transition, applied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModeEffect {
    /// Append one entry to the status log announcing the new state
    Announce {
        /// Announcement text
        message: String,
        /// Log category for the announcement
        category: LogCategory,
    },
    /// Persist the new mode for future session restoration
    Persist(DebugMode),
}

/// Transition to the other mode, returning the new state and its effects.
///
/// Enabling announces at info; disabling announces at warning, so the
/// notice survives even in simplified output.
#[must_use]
pub fn toggle(mode: DebugMode) -> (DebugMode, Vec<ModeEffect>) {
    let next = mode.toggled();
    let announce = match next {
        DebugMode::Verbose => ModeEffect::Announce {
            message: "Debug mode enabled - showing detailed output".to_string(),
            category: LogCategory::Info,
        },
        DebugMode::Simple => ModeEffect::Announce {
            message: "Debug mode disabled - showing simplified output".to_string(),
            category: LogCategory::Warning,
        },
    };
    (next, vec![announce, ModeEffect::Persist(next)])
}

/// Mode used at initialization: the persisted preference, or verbose.
#[must_use]
pub fn restore(stored: Option<DebugMode>) -> DebugMode {
    stored.unwrap_or_default()
}

/// Shared, lock-free view of the current mode.
///
/// The mirror sink reads this on every event; writers go through
/// [`ModeFlag::set`] after a transition.
#[derive(Debug, Clone)]
pub struct ModeFlag(Arc<AtomicBool>);

impl ModeFlag {
    /// Create a flag holding `mode`
    #[must_use]
    pub fn new(mode: DebugMode) -> Self {
        Self(Arc::new(AtomicBool::new(mode.is_verbose())))
    }

    /// Replace the current mode
    pub fn set(&self, mode: DebugMode) {
        self.0.store(mode.is_verbose(), Ordering::Relaxed);
    }

    /// Read the current mode
    #[must_use]
    pub fn get(&self) -> DebugMode {
        if self.0.load(Ordering::Relaxed) {
            DebugMode::Verbose
        } else {
            DebugMode::Simple
        }
    }

    /// Check if detailed output is enabled
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for ModeFlag {
    fn default() -> Self {
        Self::new(DebugMode::default())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod mode_tests {
        use super::*;

        #[test]
        fn test_default_is_verbose() {
            assert_eq!(DebugMode::default(), DebugMode::Verbose);
            assert!(DebugMode::Verbose.is_verbose());
            assert!(!DebugMode::Simple.is_verbose());
        }

        #[test]
        fn test_toggled() {
            assert_eq!(DebugMode::Verbose.toggled(), DebugMode::Simple);
            assert_eq!(DebugMode::Simple.toggled(), DebugMode::Verbose);
        }

        #[test]
        fn test_serde_names() {
            let json = serde_json::to_string(&DebugMode::Simple).unwrap();
            assert_eq!(json, "\"simple\"");
        }
    }

    mod toggle_tests {
        use super::*;

        #[test]
        fn test_toggle_to_simple_effects() {
            let (next, effects) = toggle(DebugMode::Verbose);
            assert_eq!(next, DebugMode::Simple);
            assert_eq!(effects.len(), 2);
            match &effects[0] {
                ModeEffect::Announce { message, category } => {
                    assert!(message.contains("disabled"));
                    assert_eq!(*category, LogCategory::Warning);
                }
                other => panic!("expected announce, got {other:?}"),
            }
            assert_eq!(effects[1], ModeEffect::Persist(DebugMode::Simple));
        }

        #[test]
        fn test_toggle_to_verbose_effects() {
            let (next, effects) = toggle(DebugMode::Simple);
            assert_eq!(next, DebugMode::Verbose);
            match &effects[0] {
                ModeEffect::Announce { message, category } => {
                    assert!(message.contains("enabled"));
                    assert_eq!(*category, LogCategory::Info);
                }
                other => panic!("expected announce, got {other:?}"),
            }
        }

        #[test]
        fn test_double_toggle_round_trips() {
            let (once, _) = toggle(DebugMode::Verbose);
            let (twice, effects) = toggle(once);
            assert_eq!(twice, DebugMode::Verbose);
            assert_eq!(effects[1], ModeEffect::Persist(DebugMode::Verbose));
        }
    }

    mod restore_tests {
        use super::*;

        #[test]
        fn test_missing_defaults_verbose() {
            assert_eq!(restore(None), DebugMode::Verbose);
        }

        #[test]
        fn test_stored_wins() {
            assert_eq!(restore(Some(DebugMode::Simple)), DebugMode::Simple);
        }
    }

    mod flag_tests {
        use super::*;

        #[test]
        fn test_set_get() {
            let flag = ModeFlag::new(DebugMode::Verbose);
            assert!(flag.is_verbose());
            flag.set(DebugMode::Simple);
            assert_eq!(flag.get(), DebugMode::Simple);
            assert!(!flag.is_verbose());
        }

        #[test]
        fn test_clones_share_state() {
            let flag = ModeFlag::new(DebugMode::Verbose);
            let other = flag.clone();
            other.set(DebugMode::Simple);
            assert_eq!(flag.get(), DebugMode::Simple);
        }
    }
}
