//! Prevuelo: Pre-Flight Dashboard Core
//!
//! Prevuelo (Spanish: "pre-flight") is the stateful core of a pre-flight
//! testing dashboard: drivers report per-test status transitions, and the
//! dashboard aggregates them into progress counters, test records, and a
//! capacity-bounded status log that a rendering collaborator reflects into
//! a visible surface.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   PREVUELO Architecture                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   ┌────────────┐    ┌────────────┐    ┌────────────┐            │
//! │   │ Test       │    │ Dashboard  │    │ Rendering  │            │
//! │   │ Driver     │───►│ (records + │───►│ Surface    │            │
//! │   │ (external) │    │  log)      │    │ (view)     │            │
//! │   └────────────┘    └────────────┘    └────────────┘            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All mutation is confined to a single logical owner; the mirror sink and
//! panic observer, whose hosts call in from arbitrary threads, go through a
//! shared locked handle to the log.

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod aggregator;
mod dashboard;
mod export;
/// Capacity-bounded status log and its shared handle
pub mod log;
mod milestones;
mod mode;
mod panic_hook;
mod prefs;
mod record;
mod result;
mod session;
mod sink;
mod status;
mod view;

pub use aggregator::{ReportOutcome, ResultAggregator, RunSummary};
pub use dashboard::Dashboard;
pub use export::export_to_dir;
pub use log::{LogCategory, LogEntry, SharedLog, StatusLog, LOG_CAPACITY};
pub use milestones::{Milestone, MilestoneTracker};
pub use mode::{restore as restore_mode, toggle as toggle_mode, DebugMode, ModeEffect, ModeFlag};
pub use panic_hook::install as install_panic_observer;
pub use prefs::{JsonPreferences, MemoryPreferences, PreferenceStore};
pub use record::{slugify, TestRecord};
pub use result::{PrevueloError, PrevueloResult};
pub use session::SessionId;
pub use sink::MirrorSink;
pub use status::TestStatus;
pub use view::{DashboardView, NullView};
