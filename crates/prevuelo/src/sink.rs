//! Mirror sink: a tracing layer that appends diagnostics to the status log.
//!
//! Error and warning events are always mirrored; info events only while the
//! mode flag reads verbose. Debug and trace events are never mirrored. The
//! layer observes only; it never consumes events or alters propagation to
//! other layers.

use crate::log::{self, LogCategory, SharedLog};
use crate::mode::ModeFlag;
use std::fmt::Write as _;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

/// Tracing layer mirroring events into a [`crate::log::StatusLog`]
#[derive(Debug, Clone)]
pub struct MirrorSink {
    log: SharedLog,
    mode: ModeFlag,
}

impl MirrorSink {
    /// Create a sink writing to `log`, gated by `mode`
    #[must_use]
    pub fn new(log: SharedLog, mode: ModeFlag) -> Self {
        Self { log, mode }
    }
}

impl<S: Subscriber> Layer<S> for MirrorSink {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = *event.metadata().level();
        let (category, prefix) = match level {
            Level::ERROR => (LogCategory::Error, "[ERROR]"),
            Level::WARN => (LogCategory::Warning, "[WARN]"),
            Level::INFO if self.mode.is_verbose() => (LogCategory::Info, "[LOG]"),
            _ => return,
        };

        let mut text = String::new();
        event.record(&mut MessageVisitor(&mut text));
        if text.is_empty() {
            text.push_str(event.metadata().name());
        }

        log::lock(&self.log).append(format!("{prefix} {text}"), category);
    }
}

/// Extracts the `message` field of an event as display text
struct MessageVisitor<'a>(&'a mut String);

impl Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.0, "{value:?}");
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0.push_str(value);
        }
    }
}
