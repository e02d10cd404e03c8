//! Passive panic observer.
//!
//! Chains onto the process panic hook: each panic appends one error entry
//! to the status log, then the previous hook runs unchanged. The observer
//! never suppresses or alters propagation.

use crate::log::{self, LogCategory, SharedLog};
use std::panic::PanicHookInfo;
use std::sync::Once;

static INSTALL: Once = Once::new();

/// Install the observer onto the current panic hook.
///
/// Idempotent per process: only the first call takes effect.
pub fn install(log: SharedLog) {
    INSTALL.call_once(move || {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            log::lock(&log).append(describe(info), LogCategory::Error);
            previous(info);
        }));
    });
}

fn describe(info: &PanicHookInfo<'_>) -> String {
    let payload = info
        .payload()
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    match info.location() {
        Some(location) => format!(
            "Host panic: {payload} ({}:{})",
            location.file(),
            location.line()
        ),
        None => format!("Host panic: {payload}"),
    }
}
