//! Persistence seam for the debug-mode preference.
//!
//! Exactly one value is persisted: the verbose/simple choice, read at
//! initialization and written on toggle. Read failures (missing file, bad
//! JSON) degrade to "no preference" rather than erroring the caller.

use crate::mode::DebugMode;
use crate::result::PrevueloResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value store for the mode preference
pub trait PreferenceStore {
    /// Read the persisted mode, if any
    fn load_mode(&self) -> Option<DebugMode>;

    /// Persist the mode for future sessions
    fn store_mode(&mut self, mode: DebugMode) -> PrevueloResult<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceDoc {
    debug_mode: DebugMode,
}

/// Preference store backed by one small JSON document
#[derive(Debug, Clone)]
pub struct JsonPreferences {
    path: PathBuf,
}

impl JsonPreferences {
    /// Use the document at `path` (created on first store)
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonPreferences {
    fn load_mode(&self) -> Option<DebugMode> {
        let text = fs::read_to_string(&self.path).ok()?;
        let doc: PreferenceDoc = serde_json::from_str(&text).ok()?;
        Some(doc.debug_mode)
    }

    fn store_mode(&mut self, mode: DebugMode) -> PrevueloResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let doc = PreferenceDoc { debug_mode: mode };
        fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    mode: Option<DebugMode>,
}

impl MemoryPreferences {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a mode
    #[must_use]
    pub fn with_mode(mode: DebugMode) -> Self {
        Self { mode: Some(mode) }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load_mode(&self) -> Option<DebugMode> {
        self.mode
    }

    fn store_mode(&mut self, mode: DebugMode) -> PrevueloResult<()> {
        self.mode = Some(mode);
        Ok(())
    }
}
