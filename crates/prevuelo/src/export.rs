//! Log export to a timestamp-named text file.

use crate::log::{LogCategory, StatusLog};
use crate::result::PrevueloResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Write the log's plain-text rendering into `dir`.
///
/// The file is named `preflight-logs-<timestamp>.txt` with colons replaced
/// so the name is portable. An empty log writes an empty file. On success
/// the export itself is recorded in the log.
pub fn export_to_dir(log: &mut StatusLog, dir: &Path) -> PrevueloResult<PathBuf> {
    let stamp = chrono::Local::now().format("%Y-%m-%dT%H-%M-%S");
    let path = dir.join(format!("preflight-logs-{stamp}.txt"));
    fs::write(&path, log.export_text())?;
    log.append("Debug logs exported successfully", LogCategory::Success);
    Ok(path)
}
