use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

const LOG_EXTENSIONS: [&str; 2] = ["txt", "log"];

pub fn read_log(path: &Path) -> Result<String> {
    log::debug!("reading {}", path.display());
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Expands directories into their log files (sorted); plain paths pass through untouched
/// so a missing file still fails when it is read.
pub fn collect_logs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut logs = Vec::new();
    for input in inputs {
        if !input.is_dir() {
            logs.push(input.clone());
            continue;
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry?;
            let is_log = entry
                .path()
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| LOG_EXTENSIONS.contains(&e));
            if entry.file_type().is_file() && is_log {
                logs.push(entry.into_path());
            }
        }
    }
    Ok(logs)
}
