//! Recursive discovery of filing documents.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::is_filing_file;
use crate::error::Result;

/// Find every filing document beneath `base_dir`.
///
/// Directories are walked in file-name order, so the returned paths are in
/// the same order on every run over an unchanged tree.
pub fn scan_filings(base_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_file() && is_filing_file(entry.path()) {
            paths.push(entry.into_path());
        }
    }

    tracing::debug!(count = paths.len(), base = %base_dir.display(), "Scanned filings");
    Ok(paths)
}
