use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::DiscoveryError;

pub const NOTEBOOK_EXTENSION: &str = "ipynb";

/// Directory Jupyter uses for autosaved notebook copies.
pub const CHECKPOINT_MARKER: &str = ".ipynb_checkpoints";

pub fn is_checkpoint(path: &Path) -> bool {
    path.to_string_lossy().contains(CHECKPOINT_MARKER)
}

/// True for any name ending in `.ipynb`, including a bare `.ipynb`.
pub fn is_notebook_name(file_name: &OsStr) -> bool {
    file_name
        .to_string_lossy()
        .ends_with(&format!(".{NOTEBOOK_EXTENSION}"))
}

// Symlinked files count; symlinked directories are never descended into.
fn is_file_entry(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
}

/// Recursively collect notebook files under `root`, skipping checkpoints.
///
/// Entries come back sorted by file name within each directory.
pub fn walk_notebooks(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !(e.file_type().is_dir() && e.file_name() == CHECKPOINT_MARKER))
    {
        let entry = entry.map_err(|e| DiscoveryError::directory_scan(root, e))?;

        if !is_file_entry(&entry) {
            continue;
        }
        if is_notebook_name(entry.file_name()) && !is_checkpoint(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
