//! Notebook discovery.
//!
//! Walks a lab tree, keeps every `.ipynb` file that is not a Jupyter
//! checkpoint, and pairs it with the timeout its category allows.

pub mod walker;

pub use walker::{walk_notebooks, CHECKPOINT_MARKER, NOTEBOOK_EXTENSION};

use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

use crate::error::DiscoveryError;
use crate::timeouts::{load_table, TimeoutTable};

/// One notebook to run, with the seconds it may take.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NotebookCase {
    pub path: String,
    pub timeout: u64,
}

impl NotebookCase {
    pub fn new(path: impl Into<String>, timeout: u64) -> Self {
        Self {
            path: path.into(),
            timeout,
        }
    }

    /// Identifier for the generated test case.
    pub fn test_id(&self) -> &str {
        &self.path
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

pub fn discover_notebooks(root: &Path) -> Result<Vec<NotebookCase>, DiscoveryError> {
    discover_with_table(root, TimeoutTable::builtin_ref())
}

/// Discover notebooks under `root`, resolving timeouts against `table`.
///
/// A missing root is treated as an empty lab tree.
pub fn discover_with_table(
    root: &Path,
    table: &TimeoutTable,
) -> Result<Vec<NotebookCase>, DiscoveryError> {
    if !root.is_dir() {
        debug!(root = %root.display(), "root directory not found, nothing to discover");
        return Ok(Vec::new());
    }

    let cases: Vec<NotebookCase> = walk_notebooks(root)?
        .into_iter()
        .map(|path| {
            let path = path.to_string_lossy().into_owned();
            let timeout = table.resolve(&path);
            NotebookCase { path, timeout }
        })
        .collect();

    debug!(root = %root.display(), count = cases.len(), "discovered notebooks");
    Ok(cases)
}

/// Discover notebooks using the table in `config`, or the built-in one.
pub fn discover_from_config(
    root: &Path,
    config: Option<&Path>,
) -> crate::error::Result<Vec<NotebookCase>> {
    let table = match config {
        Some(path) => load_table(path)?,
        None => TimeoutTable::builtin(),
    };
    Ok(discover_with_table(root, &table)?)
}
