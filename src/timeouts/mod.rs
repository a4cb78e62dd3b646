//! Category-based execution timeouts.
//!
//! A notebook's timeout is picked by looking for `"<root>/<category>/"` in
//! its path. Categories are checked in table order and the first hit wins,
//! so a path that sits under two category directories takes the timeout of
//! whichever category is listed first.

pub mod loader;

pub use loader::load_table;

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::trace;

pub const DEFAULT_ROOT: &str = "labs";

/// Seconds allotted to a notebook outside every known category.
pub const DEFAULT_TIMEOUT: u64 = 900;

const BUILTIN_CATEGORIES: &[(&str, u64)] = &[
    ("NxD", 1800),        // model compilation
    ("FineTuning", 3600), // fine-tuning runs
    ("vLLM", 1800),       // vLLM setup
    ("NKI", 900),         // NKI kernels
];

static BUILTIN: LazyLock<TimeoutTable> = LazyLock::new(TimeoutTable::builtin);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryTimeout {
    pub category: String,
    pub timeout: u64,
}

impl CategoryTimeout {
    pub fn new(category: impl Into<String>, timeout: u64) -> Self {
        Self {
            category: category.into(),
            timeout,
        }
    }

    /// Substring a path must contain to fall in this category.
    pub fn pattern(&self, root: &str) -> String {
        format!("{root}/{}/", self.category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimeoutTable {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_timeout")]
    pub default_timeout: u64,
    #[serde(default = "builtin_categories")]
    pub categories: Vec<CategoryTimeout>,
}

fn default_root() -> String {
    DEFAULT_ROOT.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

fn builtin_categories() -> Vec<CategoryTimeout> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|(category, timeout)| CategoryTimeout::new(*category, *timeout))
        .collect()
}

impl TimeoutTable {
    pub fn builtin() -> Self {
        Self {
            root: default_root(),
            default_timeout: DEFAULT_TIMEOUT,
            categories: builtin_categories(),
        }
    }

    /// Shared instance of the built-in table.
    pub fn builtin_ref() -> &'static TimeoutTable {
        &BUILTIN
    }

    pub fn matching_category(&self, path: &str) -> Option<&CategoryTimeout> {
        self.categories
            .iter()
            .find(|entry| path.contains(&entry.pattern(&self.root)))
    }

    pub fn resolve(&self, path: &str) -> u64 {
        match self.matching_category(path) {
            Some(entry) => {
                trace!(path, category = %entry.category, timeout = entry.timeout, "matched category");
                entry.timeout
            }
            None => {
                trace!(path, timeout = self.default_timeout, "no category matched");
                self.default_timeout
            }
        }
    }

    pub fn resolve_duration(&self, path: &str) -> Duration {
        Duration::from_secs(self.resolve(path))
    }
}

impl Default for TimeoutTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Timeout in seconds for `path` under the built-in category table.
pub fn resolve_timeout(path: &str) -> u64 {
    BUILTIN.resolve(path)
}
