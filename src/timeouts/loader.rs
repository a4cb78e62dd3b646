use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

use super::TimeoutTable;
use crate::error::ConfigError;

/// Load a timeout table from a JSON or YAML file.
///
/// Fields missing from the file keep their built-in values.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<TimeoutTable, ConfigError> {
    let path = path.as_ref();
    trace!(path = %path.display(), "loading timeout table");

    let content =
        fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e.to_string()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    let table: TimeoutTable = match extension {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::parse_error(path, e.to_string()))?,
        other => return Err(ConfigError::unsupported_format(other)),
    };

    validate(&table)?;
    debug!(
        root = %table.root,
        categories = table.categories.len(),
        default_timeout = table.default_timeout,
        "loaded timeout table"
    );
    Ok(table)
}

pub fn validate(table: &TimeoutTable) -> Result<(), ConfigError> {
    if table.root.is_empty() {
        return Err(ConfigError::invalid("root must not be empty"));
    }
    if table.default_timeout == 0 {
        return Err(ConfigError::invalid("default_timeout must be positive"));
    }

    let mut seen = HashSet::new();
    for entry in &table.categories {
        if entry.category.is_empty() || entry.category.contains('/') {
            return Err(ConfigError::invalid(format!(
                "invalid category name '{}'",
                entry.category
            )));
        }
        if entry.timeout == 0 {
            return Err(ConfigError::invalid(format!(
                "timeout for category '{}' must be positive",
                entry.category
            )));
        }
        if !seen.insert(entry.category.as_str()) {
            return Err(ConfigError::invalid(format!(
                "duplicate category '{}'",
                entry.category
            )));
        }
    }

    Ok(())
}
