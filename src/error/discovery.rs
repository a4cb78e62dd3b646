use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("failed to scan directory at {path}: {source}")]
    DirectoryScan {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl DiscoveryError {
    pub fn directory_scan(path: impl Into<PathBuf>, source: walkdir::Error) -> Self {
        Self::DirectoryScan {
            path: path.into(),
            source,
        }
    }
}
