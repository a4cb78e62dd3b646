mod config;
mod discovery;

pub use config::ConfigError;
pub use discovery::DiscoveryError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
}

pub type Result<T> = std::result::Result<T, Error>;
