// third-party imports
use config::ConfigError;
use thiserror::Error;

/// Error is an error which may occur while loading settings.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to load settings: {0}")]
    Config(#[from] ConfigError),
}
