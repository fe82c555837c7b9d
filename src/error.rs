use foundation_config::ConfigError;
use foundation_rosetta::RosettaError;
use thiserror::Error;

/// Errors raised while starting Foundation.
#[derive(Debug, Error)]
pub enum FoundationError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Lang(#[from] RosettaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FoundationError>;
