// Error types for configuration loading

use crate::FileFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration key not found: {0}")]
    KeyNotFound(String),

    #[error("Failed to read {}: {source}", path.display())]
    LoadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported configuration file: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Failed to parse {format:?} configuration: {message}")]
    ParseError { format: FileFormat, message: String },

    #[error("Invalid value for `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn parse(format: FileFormat, err: impl std::fmt::Display) -> Self {
        ConfigError::ParseError {
            format,
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
