//! Error types for lang file handling

use thiserror::Error;

/// Errors that can occur while loading or rendering lang files.
#[derive(Debug, Error)]
pub enum RosettaError {
    /// Creating the data directory, copying the default file, reading or
    /// writing the lang file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A lang file is not valid YAML, or not a mapping
    #[error("Failed to parse lang file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A lang entry is not a plain string
    #[error("Lang key `{key}` must map to a string, found {found}")]
    InvalidEntry { key: String, found: &'static str },

    /// The plugin does not bundle the default lang file
    #[error("Missing bundled resource: {0}")]
    MissingResource(String),

    /// The template engine rejected a message
    #[error("Failed to render `{key}`: {message}")]
    Render { key: String, message: String },

    /// A render target could not be serialized
    #[error("Failed to serialize render target: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Unknown message type name
    #[error("Invalid message type: {0}")]
    InvalidMessageType(String),

    /// Unknown reconcile policy name
    #[error("Invalid reconcile policy: {0} (expected `strict` or `permissive`)")]
    InvalidPolicy(String),
}
