use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UcConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: file is not valid {encoding}")]
    Decode {
        path: PathBuf,
        encoding: &'static str,
    },

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Invalid key '{0}' (expected 'section.key')")]
    InvalidKey(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Could not resolve a config directory for this platform")]
    NoConfigDir,

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
