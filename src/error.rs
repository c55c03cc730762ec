//! Error types for directory settings resolution.
//!
//! Only structurally invalid calls surface as errors. A missing settings file is a
//! normal outcome and a file that fails to decode is contained at the loader
//! boundary, so neither appears here as something a resolve can return.

use thiserror::Error;

/// Path-related errors raised by the ancestor walker
#[derive(Debug, Error)]
pub enum PathError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

/// Errors produced while decoding a settings file's text
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Malformed settings: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("Unterminated block comment")]
    UnterminatedComment,

    #[error("Settings must be a JSON object at the top level, found {0}")]
    NotAnObject(&'static str),
}

/// Errors surfaced by the settings API and the CLI
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(transparent)]
    InvalidPath(#[from] PathError),

    #[error("No file is currently open")]
    NoFilePath,

    #[error("Could not determine settings directory for {0}")]
    NoDirectory(std::path::PathBuf),

    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<config::ConfigError> for SettingsError {
    fn from(err: config::ConfigError) -> Self {
        SettingsError::ConfigError(err.to_string())
    }
}
