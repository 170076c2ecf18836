use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoltigError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Config file not found at: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    StdIoError(#[from] std::io::Error),

    #[error(transparent)]
    YamlError(#[from] serde_yml::Error),

    #[error(transparent)]
    JsonError(#[from] serde_json::Error),

    #[error("No supported package manager found for this OS")]
    NoBackend,

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    /// A single alias of a package failed; the alias is what the user sees.
    #[error("failed to {action} {alias}: {reason}")]
    PackageOperation {
        alias: String,
        action: String,
        reason: String,
    },

    /// Output pipes of a subprocess could not be set up
    #[error("Output relay for '{command}' failed: {reason}")]
    RelayError { command: String, reason: String },

    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, VoltigError>;
