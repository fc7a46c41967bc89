//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid URL for {0}: must start with http:// or https://")]
    InvalidUrl(&'static str),

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Loading delay exceeds maximum allowed (10s)")]
    LoadingDelayTooLong,

    #[error("Snapshot directory must not be empty")]
    EmptySnapshotDir,

    #[error("Log level must not be empty")]
    EmptyLogLevel,
}
