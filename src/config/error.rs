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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("VIKOR compromise weight must be within [0, 1], got {0}")]
    InvalidCompromiseWeight(f64),

    #[error("Import delimiter must be a single ASCII character, got {0:?}")]
    InvalidDelimiter(char),

    #[error("Log filter cannot be empty")]
    EmptyLogFilter,
}
