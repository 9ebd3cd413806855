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
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Request body limit must be greater than zero")]
    InvalidBodyLimit,

    #[error("Invalid payment provider timeout")]
    InvalidTimeout,

    #[error("Invalid PayPal base URL: {0}")]
    InvalidPayPalBaseUrl(String),

    #[error("PayPal live mode requires an HTTPS base URL")]
    LiveModeRequiresHttps,
}
