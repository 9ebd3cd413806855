//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MELODY_MAGIC` prefix and nested values use double underscores as separators.
//!
//! # Migrating from the unprefixed variables
//!
//! Deployments that set the bare PayPal variables need to rename them:
//!
//! | Previous | Now |
//! |---|---|
//! | `PORT` | `MELODY_MAGIC__SERVER__PORT` |
//! | `PAYPAL_MODE` | `MELODY_MAGIC__PAYPAL__MODE` |
//! | `PAYPAL_CLIENT_ID` | `MELODY_MAGIC__PAYPAL__CLIENT_ID` |
//! | `PAYPAL_SECRET` | `MELODY_MAGIC__PAYPAL__CLIENT_SECRET` |
//!
//! The unprefixed names are not read.
//!
//! # Example
//!
//! ```no_run
//! use melody_magic::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr());
//! ```

mod error;
mod payment;
mod server;

pub use error::{ConfigError, ValidationError};
pub use payment::{PayPalMode, PaymentConfig, PAYPAL_LIVE_BASE_URL, PAYPAL_SANDBOX_BASE_URL};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Read once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, CORS, body limit)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment provider configuration (PayPal)
    #[serde(default)]
    pub paypal: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MELODY_MAGIC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MELODY_MAGIC__SERVER__PORT=5051` -> `server.port = 5051`
    /// - `MELODY_MAGIC__PAYPAL__MODE=live` -> `paypal.mode = live`
    /// - `MELODY_MAGIC__PAYPAL__CLIENT_ID=...` -> `paypal.client_id = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MELODY_MAGIC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.paypal.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
