//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `SUPPLIER_MCDM` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use supplier_mcdm::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Default v = {}", config.vikor.compromise_weight);
//! ```

mod error;
mod import;
mod logging;
mod promethee;
mod vikor;

pub use error::{ConfigError, ValidationError};
pub use import::ImportConfig;
pub use logging::LoggingConfig;
pub use promethee::PrometheeConfig;
pub use vikor::VikorConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// VIKOR defaults (compromise weight)
    #[serde(default)]
    pub vikor: VikorConfig,

    /// PROMETHEE options (level resolution)
    #[serde(default)]
    pub promethee: PrometheeConfig,

    /// Matrix file parsing options
    #[serde(default)]
    pub import: ImportConfig,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present
    /// 2. Reads environment variables with `SUPPLIER_MCDM` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SUPPLIER_MCDM__VIKOR__COMPROMISE_WEIGHT=0.7` -> `vikor.compromise_weight = 0.7`
    /// - `SUPPLIER_MCDM__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SUPPLIER_MCDM")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
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
        self.vikor.validate()?;
        self.import.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
