//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `THERAPIST_DISCOVERY` prefix and nested values use double underscores as separators.
//!
//! Every section has defaults, so an empty environment yields a working
//! development configuration pointed at `http://localhost:8050`.
//!
//! # Example
//!
//! ```no_run
//! use therapist_discovery::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Loading therapists from {}", config.sources.therapists_url());
//! ```

mod error;
mod sources;
mod telemetry;
mod view;

pub use error::{ConfigError, ValidationError};
pub use sources::SourcesConfig;
pub use telemetry::TelemetryConfig;
pub use view::ViewConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Record sources of the fallback chains
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Loading-state behaviour of the views
    #[serde(default)]
    pub view: ViewConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `THERAPIST_DISCOVERY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `THERAPIST_DISCOVERY__SOURCES__API_BASE_URL=...` -> `sources.api_base_url = ...`
    /// - `THERAPIST_DISCOVERY__VIEW__DIRECTORY_MIN_LOADING_MS=0` -> `view.directory_min_loading_ms = 0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("THERAPIST_DISCOVERY")
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
        self.sources.validate()?;
        self.view.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
