//! View behaviour configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound for the artificial loading delays.
const MAX_LOADING_DELAY_MS: u64 = 10_000;

/// View behaviour configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ViewConfig {
    /// Minimum time the directory shows its loading state, in milliseconds
    #[serde(default = "default_directory_min_loading")]
    pub directory_min_loading_ms: u64,

    /// Minimum time the community shows its loading state, in milliseconds
    #[serde(default)]
    pub community_min_loading_ms: u64,
}

impl ViewConfig {
    pub fn directory_min_loading(&self) -> Duration {
        Duration::from_millis(self.directory_min_loading_ms)
    }

    pub fn community_min_loading(&self) -> Duration {
        Duration::from_millis(self.community_min_loading_ms)
    }

    /// Validate view configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.directory_min_loading_ms > MAX_LOADING_DELAY_MS
            || self.community_min_loading_ms > MAX_LOADING_DELAY_MS
        {
            return Err(ValidationError::LoadingDelayTooLong);
        }
        Ok(())
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            directory_min_loading_ms: default_directory_min_loading(),
            community_min_loading_ms: 0,
        }
    }
}

fn default_directory_min_loading() -> u64 {
    800
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_config_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.directory_min_loading(), Duration::from_millis(800));
        assert_eq!(config.community_min_loading(), Duration::ZERO);
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let config = ViewConfig {
            directory_min_loading_ms: 60_000,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::LoadingDelayTooLong));
    }
}
