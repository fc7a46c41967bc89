//! Record source configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where the fallback chains fetch their records from
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    /// Backend base URL (serves `/api/therapists` and `/api/community/<category>`)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL of the static file host serving the bundled `/data/*.json`
    /// snapshots. When unset, the snapshots are read from `snapshot_dir`.
    pub static_base_url: Option<String>,

    /// Local directory holding `therapists.json` and `community.json`
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: String,

    /// Use the backend community endpoints as the first community stage
    #[serde(default)]
    pub community_api_enabled: bool,

    /// Per-stage request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl SourcesConfig {
    /// Get timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Primary therapist endpoint
    pub fn therapists_url(&self) -> String {
        format!("{}/api/therapists", self.api_base_url.trim_end_matches('/'))
    }

    /// Statically served snapshot URL for `file`, if a static host is configured
    pub fn static_snapshot_url(&self, file: &str) -> Option<String> {
        self.static_base_url
            .as_ref()
            .map(|base| format!("{}/data/{}", base.trim_end_matches('/'), file))
    }

    /// Path of the on-disk snapshot `file`
    pub fn snapshot_path(&self, file: &str) -> PathBuf {
        PathBuf::from(&self.snapshot_dir).join(file)
    }

    /// Validate source configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_http_url(&self.api_base_url) {
            return Err(ValidationError::InvalidUrl("api_base_url"));
        }
        if let Some(ref url) = self.static_base_url {
            if !is_http_url(url) {
                return Err(ValidationError::InvalidUrl("static_base_url"));
            }
        }
        if self.snapshot_dir.trim().is_empty() {
            return Err(ValidationError::EmptySnapshotDir);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > 120 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            static_base_url: None,
            snapshot_dir: default_snapshot_dir(),
            community_api_enabled: false,
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

fn default_api_base_url() -> String {
    "http://localhost:8050".to_string()
}

fn default_snapshot_dir() -> String {
    "data".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_config_defaults() {
        let config = SourcesConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8050");
        assert_eq!(config.snapshot_dir, "data");
        assert!(!config.community_api_enabled);
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_therapists_url_handles_trailing_slash() {
        let config = SourcesConfig {
            api_base_url: "http://api.local:8050/".to_string(),
            ..Default::default()
        };
        assert_eq!(config.therapists_url(), "http://api.local:8050/api/therapists");
    }

    #[test]
    fn test_static_snapshot_url() {
        let config = SourcesConfig::default();
        assert_eq!(config.static_snapshot_url("therapists.json"), None);

        let config = SourcesConfig {
            static_base_url: Some("http://localhost:3000".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.static_snapshot_url("therapists.json").as_deref(),
            Some("http://localhost:3000/data/therapists.json")
        );
    }

    #[test]
    fn test_snapshot_path() {
        let config = SourcesConfig::default();
        assert_eq!(config.snapshot_path("community.json"), PathBuf::from("data/community.json"));
    }

    #[test]
    fn test_validation_invalid_url() {
        let config = SourcesConfig {
            api_base_url: "localhost:8050".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUrl("api_base_url")));

        let config = SourcesConfig {
            static_base_url: Some("ftp://files".to_string()),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidUrl("static_base_url")));
    }

    #[test]
    fn test_validation_invalid_timeout() {
        let config = SourcesConfig {
            request_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SourcesConfig {
            request_timeout_secs: 500,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(SourcesConfig::default().validate().is_ok());
    }
}
