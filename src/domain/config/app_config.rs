//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::duration::Duration;

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash-latest";

/// Default Gemini API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub timeout: Option<String>,
    pub cache_ttl: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            model: Some(DEFAULT_MODEL.to_string()),
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            timeout: Some(Duration::default_timeout().to_string()),
            cache_ttl: Some(Duration::default_cache_ttl().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            model: other.model.or(self.model),
            base_url: other.base_url.or(self.base_url),
            timeout: other.timeout.or(self.timeout),
            cache_ttl: other.cache_ttl.or(self.cache_ttl),
        }
    }

    /// Get the model name, or the default if not set
    pub fn model_or_default(&self) -> &str {
        self.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Get the API base URL, or the default if not set
    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get timeout as parsed Duration, or default if not set/invalid
    pub fn timeout_or_default(&self) -> Duration {
        self.timeout
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_timeout)
    }

    /// Get cache TTL as parsed Duration, or default if not set/invalid
    pub fn cache_ttl_or_default(&self) -> Duration {
        self.cache_ttl
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_cache_ttl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.api_key.is_none());
        assert_eq!(config.model.as_deref(), Some(DEFAULT_MODEL));
        assert_eq!(config.timeout, Some("1m".to_string()));
        assert_eq!(config.cache_ttl, Some("24h".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.api_key.is_none());
        assert!(config.model.is_none());
        assert!(config.base_url.is_none());
        assert!(config.timeout.is_none());
        assert!(config.cache_ttl.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            api_key: Some("base_key".to_string()),
            model: Some("base-model".to_string()),
            cache_ttl: Some("1h".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            api_key: Some("other_key".to_string()),
            cache_ttl: None,
            model: Some("other-model".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.api_key, Some("other_key".to_string()));
        assert_eq!(merged.model, Some("other-model".to_string()));
        assert_eq!(merged.cache_ttl, Some("1h".to_string()));
    }

    #[test]
    fn cache_ttl_or_default_parses() {
        let config = AppConfig {
            cache_ttl: Some("2h".to_string()),
            ..Default::default()
        };
        assert_eq!(config.cache_ttl_or_default().as_secs(), 7200);
    }

    #[test]
    fn cache_ttl_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            cache_ttl: Some("soon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.cache_ttl_or_default(), Duration::default_cache_ttl());
    }

    #[test]
    fn timeout_or_default_uses_default_on_none() {
        let config = AppConfig::empty();
        assert_eq!(config.timeout_or_default().as_secs(), 60);
    }

    #[test]
    fn model_and_base_url_fall_back_to_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.model_or_default(), DEFAULT_MODEL);
        assert_eq!(config.base_url_or_default(), DEFAULT_BASE_URL);
    }
}
