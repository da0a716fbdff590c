//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::Duration;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    presenter.info("Set your key with: life-coach config set api_key <key>");
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;
    validate_config_value(key, value)?;

    let mut config = store.load().await?;
    let value = value.trim().to_string();

    match key {
        "api_key" => config.api_key = Some(value.clone()),
        "model" => config.model = Some(value.clone()),
        "base_url" => config.base_url = Some(value.clone()),
        "timeout" => config.timeout = Some(value.clone()),
        "cache_ttl" => config.cache_ttl = Some(value.clone()),
        _ => unreachable!(), // Already validated
    }

    store.save(&config).await?;

    let shown = if key == "api_key" {
        mask_api_key(&value)
    } else {
        value
    };
    presenter.success(&format!("{} = {}", key, shown));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    check_key(key)?;

    let config = store.load().await?;

    let value = match key {
        "api_key" => config.api_key.map(|s| mask_api_key(&s)),
        "model" => config.model,
        "base_url" => config.base_url,
        "timeout" => config.timeout,
        "cache_ttl" => config.cache_ttl,
        _ => unreachable!(),
    };

    presenter.output(value.as_deref().unwrap_or(NOT_SET));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    let api_key = config.api_key.as_deref().map(mask_api_key);
    presenter.key_value("api_key", api_key.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("model", config.model.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("base_url", config.base_url.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("timeout", config.timeout.as_deref().unwrap_or(NOT_SET));
    presenter.key_value("cache_ttl", config.cache_ttl.as_deref().unwrap_or(NOT_SET));

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

fn check_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        })
    }
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        key: key.to_string(),
        message,
    };

    match key {
        "timeout" | "cache_ttl" => {
            value
                .parse::<Duration>()
                .map_err(|e| invalid(e.to_string()))?;
        }
        "base_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(invalid(format!(
                    "Invalid value '{}'. Expected an http:// or https:// URL",
                    value
                )));
            }
        }
        "api_key" | "model" => {
            if value.trim().is_empty() {
                return Err(invalid("Value must not be empty".to_string()));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Mask API key for display (show first 4 and last 4 chars)
fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        "*".repeat(chars.len())
    } else {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[test]
    fn mask_api_key_long() {
        assert_eq!(mask_api_key("abcdefghijklmnop"), "abcd...mnop");
    }

    #[test]
    fn mask_api_key_short() {
        assert_eq!(mask_api_key("short"), "*****");
    }

    #[test]
    fn validate_durations() {
        assert!(validate_config_value("cache_ttl", "24h").is_ok());
        assert!(validate_config_value("timeout", "30s").is_ok());
        assert!(validate_config_value("cache_ttl", "tomorrow").is_err());
        assert!(validate_config_value("timeout", "0s").is_err());
    }

    #[test]
    fn validate_base_url() {
        assert!(validate_config_value("base_url", "http://localhost:8080").is_ok());
        assert!(validate_config_value("base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn validate_non_empty_strings() {
        assert!(validate_config_value("model", "gemini-1.5-pro").is_ok());
        assert!(validate_config_value("api_key", "  ").is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(matches!(
            check_key("duration"),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[tokio::test]
    async fn set_persists_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "cache_ttl", "6h").await.unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.cache_ttl, Some("6h".to_string()));
    }

    #[tokio::test]
    async fn set_invalid_value_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        assert!(handle_set(&store, &presenter, "timeout", "soon").await.is_err());
        assert!(!store.exists());
    }
}
