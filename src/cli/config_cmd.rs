//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

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
    Ok(())
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    }
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key(key));
    }

    validate_config_value(key, value)?;

    let mut config = store.load().await?;

    match key {
        "base_url" => config.base_url = Some(value.trim_end_matches('/').to_string()),
        "csrf_token" => config.csrf_token = Some(value.to_string()),
        "session_cookie" => config.session_cookie = Some(value.to_string()),
        "session_file" => config.session_file = Some(value.to_string()),
        "timeout_secs" => config.timeout_secs = Some(parse_timeout(key, value)?),
        _ => return Err(unknown_key(key)),
    }

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, display_value(key, value)));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    if !is_valid_config_key(key) {
        return Err(unknown_key(key));
    }

    let config = store.load().await?;

    let value = match key {
        "base_url" => config.base_url,
        "csrf_token" => config.csrf_token.map(|s| mask_secret(&s)),
        "session_cookie" => config.session_cookie.map(|s| mask_secret(&s)),
        "session_file" => config.session_file,
        "timeout_secs" => config.timeout_secs.map(|t| t.to_string()),
        _ => return Err(unknown_key(key)),
    };

    presenter.output(value.as_deref().unwrap_or("(not set)"));
    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;
    let not_set = || "(not set)".to_string();

    presenter.key_value("base_url", config.base_url.as_deref().unwrap_or("(not set)"));
    presenter.key_value(
        "csrf_token",
        &config
            .csrf_token
            .map(|s| mask_secret(&s))
            .unwrap_or_else(not_set),
    );
    presenter.key_value(
        "session_cookie",
        &config
            .session_cookie
            .map(|s| mask_secret(&s))
            .unwrap_or_else(not_set),
    );
    presenter.key_value(
        "session_file",
        config.session_file.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "timeout_secs",
        &config
            .timeout_secs
            .map(|t| t.to_string())
            .unwrap_or_else(not_set),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "base_url" => {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "URL must start with http:// or https://".to_string(),
                });
            }
        }
        "timeout_secs" => {
            parse_timeout(key, value)?;
        }
        "session_file" => {
            if value.trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Path must not be empty".to_string(),
                });
            }
        }
        _ => {} // tokens and cookies are opaque
    }
    Ok(())
}

/// Parse a positive number of seconds
fn parse_timeout(key: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: "Value must be a positive number of seconds".to_string(),
        }),
    }
}

fn display_value(key: &str, value: &str) -> String {
    match key {
        "csrf_token" | "session_cookie" => mask_secret(value),
        _ => value.to_string(),
    }
}

/// Mask a secret for display (show first 4 and last 4 chars)
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
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

    #[test]
    fn mask_secret_long() {
        assert_eq!(mask_secret("abcdefghijklmnop"), "abcd...mnop");
    }

    #[test]
    fn mask_secret_short() {
        assert_eq!(mask_secret("short"), "*****");
    }

    #[test]
    fn validate_base_url() {
        assert!(validate_config_value("base_url", "https://docs.example.com").is_ok());
        assert!(validate_config_value("base_url", "docs.example.com").is_err());
    }

    #[test]
    fn validate_timeout() {
        assert!(validate_config_value("timeout_secs", "15").is_ok());
        assert!(validate_config_value("timeout_secs", "0").is_err());
        assert!(validate_config_value("timeout_secs", "soon").is_err());
    }

    #[test]
    fn validate_session_file() {
        assert!(validate_config_value("session_file", "/tmp/s.json").is_ok());
        assert!(validate_config_value("session_file", "  ").is_err());
    }

    #[test]
    fn secrets_are_masked_on_set() {
        assert_eq!(display_value("csrf_token", "abcdefghijklmnop"), "abcd...mnop");
        assert_eq!(display_value("base_url", "http://x"), "http://x");
    }

    #[tokio::test]
    async fn set_then_get_round_trip() {
        use crate::infrastructure::XdgConfigStore;

        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "base_url", "https://docs.example.com/")
            .await
            .unwrap();
        handle_set(&store, &presenter, "timeout_secs", "12")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://docs.example.com"));
        assert_eq!(config.timeout_secs, Some(12));
        assert!(handle_set(&store, &presenter, "api_key", "x").await.is_err());
    }
}
