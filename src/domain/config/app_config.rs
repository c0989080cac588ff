//! Application configuration value object

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Backend used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Request timeout used when nothing else is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub csrf_token: Option<String>,
    pub session_cookie: Option<String>,
    pub session_file: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            csrf_token: None,
            session_cookie: None,
            session_file: None,
            timeout_secs: Some(DEFAULT_TIMEOUT_SECS),
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
            base_url: other.base_url.or(self.base_url),
            csrf_token: other.csrf_token.or(self.csrf_token),
            session_cookie: other.session_cookie.or(self.session_cookie),
            session_file: other.session_file.or(self.session_file),
            timeout_secs: other.timeout_secs.or(self.timeout_secs),
        }
    }

    /// Get base URL, or the local default if not set
    pub fn base_url_or_default(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Get request timeout, or the default if not set/zero
    pub fn timeout_or_default(&self) -> Duration {
        let secs = self
            .timeout_secs
            .filter(|s| *s > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }

    /// Get the clipboard session file, or the cache-dir default
    pub fn session_file_or_default(&self) -> PathBuf {
        match self.session_file.as_deref() {
            Some(path) => PathBuf::from(path),
            None => dirs::cache_dir()
                .unwrap_or_else(|| PathBuf::from("~/.cache"))
                .join("docdash")
                .join("session.json"),
        }
    }
}
