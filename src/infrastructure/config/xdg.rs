//! XDG config store adapter
//!
//! Keeps the CLI settings in `$XDG_CONFIG_HOME/docdash/config.toml`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::application::ports::ConfigStore;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

const APP_DIR: &str = "docdash";
const CONFIG_FILE: &str = "config.toml";

/// Keys left unset by `init`, written as commented hints
const UNSET_HINTS: &str = "\
# csrf_token = \"\"        # scraped from /dashboard/ when unset
# session_cookie = \"\"    # sent as the Cookie header
# session_file = \"\"      # clipboard slot, defaults to the cache dir
";

/// Config store under the user's XDG config directory
pub struct XdgConfigStore {
    path: PathBuf,
}

impl XdgConfigStore {
    pub fn new() -> Self {
        let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("~/.config"));
        Self {
            path: base.join(APP_DIR).join(CONFIG_FILE),
        }
    }

    /// Store at an explicit file location
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn decode(content: &str) -> Result<AppConfig, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    fn encode(config: &AppConfig) -> Result<String, ConfigError> {
        toml::to_string(config).map_err(|e| ConfigError::WriteError(e.to_string()))
    }

    /// Defaults plus commented hints for the optional keys
    fn template() -> Result<String, ConfigError> {
        let defaults = Self::encode(&AppConfig::defaults())?;
        Ok(format!(
            "# docdash configuration\n# Flags and DOCDASH_* variables override these values.\n\n{}\n{}",
            defaults, UNSET_HINTS
        ))
    }

    /// Write through a sibling temp file so readers never see a partial file
    async fn write_file(&self, content: &str) -> Result<(), ConfigError> {
        let write_err = |e: std::io::Error| ConfigError::WriteError(e.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let staging = staging_path(&self.path);
        fs::write(&staging, content).await.map_err(write_err)?;
        if let Err(e) = fs::rename(&staging, &self.path).await {
            let _ = fs::remove_file(&staging).await;
            return Err(write_err(e));
        }

        debug!(path = %self.path.display(), "config written");
        Ok(())
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| CONFIG_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}

impl Default for XdgConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ConfigStore for XdgConfigStore {
    async fn load(&self) -> Result<AppConfig, ConfigError> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => Self::decode(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(AppConfig::empty()),
            Err(e) => Err(ConfigError::ReadError(e.to_string())),
        }
    }

    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError> {
        let content = Self::encode(config)?;
        self.write_file(&content).await
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    async fn init(&self) -> Result<(), ConfigError> {
        if self.exists() {
            return Err(ConfigError::AlreadyExists(self.path.display().to_string()));
        }
        self.write_file(&Self::template()?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> XdgConfigStore {
        XdgConfigStore::with_path(dir.path().join(APP_DIR).join(CONFIG_FILE))
    }

    #[test]
    fn default_path_is_xdg() {
        let path = XdgConfigStore::new().path();
        assert!(path.ends_with("docdash/config.toml"));
    }

    #[test]
    fn decode_dashboard_settings() {
        let content = r#"
base_url = "https://docs.example.com"
csrf_token = "tok"
timeout_secs = 10
"#;

        let config = XdgConfigStore::decode(content).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://docs.example.com"));
        assert_eq!(config.csrf_token.as_deref(), Some("tok"));
        assert_eq!(config.timeout_secs, Some(10));
        assert!(config.session_cookie.is_none());
    }

    #[test]
    fn decode_rejects_wrong_types() {
        assert!(XdgConfigStore::decode("timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn staging_file_sits_next_to_target() {
        let staged = staging_path(Path::new("/etc/docdash/config.toml"));
        assert_eq!(staged, PathBuf::from("/etc/docdash/config.toml.tmp"));
    }

    #[tokio::test]
    async fn init_writes_commented_template() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.init().await.unwrap();
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("# csrf_token"));

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.base_url, AppConfig::defaults().base_url);
        assert_eq!(loaded.timeout_secs, AppConfig::defaults().timeout_secs);
        assert!(loaded.csrf_token.is_none());
        assert!(matches!(store.init().await, Err(ConfigError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn save_replaces_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store.init().await.unwrap();
        let config = AppConfig {
            session_cookie: Some("sid=1".to_string()),
            ..AppConfig::empty()
        };
        store.save(&config).await.unwrap();

        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.session_cookie.as_deref(), Some("sid=1"));
        assert!(loaded.base_url.is_none());
        assert!(!staging_path(&store.path()).exists());
    }

    #[tokio::test]
    async fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let config = store_in(&dir).load().await.unwrap();
        assert!(config.base_url.is_none());
    }

    #[tokio::test]
    async fn load_directory_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path());
        assert!(matches!(store.load().await, Err(ConfigError::ReadError(_))));
    }
}
