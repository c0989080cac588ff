//! File-backed session store adapter

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;
use tracing::warn;

use crate::application::ports::{SessionError, SessionStore};
use crate::domain::clipboard::ClipboardEntry;

/// Clipboard slot persisted as a single JSON file.
///
/// The file plays the role of browser session storage: it survives between
/// CLI invocations until cleared. A file that no longer decodes is treated
/// as an empty slot.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn get(&self) -> Result<Option<ClipboardEntry>, SessionError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SessionError::ReadFailed(e.to_string())),
        };

        match ClipboardEntry::from_json(&content) {
            Ok(entry) => Ok(Some(entry)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unreadable clipboard entry");
                Ok(None)
            }
        }
    }

    async fn set(&self, entry: &ClipboardEntry) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| SessionError::WriteFailed(e.to_string()))?;
        }

        let json = entry
            .to_json()
            .map_err(|e| SessionError::WriteFailed(e.to_string()))?;

        fs::write(&self.path, json)
            .await
            .map_err(|e| SessionError::WriteFailed(e.to_string()))
    }

    async fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::WriteFailed(e.to_string())),
        }
    }
}
