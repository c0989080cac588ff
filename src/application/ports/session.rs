//! Session store port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clipboard::ClipboardEntry;

/// Session storage errors
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error("Failed to read session: {0}")]
    ReadFailed(String),

    #[error("Failed to write session: {0}")]
    WriteFailed(String),
}

/// Port for the session-scoped clipboard slot.
///
/// Holds at most one entry. There is a single writer per session, so
/// implementations need no cross-process locking.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the staged entry, if any.
    async fn get(&self) -> Result<Option<ClipboardEntry>, SessionError>;

    /// Stage an entry, replacing whatever was there.
    async fn set(&self, entry: &ClipboardEntry) -> Result<(), SessionError>;

    /// Drop the staged entry. Clearing an empty slot is not an error.
    async fn clear(&self) -> Result<(), SessionError>;
}

/// Blanket implementation for boxed session stores
#[async_trait]
impl SessionStore for Box<dyn SessionStore> {
    async fn get(&self) -> Result<Option<ClipboardEntry>, SessionError> {
        self.as_ref().get().await
    }

    async fn set(&self, entry: &ClipboardEntry) -> Result<(), SessionError> {
        self.as_ref().set(entry).await
    }

    async fn clear(&self) -> Result<(), SessionError> {
        self.as_ref().clear().await
    }
}
