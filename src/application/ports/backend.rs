//! Document backend port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::clipboard::ClipboardEntry;
use crate::domain::item::{ItemId, ItemKind};
use crate::domain::selection::{Disposition, SelectionSet};

/// Message shown when the server rejects without saying why
pub const GENERIC_SERVER_ERROR: &str = "Server error";

/// Backend errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Network(String),

    #[error("Server returned invalid response: {0}")]
    MalformedResponse(String),

    #[error("{}", .0.as_deref().unwrap_or(GENERIC_SERVER_ERROR))]
    ServerRejected(Option<String>),
}

impl BackendError {
    /// Text for the user-facing alert
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Request failed".to_string(),
            Self::MalformedResponse(_) => "Server returned invalid response.".to_string(),
            Self::ServerRejected(Some(message)) => message.clone(),
            Self::ServerRejected(None) => GENERIC_SERVER_ERROR.to_string(),
        }
    }
}

/// Result of a favorite toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FavoriteOutcome {
    /// New state, when the server reports it
    pub favorited: Option<bool>,
}

/// Port for the document/folder REST backend
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Copy or move the staged item under `destination` (None = root).
    async fn transfer(
        &self,
        entry: &ClipboardEntry,
        destination: Option<&ItemId>,
    ) -> Result<(), BackendError>;

    /// Rename a document or folder.
    async fn rename(&self, kind: ItemKind, id: &ItemId, name: &str) -> Result<(), BackendError>;

    /// Toggle the favorite flag of an item.
    async fn toggle_favorite(
        &self,
        kind: ItemKind,
        id: &ItemId,
    ) -> Result<FavoriteOutcome, BackendError>;

    /// Archive a document.
    async fn archive(&self, document_id: &ItemId) -> Result<(), BackendError>;

    /// Delete one item through its per-item endpoint.
    async fn delete_item(
        &self,
        kind: ItemKind,
        id: &ItemId,
        disposition: Disposition,
    ) -> Result<(), BackendError>;

    /// Delete a whole selection in one request.
    ///
    /// # Returns
    /// The server's confirmation message, if any
    async fn bulk_delete(
        &self,
        selection: &SelectionSet,
        disposition: Disposition,
    ) -> Result<Option<String>, BackendError>;

    /// Create a folder under `parent` (None = root).
    async fn create_folder(&self, name: &str, parent: Option<&ItemId>) -> Result<(), BackendError>;

    /// Bring a soft-deleted item back from the recycle bin.
    async fn restore(&self, kind: ItemKind, id: &ItemId) -> Result<(), BackendError>;

    /// Bring an archived document back.
    async fn unarchive(&self, document_id: &ItemId) -> Result<(), BackendError>;

    /// Permanently delete everything in the recycle bin.
    async fn empty_bin(&self) -> Result<(), BackendError>;
}

/// Port for notification housekeeping endpoints
#[async_trait]
pub trait NotificationBackend: Send + Sync {
    /// Mark every notification as read.
    async fn mark_read(&self) -> Result<(), BackendError>;

    /// Delete a single notification.
    async fn delete_notification(&self, id: &ItemId) -> Result<(), BackendError>;

    /// Delete all notifications.
    async fn clear_notifications(&self) -> Result<(), BackendError>;
}
