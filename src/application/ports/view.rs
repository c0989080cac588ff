//! List view port interface

use async_trait::async_trait;

use crate::domain::item::{ItemId, ItemKind};

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Info,
    Success,
    Error,
}

/// Port for the list view the user interacts with
#[async_trait]
pub trait View: Send + Sync {
    /// Items currently checked in the list.
    async fn checked_items(&self) -> Vec<(ItemKind, ItemId)>;

    /// Ask the user to confirm; false means declined.
    async fn confirm(&self, message: &str) -> bool;

    /// Ask the user for text; None means cancelled.
    async fn prompt(&self, message: &str) -> Option<String>;

    /// Show a message. Errors are blocking alerts, the rest informational.
    async fn notify(&self, message: &str, notice: Notice);

    /// Current favorite icon state of an item; None if the view cannot tell.
    async fn is_favorite(&self, kind: ItemKind, id: &ItemId) -> Option<bool>;

    /// Set the favorite icon of an item. None means it was toggled but the
    /// new state is unknown.
    async fn set_favorite(&self, kind: ItemKind, id: &ItemId, favorited: Option<bool>);

    /// Re-fetch and redraw after a successful mutation.
    async fn refresh(&self);
}

/// Blanket implementation for boxed views
#[async_trait]
impl View for Box<dyn View> {
    async fn checked_items(&self) -> Vec<(ItemKind, ItemId)> {
        self.as_ref().checked_items().await
    }

    async fn confirm(&self, message: &str) -> bool {
        self.as_ref().confirm(message).await
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        self.as_ref().prompt(message).await
    }

    async fn notify(&self, message: &str, notice: Notice) {
        self.as_ref().notify(message, notice).await
    }

    async fn is_favorite(&self, kind: ItemKind, id: &ItemId) -> Option<bool> {
        self.as_ref().is_favorite(kind, id).await
    }

    async fn set_favorite(&self, kind: ItemKind, id: &ItemId, favorited: Option<bool>) {
        self.as_ref().set_favorite(kind, id, favorited).await
    }

    async fn refresh(&self) {
        self.as_ref().refresh().await
    }
}
