//! Clipboard, rename, favorite and delete coordination use case

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::clipboard::ClipboardEntry;
use crate::domain::item::{ItemId, ItemKind, TransferOperation};
use crate::domain::selection::{DeleteIntent, DeleteMode, Disposition, SelectionSet};
use crate::domain::sequence::{RequestChannels, RequestSequence, RequestTag};

use super::ports::{BackendError, DocumentBackend, Notice, SessionError, SessionStore, View};

/// Confirmation asked before archiving
pub const ARCHIVE_CONFIRMATION: &str = "Archive this document?";

/// Confirmation asked before a permanent delete
pub const PERMANENT_DELETE_CONFIRMATION: &str = "This action cannot be undone. Continue?";

/// Errors from the coordinator
#[derive(Debug, Error)]
pub enum CoordinatorError {
    #[error("Clipboard is empty")]
    EmptyClipboard,

    #[error("Nothing selected")]
    EmptySelection,

    #[error("Cancelled")]
    Cancelled,

    #[error("Response arrived after a newer request and was ignored")]
    StaleResponse,

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl CoordinatorError {
    /// Text for the user-facing alert, or None when nothing should be shown
    pub fn user_message(&self) -> Option<String> {
        match self {
            Self::Cancelled | Self::StaleResponse => None,
            Self::Backend(e) => Some(e.user_message()),
            other => Some(other.to_string()),
        }
    }
}

/// State a request touches. Only requests on the same channel can make
/// each other stale.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Channel {
    /// Paste, which consumes the staged entry
    Clipboard,
    /// Rename, archive, restore and single deletes of one item
    Item(ItemKind, ItemId),
    /// The favorite icon of one item
    Favorite(ItemKind, ItemId),
    /// Bulk deletes and emptying the bin
    Selection,
    /// Folder creation
    Tree,
}

/// An issued request: its channel's sequence plus its tag
struct Ticket {
    sequence: Arc<RequestSequence>,
    tag: RequestTag,
}

/// Turns user gestures on documents and folders into backend calls.
///
/// Clipboard state lives in the injected session store so it survives
/// navigation. Every gesture issues at most one request. Requests are tagged
/// per channel, and a completion older than the newest applied one on the
/// same channel is dropped without touching the clipboard or the view.
pub struct ClipboardCoordinator<B, S, V>
where
    B: DocumentBackend,
    S: SessionStore,
    V: View,
{
    backend: B,
    session: S,
    view: V,
    channels: RequestChannels<Channel>,
}

impl<B, S, V> ClipboardCoordinator<B, S, V>
where
    B: DocumentBackend,
    S: SessionStore,
    V: View,
{
    /// Create a new coordinator
    pub fn new(backend: B, session: S, view: V) -> Self {
        Self {
            backend,
            session,
            view,
            channels: RequestChannels::new(),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Stage a copy or move. No network call.
    pub async fn begin_transfer(
        &self,
        kind: ItemKind,
        operation: TransferOperation,
        id: ItemId,
    ) -> Result<ClipboardEntry, CoordinatorError> {
        let entry = ClipboardEntry::new(kind, operation, id);
        let outcome = match self.session.set(&entry).await {
            Ok(()) => {
                info!(kind = %entry.kind, operation = %entry.operation, id = %entry.id, "staged transfer");
                self.view.notify(&entry.staged_message(), Notice::Info).await;
                Ok(entry)
            }
            Err(e) => Err(e.into()),
        };
        self.report(outcome).await
    }

    /// The currently staged entry, if any
    pub async fn staged(&self) -> Result<Option<ClipboardEntry>, CoordinatorError> {
        let outcome = self.session.get().await.map_err(CoordinatorError::from);
        self.report(outcome).await
    }

    /// Drop the staged entry without pasting
    pub async fn clear_clipboard(&self) -> Result<(), CoordinatorError> {
        let outcome = self.session.clear().await.map_err(CoordinatorError::from);
        self.report(outcome).await
    }

    /// Paste the staged entry into `destination` (None = root).
    ///
    /// The clipboard is cleared only after the server accepts; on failure it
    /// is kept so the user can retry elsewhere.
    pub async fn paste(
        &self,
        destination: Option<&ItemId>,
    ) -> Result<ClipboardEntry, CoordinatorError> {
        let outcome = self.try_paste(destination).await;
        self.report(outcome).await
    }

    async fn try_paste(
        &self,
        destination: Option<&ItemId>,
    ) -> Result<ClipboardEntry, CoordinatorError> {
        let entry = self
            .session
            .get()
            .await?
            .ok_or(CoordinatorError::EmptyClipboard)?;

        let ticket = self.issue(Channel::Clipboard);
        let result = self.backend.transfer(&entry, destination).await;
        self.settle(&ticket)?;
        result?;

        self.session.clear().await?;
        info!(kind = %entry.kind, operation = %entry.operation, id = %entry.id, "pasted");
        self.view.refresh().await;
        Ok(entry)
    }

    /// Ask the view for a new name, then rename
    pub async fn prompt_rename(&self, kind: ItemKind, id: &ItemId) -> Result<(), CoordinatorError> {
        let message = format!("Enter new {} name:", kind.as_str());
        match self.view.prompt(&message).await {
            Some(name) => self.rename(kind, id, &name).await,
            None => Err(CoordinatorError::Cancelled),
        }
    }

    /// Rename an item. Blank names abort without a network call.
    pub async fn rename(
        &self,
        kind: ItemKind,
        id: &ItemId,
        new_name: &str,
    ) -> Result<(), CoordinatorError> {
        let name = new_name.trim();
        if name.is_empty() {
            debug!(%kind, %id, "rename aborted: blank name");
            return Err(CoordinatorError::Cancelled);
        }

        let ticket = self.issue(Channel::Item(kind, id.clone()));
        let result = self.backend.rename(kind, id, name).await;
        let outcome = self.finish(&ticket, result).await;
        self.report(outcome).await
    }

    /// Toggle the favorite flag.
    ///
    /// The view's icon changes only after the server confirms. Returns the
    /// new state, or None when neither the server nor the view knows it.
    pub async fn toggle_favorite(
        &self,
        kind: ItemKind,
        id: &ItemId,
    ) -> Result<Option<bool>, CoordinatorError> {
        let outcome = self.try_toggle_favorite(kind, id).await;
        self.report(outcome).await
    }

    async fn try_toggle_favorite(
        &self,
        kind: ItemKind,
        id: &ItemId,
    ) -> Result<Option<bool>, CoordinatorError> {
        let ticket = self.issue(Channel::Favorite(kind, id.clone()));
        let result = self.backend.toggle_favorite(kind, id).await;
        self.settle(&ticket)?;
        let outcome = result?;

        let favorited = match outcome.favorited {
            Some(state) => Some(state),
            None => self.view.is_favorite(kind, id).await.map(|current| !current),
        };
        self.view.set_favorite(kind, id, favorited).await;
        Ok(favorited)
    }

    /// Archive a document after explicit confirmation
    pub async fn archive(&self, document_id: &ItemId) -> Result<(), CoordinatorError> {
        if !self.view.confirm(ARCHIVE_CONFIRMATION).await {
            return Err(CoordinatorError::Cancelled);
        }

        let ticket = self.issue(Channel::Item(ItemKind::Document, document_id.clone()));
        let result = self.backend.archive(document_id).await;
        let outcome = self.finish(&ticket, result).await;
        self.report(outcome).await
    }

    /// Bring an archived document back
    pub async fn unarchive(&self, document_id: &ItemId) -> Result<(), CoordinatorError> {
        let ticket = self.issue(Channel::Item(ItemKind::Document, document_id.clone()));
        let result = self.backend.unarchive(document_id).await;
        let outcome = self.finish(&ticket, result).await;
        self.report(outcome).await
    }

    /// Bring a soft-deleted item back from the recycle bin
    pub async fn restore(&self, kind: ItemKind, id: &ItemId) -> Result<(), CoordinatorError> {
        let ticket = self.issue(Channel::Item(kind, id.clone()));
        let result = self.backend.restore(kind, id).await;
        let outcome = self.finish(&ticket, result).await;
        self.report(outcome).await
    }

    /// Permanently delete everything in the recycle bin, after confirmation
    pub async fn empty_bin(&self) -> Result<(), CoordinatorError> {
        if !self.view.confirm(PERMANENT_DELETE_CONFIRMATION).await {
            return Err(CoordinatorError::Cancelled);
        }

        let ticket = self.issue(Channel::Selection);
        let result = self.backend.empty_bin().await;
        let outcome = self.finish(&ticket, result).await;
        self.report(outcome).await
    }

    /// Create a folder. Blank names abort without a network call.
    pub async fn create_folder(
        &self,
        name: &str,
        parent: Option<&ItemId>,
    ) -> Result<(), CoordinatorError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoordinatorError::Cancelled);
        }

        let ticket = self.issue(Channel::Tree);
        let result = self.backend.create_folder(name, parent).await;
        let outcome = self.finish(&ticket, result).await;
        self.report(outcome).await
    }

    /// Read the checked items from the view. Never cached.
    pub async fn build_selection(&self) -> SelectionSet {
        self.view.checked_items().await.into_iter().collect()
    }

    /// Build the selection and bulk-delete it
    pub async fn delete_selected(
        &self,
        disposition: Disposition,
    ) -> Result<Option<String>, CoordinatorError> {
        let selection = self.build_selection().await;
        self.request_delete(DeleteIntent::bulk(selection, disposition))
            .await
    }

    /// Send a delete.
    ///
    /// Fails fast on an empty selection. Permanent deletes need confirmation.
    /// On failure the selection is left as is so the user can retry.
    pub async fn request_delete(
        &self,
        intent: DeleteIntent,
    ) -> Result<Option<String>, CoordinatorError> {
        let outcome = self.try_request_delete(&intent).await;
        self.report(outcome).await
    }

    async fn try_request_delete(
        &self,
        intent: &DeleteIntent,
    ) -> Result<Option<String>, CoordinatorError> {
        if intent.is_empty() {
            return Err(CoordinatorError::EmptySelection);
        }

        if intent.disposition().is_permanent()
            && !self.view.confirm(PERMANENT_DELETE_CONFIRMATION).await
        {
            return Err(CoordinatorError::Cancelled);
        }

        let result = match (intent.mode(), intent.items().single()) {
            (DeleteMode::Single(kind), Some((_, id))) => {
                let ticket = self.issue(Channel::Item(kind, id.clone()));
                let result = self
                    .backend
                    .delete_item(kind, id, intent.disposition())
                    .await
                    .map(|()| None);
                self.settle(&ticket)?;
                result
            }
            _ => {
                let ticket = self.issue(Channel::Selection);
                let result = self
                    .backend
                    .bulk_delete(intent.items(), intent.disposition())
                    .await;
                self.settle(&ticket)?;
                result
            }
        };
        let message = result?;

        info!(
            count = intent.items().len(),
            disposition = %intent.disposition(),
            "deleted"
        );
        if let Some(ref text) = message {
            self.view.notify(text, Notice::Success).await;
        }
        self.view.refresh().await;
        Ok(message)
    }

    /// Tag a request on its channel
    fn issue(&self, channel: Channel) -> Ticket {
        let sequence = self.channels.channel(channel);
        let tag = sequence.issue();
        Ticket { sequence, tag }
    }

    /// Apply a unit result: stale check, then refresh on success
    async fn finish(
        &self,
        ticket: &Ticket,
        result: Result<(), BackendError>,
    ) -> Result<(), CoordinatorError> {
        self.settle(ticket)?;
        result?;
        self.view.refresh().await;
        Ok(())
    }

    /// Drop completions that a newer request on the same channel has already overtaken
    fn settle(&self, ticket: &Ticket) -> Result<(), CoordinatorError> {
        if ticket.sequence.try_apply(ticket.tag) {
            Ok(())
        } else {
            debug!(
                tag = ticket.tag.value(),
                latest = ticket.sequence.last_applied(),
                "stale response ignored"
            );
            Err(CoordinatorError::StaleResponse)
        }
    }

    /// Surface a failure to the user at the point of the gesture
    async fn report<T>(&self, outcome: Result<T, CoordinatorError>) -> Result<T, CoordinatorError> {
        if let Err(ref e) = outcome {
            if let Some(message) = e.user_message() {
                warn!(error = %e, "operation failed");
                self.view.notify(&message, Notice::Error).await;
            }
        }
        outcome
    }
}
