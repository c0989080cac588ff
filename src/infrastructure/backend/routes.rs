//! Dashboard REST endpoint paths

use crate::domain::clipboard::ClipboardEntry;
use crate::domain::item::{ItemId, ItemKind};
use crate::domain::selection::Disposition;

pub const BULK_DELETE: &str = "/documents/bulk-delete";
pub const CREATE_FOLDER: &str = "/documents/folders/create";
pub const EMPTY_BIN: &str = "/recycle-bin/empty";
pub const NOTIFICATIONS_MARK_READ: &str = "/notifications/mark-read";
pub const NOTIFICATIONS_CLEAR_ALL: &str = "/notifications/clear-all";

/// Base path of a single item
pub fn item(kind: ItemKind, id: &ItemId) -> String {
    match kind {
        ItemKind::Document => format!("/documents/{}", id),
        ItemKind::Folder => format!("/documents/folders/{}", id),
    }
}

pub fn transfer(entry: &ClipboardEntry) -> String {
    format!("{}/{}", item(entry.kind, &entry.id), entry.operation)
}

pub fn delete(kind: ItemKind, id: &ItemId, disposition: Disposition) -> String {
    format!("{}/{}", item(kind, id), disposition.path_segment())
}

pub fn rename(kind: ItemKind, id: &ItemId) -> String {
    format!("{}/rename", item(kind, id))
}

pub fn archive(document_id: &ItemId) -> String {
    format!("{}/archive", item(ItemKind::Document, document_id))
}

/// Undo a soft delete
pub fn restore(kind: ItemKind, id: &ItemId) -> String {
    format!("/recycle-bin/{}/{}/restore", kind, id)
}

/// Undo an archive
pub fn unarchive(document_id: &ItemId) -> String {
    format!("{}/restore", item(ItemKind::Document, document_id))
}

pub fn favorite_toggle(kind: ItemKind, id: &ItemId) -> String {
    format!("/favorites/{}/{}/toggle", kind, id)
}

pub fn notification_delete(id: &ItemId) -> String {
    format!("/notifications/delete/{}", id)
}
