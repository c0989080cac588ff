//! Staged copy/move value object

use serde::{Deserialize, Serialize};

use crate::domain::item::{ItemId, ItemKind, TransferOperation};

/// One staged copy or move.
///
/// Only one entry exists per session; staging a new one replaces the old.
/// Persisted as `{"kind": ..., "operation": ..., "id": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardEntry {
    pub kind: ItemKind,
    pub operation: TransferOperation,
    pub id: ItemId,
}

impl ClipboardEntry {
    pub fn new(kind: ItemKind, operation: TransferOperation, id: ItemId) -> Self {
        Self {
            kind,
            operation,
            id,
        }
    }

    /// Encode for session storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decode from session storage
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Message shown when the entry is staged
    pub fn staged_message(&self) -> String {
        format!(
            "{} ready to {}. Open target folder and click Paste.",
            self.kind.label(),
            self.operation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder_move() -> ClipboardEntry {
        ClipboardEntry::new(
            ItemKind::Folder,
            TransferOperation::Move,
            ItemId::new("7").unwrap(),
        )
    }

    #[test]
    fn json_shape() {
        let json = folder_move().to_json().unwrap();
        assert_eq!(json, r#"{"kind":"folder","operation":"move","id":"7"}"#);
    }

    #[test]
    fn restores_identical_entry() {
        let entry = folder_move();
        let restored = ClipboardEntry::from_json(&entry.to_json().unwrap()).unwrap();
        assert_eq!(restored, entry);
    }

    #[test]
    fn accepts_numeric_id_from_storage() {
        let entry =
            ClipboardEntry::from_json(r#"{"kind":"document","operation":"copy","id":3}"#).unwrap();
        assert_eq!(entry.id.as_str(), "3");
        assert_eq!(entry.kind, ItemKind::Document);
    }

    #[test]
    fn staged_message_names_kind_and_operation() {
        assert_eq!(
            folder_move().staged_message(),
            "Folder ready to move. Open target folder and click Paste."
        );
    }
}
