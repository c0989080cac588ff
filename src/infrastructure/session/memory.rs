//! In-memory session store adapter

use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::ports::{SessionError, SessionStore};
use crate::domain::clipboard::ClipboardEntry;

/// Clipboard slot held in process memory, encoded the same way as on disk
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw encoded entry, as it would appear in storage
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self) -> Result<Option<ClipboardEntry>, SessionError> {
        let slot = self
            .slot
            .lock()
            .map_err(|e| SessionError::ReadFailed(e.to_string()))?;
        slot.as_deref()
            .map(ClipboardEntry::from_json)
            .transpose()
            .map_err(|e| SessionError::ReadFailed(e.to_string()))
    }

    async fn set(&self, entry: &ClipboardEntry) -> Result<(), SessionError> {
        let json = entry
            .to_json()
            .map_err(|e| SessionError::WriteFailed(e.to_string()))?;
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| SessionError::WriteFailed(e.to_string()))?;
        *slot = Some(json);
        Ok(())
    }

    async fn clear(&self) -> Result<(), SessionError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|e| SessionError::WriteFailed(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{ItemId, ItemKind, TransferOperation};

    #[tokio::test]
    async fn stores_json_encoded_entry() {
        let store = MemorySessionStore::new();
        let entry = ClipboardEntry::new(
            ItemKind::Folder,
            TransferOperation::Move,
            ItemId::new("7").unwrap(),
        );

        store.set(&entry).await.unwrap();

        assert_eq!(
            store.raw().as_deref(),
            Some(r#"{"kind":"folder","operation":"move","id":"7"}"#)
        );
        assert_eq!(store.get().await.unwrap(), Some(entry));
    }

    #[tokio::test]
    async fn clear_empties_slot() {
        let store = MemorySessionStore::new();
        let entry = ClipboardEntry::new(
            ItemKind::Document,
            TransferOperation::Copy,
            ItemId::new("2").unwrap(),
        );
        store.set(&entry).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.get().await.unwrap().is_none());
        assert!(store.raw().is_none());
    }
}
