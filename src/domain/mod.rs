//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod item;
pub mod selection;
pub mod sequence;

// Re-export common types
pub use clipboard::ClipboardEntry;
pub use config::AppConfig;
pub use error::*;
pub use item::{ItemId, ItemKind, TransferOperation};
pub use selection::{DeleteIntent, DeleteMode, Disposition, SelectionSet};
pub use sequence::{RequestChannels, RequestSequence, RequestTag};
