//! Item kind and transfer operation value objects

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::InvalidKindError;

/// What a dashboard item is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Document,
    Folder,
}

impl ItemKind {
    /// Get the wire/string identifier
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Document => "document",
            Self::Folder => "folder",
        }
    }

    /// Capitalized label for user-facing messages
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Document => "Document",
            Self::Folder => "Folder",
        }
    }
}

impl FromStr for ItemKind {
    type Err = InvalidKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "document" | "doc" => Ok(Self::Document),
            "folder" => Ok(Self::Folder),
            _ => Err(InvalidKindError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Clipboard operation recorded at staging time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferOperation {
    Copy,
    Move,
}

impl TransferOperation {
    /// Get the wire/string identifier, also used as the URL segment
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "copy",
            Self::Move => "move",
        }
    }
}

impl fmt::Display for TransferOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
