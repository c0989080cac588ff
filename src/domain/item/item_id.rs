//! Server-assigned item identifier

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::error::ItemIdParseError;

/// Opaque identifier of a document, folder or notification.
///
/// The server hands out integers, but the client never does arithmetic on
/// them, so the id is kept as text. Ids end up as URL path segments, so only
/// ASCII letters, digits, `-` and `_` are accepted. Deserialization accepts
/// either a JSON string or a JSON integer; serialization always produces a
/// string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an id, rejecting blank input and anything that is not a
    /// single safe path segment
    pub fn new(value: impl Into<String>) -> Result<Self, ItemIdParseError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() || !trimmed.chars().all(is_id_char) {
            return Err(ItemIdParseError { input: value });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the id as text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// JSON form used where the server expects a number (e.g. `parent_id`).
    /// Falls back to a string when the id is not numeric.
    pub fn to_wire_value(&self) -> serde_json::Value {
        match self.0.parse::<u64>() {
            Ok(n) => serde_json::Value::from(n),
            Err(_) => serde_json::Value::from(self.0.clone()),
        }
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl FromStr for ItemId {
    type Err = ItemIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for ItemId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self::new(s).map_err(serde::de::Error::custom),
            Raw::Number(n) => Ok(Self::from(n)),
        }
    }
}
