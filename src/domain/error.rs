//! Domain error types

use thiserror::Error;

/// Error when an item identifier is blank or not a single path segment
#[derive(Debug, Clone, Error)]
#[error("Invalid item id: \"{input}\". Ids must be non-empty and use only letters, digits, '-' or '_'")]
pub struct ItemIdParseError {
    pub input: String,
}

/// Error when an unknown item kind is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid item kind: \"{input}\". Valid kinds are: document, folder")]
pub struct InvalidKindError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
