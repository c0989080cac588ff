//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the dashboard server and local storage.

pub mod backend;
pub mod config;
pub mod session;

// Re-export adapters
pub use backend::{csrf_token_from_html, RestBackend};
pub use config::XdgConfigStore;
pub use session::{FileSessionStore, MemorySessionStore};
