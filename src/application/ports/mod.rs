//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod backend;
pub mod config;
pub mod session;
pub mod view;

// Re-export common types
pub use backend::{
    BackendError, DocumentBackend, FavoriteOutcome, NotificationBackend, GENERIC_SERVER_ERROR,
};
pub use config::ConfigStore;
pub use session::{SessionError, SessionStore};
pub use view::{Notice, View};
