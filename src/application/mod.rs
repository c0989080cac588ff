//! Application layer - Use cases and port interfaces
//!
//! Contains the core business operations and trait definitions
//! for external system interactions.

pub mod coordinator;
pub mod notifications;
pub mod ports;

// Re-export use cases
pub use coordinator::{
    ClipboardCoordinator, CoordinatorError, ARCHIVE_CONFIRMATION, PERMANENT_DELETE_CONFIRMATION,
};
pub use notifications::NotificationsUseCase;
