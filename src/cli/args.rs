//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand};

use crate::domain::item::{ItemId, ItemKind};

/// DocDash - document dashboard from the terminal
#[derive(Parser, Debug)]
#[command(name = "docdash")]
#[command(version)]
#[command(about = "Copy, move, delete and favorite documents on the dashboard server")]
#[command(long_about = None)]
pub struct Cli {
    /// Dashboard base URL
    #[arg(long, global = true, value_name = "URL", env = "DOCDASH_BASE_URL")]
    pub base_url: Option<String>,

    /// Anti-forgery token sent with every request
    #[arg(long, global = true, value_name = "TOKEN", env = "DOCDASH_CSRF_TOKEN")]
    pub csrf_token: Option<String>,

    /// Cookie header identifying the logged-in session
    #[arg(long, global = true, value_name = "COOKIE", env = "DOCDASH_SESSION_COOKIE")]
    pub session_cookie: Option<String>,

    /// File holding the clipboard between invocations
    #[arg(long, global = true, value_name = "PATH")]
    pub session_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stage an item to be copied on the next paste
    Copy(TargetArgs),
    /// Stage an item to be moved on the next paste
    Move(TargetArgs),
    /// Paste the staged item into a folder (root if omitted)
    Paste {
        /// Destination folder id
        #[arg(long, value_name = "FOLDER_ID")]
        into: Option<ItemId>,
    },
    /// Inspect or clear the clipboard
    Clipboard {
        #[command(subcommand)]
        action: ClipboardAction,
    },
    /// Rename a document or folder
    Rename {
        #[command(flatten)]
        target: TargetArgs,
        /// New name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// Toggle the favorite flag of an item
    Favorite(TargetArgs),
    /// Archive a document
    Archive {
        /// Document id
        id: ItemId,
        /// Skip the confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Bring an archived document back
    Unarchive {
        /// Document id
        id: ItemId,
    },
    /// Restore an item from the recycle bin
    Restore(TargetArgs),
    /// Permanently delete everything in the recycle bin
    EmptyBin {
        /// Skip the confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Delete one item
    Delete {
        #[command(flatten)]
        target: TargetArgs,
        /// Delete permanently instead of moving to the recycle bin
        #[arg(long)]
        permanent: bool,
        /// Skip the confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Delete several items in one request
    BulkDelete {
        /// Document id (repeatable)
        #[arg(long = "document", value_name = "ID")]
        documents: Vec<ItemId>,
        /// Folder id (repeatable)
        #[arg(long = "folder", value_name = "ID")]
        folders: Vec<ItemId>,
        /// Delete permanently instead of moving to the recycle bin
        #[arg(long)]
        permanent: bool,
        /// Skip the confirmation
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Create a folder
    Mkdir {
        /// Folder name
        name: String,
        /// Parent folder id (root if omitted)
        #[arg(long, value_name = "FOLDER_ID")]
        parent: Option<ItemId>,
    },
    /// Notification housekeeping
    Notifications {
        #[command(subcommand)]
        action: NotificationsAction,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// An item addressed by kind and id
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Item kind: document (or doc) | folder
    #[arg(value_name = "KIND")]
    pub kind: ItemKind,
    /// Item id
    pub id: ItemId,
}

/// Clipboard actions
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ClipboardAction {
    /// Show the staged item
    Show,
    /// Drop the staged item
    Clear,
}

/// Notification actions
#[derive(Subcommand, Debug, Clone)]
pub enum NotificationsAction {
    /// Mark all notifications as read
    Read,
    /// Delete one notification
    Delete {
        /// Notification id
        id: ItemId,
    },
    /// Delete all notifications
    Clear,
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &[
    "base_url",
    "csrf_token",
    "session_cookie",
    "session_file",
    "timeout_secs",
];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}
