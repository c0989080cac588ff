//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, the terminal view
//! and the command runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod terminal_view;

// Re-export commonly used types
pub use app::{run_command, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR};
pub use args::{Cli, Commands, ConfigAction};
pub use presenter::Presenter;
pub use terminal_view::TerminalView;
