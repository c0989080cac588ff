//! CLI presenter for output formatting

use colored::*;

use crate::domain::clipboard::ClipboardEntry;

/// Presenter for CLI output formatting
#[derive(Debug, Clone, Copy, Default)]
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print the new favorite state of an item
    pub fn favorite(&self, label: &str, favorited: Option<bool>) {
        eprintln!("{}", Self::favorite_line(label, favorited));
    }

    fn favorite_line(label: &str, favorited: Option<bool>) -> String {
        match favorited {
            Some(true) => format!("{} {} added to favorites", "★".yellow(), label),
            Some(false) => format!("{} {} removed from favorites", "☆".normal(), label),
            None => format!("{} {} favorite toggled", "☆".normal(), label),
        }
    }

    /// Format a staged clipboard entry for display
    pub fn format_entry(&self, entry: &ClipboardEntry) -> String {
        format!("{} {} {}", entry.operation, entry.kind, entry.id)
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::{ItemId, ItemKind, TransferOperation};

    #[test]
    fn format_entry_reads_naturally() {
        let entry = ClipboardEntry::new(
            ItemKind::Folder,
            TransferOperation::Move,
            ItemId::from(7),
        );
        assert_eq!(Presenter::new().format_entry(&entry), "move folder 7");
    }

    #[test]
    fn unknown_favorite_state_is_not_guessed() {
        colored::control::set_override(false);
        assert_eq!(
            Presenter::favorite_line("Document 3", None),
            "☆ Document 3 favorite toggled"
        );
        assert_eq!(
            Presenter::favorite_line("Folder 4", Some(false)),
            "☆ Folder 4 removed from favorites"
        );
    }
}
