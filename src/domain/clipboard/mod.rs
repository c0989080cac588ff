//! Clipboard domain module

mod clipboard_entry;

pub use clipboard_entry::ClipboardEntry;
