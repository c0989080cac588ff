//! DocDash - document dashboard client
//!
//! This crate drives the clipboard and item-management features of a
//! document dashboard server: staging copies and moves, pasting them into
//! folders, renaming, favoriting, archiving and deleting items.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Item identifiers, clipboard entries, selections and errors
//! - **Application**: The clipboard coordinator and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (HTTP backend, session files, config)
//! - **CLI**: Command-line interface, argument parsing and the terminal view

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
