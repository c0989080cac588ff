//! Selection and delete intent domain module

mod delete_intent;
mod selection_set;

pub use delete_intent::{DeleteIntent, DeleteMode, Disposition};
pub use selection_set::SelectionSet;
