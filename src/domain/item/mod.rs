//! Dashboard item domain module

mod item_id;
mod kind;

pub use item_id::ItemId;
pub use kind::{ItemKind, TransferOperation};
