//! Delete intent value object

use std::fmt;

use crate::domain::item::{ItemId, ItemKind};

use super::SelectionSet;

/// Recycle bin vs permanent removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    SoftDelete,
    HardDelete,
}

impl Disposition {
    /// `action` value of the bulk-delete payload
    pub const fn wire_action(&self) -> &'static str {
        match self {
            Self::SoftDelete => "recycle",
            Self::HardDelete => "permanent",
        }
    }

    /// URL segment of the per-item endpoint
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::SoftDelete => "bin",
            Self::HardDelete => "delete",
        }
    }

    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::HardDelete)
    }
}

impl fmt::Display for Disposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_action())
    }
}

/// Single item or the whole selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    Single(ItemKind),
    Bulk,
}

/// A delete the user has initiated but not yet sent.
///
/// Lives only for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteIntent {
    mode: DeleteMode,
    items: SelectionSet,
    disposition: Disposition,
}

impl DeleteIntent {
    /// Delete one item through its per-item endpoint
    pub fn single(kind: ItemKind, id: ItemId, disposition: Disposition) -> Self {
        Self {
            mode: DeleteMode::Single(kind),
            items: SelectionSet::singleton(kind, id),
            disposition,
        }
    }

    /// Delete a whole selection through the batch endpoint
    pub fn bulk(items: SelectionSet, disposition: Disposition) -> Self {
        Self {
            mode: DeleteMode::Bulk,
            items,
            disposition,
        }
    }

    pub fn mode(&self) -> DeleteMode {
        self.mode
    }

    pub fn items(&self) -> &SelectionSet {
        &self.items
    }

    pub fn disposition(&self) -> Disposition {
        self.disposition
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disposition_wire_forms() {
        assert_eq!(Disposition::SoftDelete.wire_action(), "recycle");
        assert_eq!(Disposition::HardDelete.wire_action(), "permanent");
        assert_eq!(Disposition::SoftDelete.path_segment(), "bin");
        assert_eq!(Disposition::HardDelete.path_segment(), "delete");
        assert!(Disposition::HardDelete.is_permanent());
    }

    #[test]
    fn single_intent_holds_singleton() {
        let intent = DeleteIntent::single(
            ItemKind::Folder,
            ItemId::new("4").unwrap(),
            Disposition::SoftDelete,
        );
        assert_eq!(intent.mode(), DeleteMode::Single(ItemKind::Folder));
        assert_eq!(intent.items().len(), 1);
        assert!(!intent.is_empty());
    }

    #[test]
    fn bulk_intent_is_bulk_mode() {
        let intent = DeleteIntent::bulk(SelectionSet::new(), Disposition::HardDelete);
        assert_eq!(intent.mode(), DeleteMode::Bulk);
        assert!(intent.is_empty());
    }
}
