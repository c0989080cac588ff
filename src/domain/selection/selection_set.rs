//! Checked items in the current list view

use crate::domain::item::{ItemId, ItemKind};

/// Documents and folders checked in the list view.
///
/// Rebuilt from the view right before a bulk action. Duplicates collapse and
/// insertion order is kept, since the ids go on the wire in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    documents: Vec<ItemId>,
    folders: Vec<ItemId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// A selection holding exactly one item
    pub fn singleton(kind: ItemKind, id: ItemId) -> Self {
        let mut set = Self::new();
        set.insert(kind, id);
        set
    }

    /// Add an item. Returns false if it was already present.
    pub fn insert(&mut self, kind: ItemKind, id: ItemId) -> bool {
        let ids = match kind {
            ItemKind::Document => &mut self.documents,
            ItemKind::Folder => &mut self.folders,
        };
        if ids.contains(&id) {
            return false;
        }
        ids.push(id);
        true
    }

    pub fn contains(&self, kind: ItemKind, id: &ItemId) -> bool {
        match kind {
            ItemKind::Document => self.documents.contains(id),
            ItemKind::Folder => self.folders.contains(id),
        }
    }

    pub fn documents(&self) -> &[ItemId] {
        &self.documents
    }

    pub fn folders(&self) -> &[ItemId] {
        &self.folders
    }

    pub fn len(&self) -> usize {
        self.documents.len() + self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.folders.is_empty()
    }

    /// The only item, if the set holds exactly one
    pub fn single(&self) -> Option<(ItemKind, &ItemId)> {
        match (self.documents.as_slice(), self.folders.as_slice()) {
            ([id], []) => Some((ItemKind::Document, id)),
            ([], [id]) => Some((ItemKind::Folder, id)),
            _ => None,
        }
    }
}

impl FromIterator<(ItemKind, ItemId)> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = (ItemKind, ItemId)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (kind, id) in iter {
            set.insert(kind, id);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s).unwrap()
    }

    #[test]
    fn new_is_empty() {
        let set = SelectionSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn insert_splits_by_kind() {
        let set: SelectionSet = vec![
            (ItemKind::Document, id("1")),
            (ItemKind::Folder, id("5")),
            (ItemKind::Document, id("2")),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.documents(), &[id("1"), id("2")]);
        assert_eq!(set.folders(), &[id("5")]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn duplicates_collapse() {
        let mut set = SelectionSet::new();
        assert!(set.insert(ItemKind::Document, id("1")));
        assert!(!set.insert(ItemKind::Document, id("1")));
        assert!(set.insert(ItemKind::Folder, id("1")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn single_only_for_one_item() {
        let one = SelectionSet::singleton(ItemKind::Folder, id("9"));
        assert_eq!(one.single(), Some((ItemKind::Folder, &id("9"))));

        let mut two = one.clone();
        two.insert(ItemKind::Document, id("1"));
        assert!(two.single().is_none());
        assert!(SelectionSet::new().single().is_none());
    }
}
