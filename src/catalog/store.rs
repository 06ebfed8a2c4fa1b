//! In-memory catalog store with command-dispatch mutation.
//!
//! This module implements the item store as a reducer: a single aggregate
//! ([`Catalog`]) mutated exclusively through a closed set of [`Command`]
//! variants. Every command is synchronous and total: there are no failure
//! paths and no intermediate states.
//!
//! # Ordering
//!
//! The catalog is append-only and newest-first: `AddItem` prepends, and the
//! relative order of existing items never changes. There is no update or
//! delete command.
//!
//! # Selection
//!
//! The "currently selected" item (the one shown in the detail view) is stored
//! as an [`ItemId`], not a reference or index. The id is resolved to the full
//! record at read time, so a selection that no longer resolves (e.g. after a
//! `ReplaceAll`) simply reads as empty rather than dangling.

use crate::domain::{Item, ItemId};

/// Mutation commands accepted by the catalog.
///
/// The closed command set is the only way to change store state; readers get
/// shared references and never observe a partially applied command.
#[derive(Debug, Clone)]
pub enum Command {
    /// Prepends an item (newest-first). The caller guarantees a fresh id;
    /// no uniqueness check is performed. Always succeeds.
    AddItem(Item),

    /// Replaces the selection. `None` clears it, which closes the detail
    /// view. Membership in the catalog is not validated; the store trusts
    /// the caller.
    SetSelected(Option<ItemId>),

    /// Wholesale replacement of the catalog contents. Used by bulk-load
    /// paths such as seeding; the selection is left untouched and resolves
    /// against the new contents on the next read.
    ReplaceAll(Vec<Item>),
}

/// The in-memory item catalog and current selection.
///
/// Created once at plugin start (seeded or empty), lives for the session,
/// and is discarded on exit. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    selected: Option<ItemId>,
}

impl Catalog {
    /// Creates an empty catalog with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a single command to the store.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AddItem(item) => {
                tracing::debug!(item_id = %item.id, item_name = %item.name, "adding item");
                self.items.insert(0, item);
            }
            Command::SetSelected(id) => {
                tracing::debug!(selected = ?id, "updating selection");
                self.selected = id;
            }
            Command::ReplaceAll(items) => {
                tracing::debug!(count = items.len(), "replacing catalog contents");
                self.items = items;
            }
        }
    }

    /// Prepends an item. Convenience wrapper over [`Command::AddItem`].
    pub fn add_item(&mut self, item: Item) {
        self.apply(Command::AddItem(item));
    }

    /// Replaces the selection. Convenience wrapper over
    /// [`Command::SetSelected`].
    pub fn set_selected(&mut self, id: Option<ItemId>) {
        self.apply(Command::SetSelected(id));
    }

    /// Replaces the catalog contents. Convenience wrapper over
    /// [`Command::ReplaceAll`].
    pub fn replace_all(&mut self, items: Vec<Item>) {
        self.apply(Command::ReplaceAll(items));
    }

    /// All items, newest-first.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// The selected item's id, if a selection is set.
    #[must_use]
    pub fn selected_id(&self) -> Option<&ItemId> {
        self.selected.as_ref()
    }

    /// Resolves the selection to the full record.
    ///
    /// Returns `None` when no selection is set or when the selected id no
    /// longer resolves against the current contents.
    #[must_use]
    pub fn selected(&self) -> Option<&Item> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemType;

    fn item(id: &str, name: &str) -> Item {
        Item::new(
            ItemId::new(id),
            name.to_string(),
            ItemType::Shirt,
            "description".to_string(),
            "https://example.com/cover.jpg".to_string(),
            vec![],
        )
    }

    #[test]
    fn add_item_prepends_and_preserves_existing_order() {
        let mut catalog = Catalog::new();
        catalog.add_item(item("1", "first"));
        catalog.add_item(item("2", "second"));
        catalog.add_item(item("3", "third"));

        assert_eq!(catalog.len(), 3);
        let names: Vec<&str> = catalog.items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[test]
    fn add_item_increases_count_by_exactly_one() {
        let mut catalog = Catalog::new();
        catalog.add_item(item("1", "first"));
        let before = catalog.len();
        catalog.add_item(item("2", "second"));
        assert_eq!(catalog.len(), before + 1);
        assert_eq!(catalog.items()[0].id, ItemId::new("2"));
    }

    #[test]
    fn clearing_selection_always_reads_empty() {
        let mut catalog = Catalog::new();
        catalog.add_item(item("1", "first"));

        catalog.set_selected(Some(ItemId::new("1")));
        assert!(catalog.selected().is_some());

        catalog.set_selected(None);
        assert!(catalog.selected().is_none());

        // Clearing an already-empty selection is a no-op, not an error.
        catalog.set_selected(None);
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn stale_selection_resolves_to_none_after_replace_all() {
        let mut catalog = Catalog::new();
        catalog.add_item(item("1", "first"));
        catalog.set_selected(Some(ItemId::new("1")));

        catalog.replace_all(vec![item("2", "second")]);
        assert_eq!(catalog.selected_id(), Some(&ItemId::new("1")));
        assert!(catalog.selected().is_none());
    }

    #[test]
    fn selection_trusts_the_caller() {
        let mut catalog = Catalog::new();
        catalog.set_selected(Some(ItemId::new("ghost")));
        // The id is stored as given; it just never resolves.
        assert_eq!(catalog.selected_id(), Some(&ItemId::new("ghost")));
        assert!(catalog.selected().is_none());
    }
}
