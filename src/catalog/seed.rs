//! Built-in seed catalog.
//!
//! The plugin ships with a small fixed catalog so the browse screen has
//! content on first launch. The data is embedded as JSON and loaded through
//! the store's bulk-replace path at initialization; a config flag starts the
//! session empty instead.

use crate::domain::{Item, Result, ZitemizerError};

const SEED_JSON: &str = include_str!("seed.json");

/// Decodes the embedded seed catalog.
///
/// Items are ordered newest-first, matching the store's ordering for added
/// items.
///
/// # Errors
///
/// Returns [`ZitemizerError::Catalog`] if the embedded JSON fails to decode,
/// which would indicate a build-time defect.
pub fn seed_items() -> Result<Vec<Item>> {
    serde_json::from_str(SEED_JSON)
        .map_err(|e| ZitemizerError::Catalog(format!("failed to decode seed catalog: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemType;

    #[test]
    fn seed_catalog_decodes_with_four_items() {
        let items = seed_items().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "Premium Cotton T-Shirt");
        assert_eq!(items[3].item_type, ItemType::SportsGear);
    }

    #[test]
    fn seed_catalog_is_newest_first() {
        let items = seed_items().unwrap();
        let stamps: Vec<i64> = items.iter().map(|i| i.created_at).collect();
        let mut sorted = stamps.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(stamps, sorted);
    }

    #[test]
    fn seed_items_satisfy_the_creation_invariant() {
        for item in seed_items().unwrap() {
            assert!(!item.name.trim().is_empty());
            assert!(!item.description.trim().is_empty());
            assert!(!item.cover_image.is_empty());
        }
    }
}
