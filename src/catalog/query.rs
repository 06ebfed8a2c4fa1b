//! Pure query engine deriving the visible subset of the catalog.
//!
//! An [`ItemQuery`] combines a free-text search term with a type filter and
//! produces a filtered view of an item sequence. The computation is pure and
//! synchronous: identical inputs always yield identical output, ordering is
//! preserved from the source (stable filter, no re-sort), and an empty result
//! is a valid, expected outcome, not an error.
//!
//! Matching is a case-insensitive substring scan over name and description,
//! O(n · m) over item count and text length. Catalogs are tens of items, so
//! no index structure is warranted.

use crate::domain::{Item, ItemId, ItemType};

/// Type-filter dimension of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    /// Sentinel: every category passes.
    #[default]
    All,

    /// Only items of exactly this category pass.
    Only(ItemType),
}

impl TypeFilter {
    /// Label for the filter selector ("All" or the category name).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(t) => t.label(),
        }
    }

    /// The next filter in selector order: All, then each category, wrapping
    /// back to All.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(ItemType::ALL[0]),
            Self::Only(t) if t == ItemType::ALL[ItemType::ALL.len() - 1] => Self::All,
            Self::Only(t) => Self::Only(t.next()),
        }
    }

    /// The previous filter in selector order, wrapping from All to the last
    /// category.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::All => Self::Only(ItemType::ALL[ItemType::ALL.len() - 1]),
            Self::Only(t) if t == ItemType::ALL[0] => Self::All,
            Self::Only(t) => Self::Only(t.previous()),
        }
    }
}

/// Search term plus type filter.
///
/// Held by the application state and re-applied against the catalog on every
/// input change; never cached between keystrokes.
#[derive(Debug, Clone, Default)]
pub struct ItemQuery {
    /// Free-text term, matched case-insensitively against name and
    /// description. Empty matches everything.
    pub search: String,

    /// Category restriction.
    pub type_filter: TypeFilter,
}

impl ItemQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither dimension restricts the catalog.
    ///
    /// Used by the presentation layer to distinguish "no items added yet"
    /// from "no items match".
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.type_filter == TypeFilter::All
    }

    /// Whether a single item passes both predicates.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        let matches_search = self.search.is_empty() || {
            let term = self.search.to_lowercase();
            item.name.to_lowercase().contains(&term)
                || item.description.to_lowercase().contains(&term)
        };

        let matches_type = match self.type_filter {
            TypeFilter::All => true,
            TypeFilter::Only(t) => item.item_type == t,
        };

        matches_search && matches_type
    }

    /// Filters an item sequence, preserving source order.
    #[must_use]
    pub fn filter<'a>(&self, items: &'a [Item]) -> Vec<&'a Item> {
        let _span = tracing::debug_span!(
            "apply_item_query",
            total = items.len(),
            search_len = self.search.len(),
            type_filter = %self.type_filter.label(),
        )
        .entered();

        let visible: Vec<&Item> = items.iter().filter(|item| self.matches(item)).collect();
        tracing::debug!(visible = visible.len(), "query applied");
        visible
    }

    /// Like [`filter`](Self::filter), but collects ids. The application
    /// state caches this and resolves ids back to records at render time.
    #[must_use]
    pub fn filter_ids(&self, items: &[Item]) -> Vec<ItemId> {
        self.filter(items).into_iter().map(|item| item.id.clone()).collect()
    }
}

/// Char-index ranges of case-insensitive occurrences of `needle` in `text`.
///
/// Ranges are `(start, end)` with exclusive end, non-overlapping, in left to
/// right order. An empty needle yields no ranges. Used to highlight matched
/// spans of item names in the list view.
///
/// Case folding is per-char (first scalar of `char::to_lowercase`), so
/// indices always map one-to-one back into `text`.
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    if needle.is_empty() {
        return vec![];
    }

    let fold = |c: char| c.to_lowercase().next().unwrap_or(c);
    let hay: Vec<char> = text.chars().map(fold).collect();
    let needle: Vec<char> = needle.chars().map(fold).collect();

    if needle.len() > hay.len() {
        return vec![];
    }

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()] == needle[..] {
            ranges.push((i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::domain::ItemId;

    fn item(id: &str, name: &str, item_type: ItemType, description: &str) -> Item {
        Item::new(
            ItemId::new(id),
            name.to_string(),
            item_type,
            description.to_string(),
            "https://example.com/cover.jpg".to_string(),
            vec![],
        )
    }

    fn sample() -> Vec<Item> {
        vec![
            item("1", "Premium Cotton T-Shirt", ItemType::Shirt, "Soft casual wear"),
            item("2", "Slim Fit Jeans", ItemType::Pant, "Classic denim"),
            item("3", "Running Sneakers", ItemType::Shoes, "Lightweight cushioning"),
            item("4", "Tennis Racket Pro", ItemType::SportsGear, "Carbon fiber frame"),
        ]
    }

    #[test]
    fn search_matches_name_or_description_case_insensitively() {
        let items = sample();
        let query = ItemQuery {
            search: "DENIM".to_string(),
            type_filter: TypeFilter::All,
        };

        let result = query.filter(&items);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Slim Fit Jeans");

        // Every excluded item really lacks the term.
        for excluded in items.iter().filter(|i| i.name != "Slim Fit Jeans") {
            assert!(!excluded.name.to_lowercase().contains("denim"));
            assert!(!excluded.description.to_lowercase().contains("denim"));
        }
    }

    #[test]
    fn type_filter_restricts_to_exact_category() {
        let items = sample();
        let query = ItemQuery {
            search: String::new(),
            type_filter: TypeFilter::Only(ItemType::Shoes),
        };

        let result = query.filter(&items);
        assert!(result.iter().all(|i| i.item_type == ItemType::Shoes));
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn both_predicates_must_hold() {
        let items = sample();
        let query = ItemQuery {
            search: "jeans".to_string(),
            type_filter: TypeFilter::Only(ItemType::Shoes),
        };
        assert!(query.filter(&items).is_empty());
    }

    #[test]
    fn filtering_is_stable_and_idempotent() {
        let items = sample();
        let query = ItemQuery {
            search: "i".to_string(),
            type_filter: TypeFilter::All,
        };

        let once: Vec<Item> = query.filter(&items).into_iter().cloned().collect();
        let twice: Vec<Item> = query.filter(&once).into_iter().cloned().collect();
        assert_eq!(once, twice);

        // Source order preserved.
        let ids: Vec<&str> = once.iter().map(|i| i.id.as_str()).collect();
        let mut expected = ids.clone();
        expected.sort_by_key(|id| items.iter().position(|i| i.id.as_str() == *id));
        assert_eq!(ids, expected);
    }

    #[test]
    fn empty_catalog_yields_empty_result() {
        let query = ItemQuery::new();
        assert!(query.is_unfiltered());
        assert!(query.filter(&[]).is_empty());
    }

    #[test]
    fn seeded_catalog_search_jeans_finds_exactly_slim_fit_jeans() {
        let items = seed::seed_items().unwrap();
        let query = ItemQuery {
            search: "jeans".to_string(),
            type_filter: TypeFilter::All,
        };

        let result = query.filter(&items);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Slim Fit Jeans");
    }

    #[test]
    fn type_filter_cycles_through_all_and_back() {
        let mut filter = TypeFilter::All;
        for _ in 0..=ItemType::ALL.len() {
            filter = filter.next();
        }
        assert_eq!(filter, TypeFilter::All);
        assert_eq!(TypeFilter::All.previous(), TypeFilter::Only(ItemType::Other));
    }

    #[test]
    fn match_ranges_finds_case_insensitive_occurrences() {
        assert_eq!(match_ranges("Slim Fit Jeans", "jean"), vec![(9, 13)]);
        assert_eq!(match_ranges("banana", "an"), vec![(1, 3), (3, 5)]);
        assert_eq!(match_ranges("anything", ""), Vec::<(usize, usize)>::new());
        assert!(match_ranges("short", "much longer needle").is_empty());
    }
}
