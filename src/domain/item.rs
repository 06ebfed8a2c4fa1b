//! Catalog item domain model and operations.
//!
//! This module defines the core `Item` type representing one catalog entry,
//! the closed [`ItemType`] enumeration used for filtering, and the [`IdMint`]
//! that issues opaque unique item identifiers at creation time.

use serde::{Deserialize, Serialize};

/// Closed set of item categories.
///
/// The wire names (and display labels) match the catalog's established
/// vocabulary, including the two-word "Sports Gear".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemType {
    /// The form's initial selection.
    #[default]
    Shirt,
    Pant,
    Shoes,
    #[serde(rename = "Sports Gear")]
    SportsGear,
    Accessories,
    Other,
}

impl ItemType {
    /// All categories, in menu order.
    pub const ALL: [Self; 6] = [
        Self::Shirt,
        Self::Pant,
        Self::Shoes,
        Self::SportsGear,
        Self::Accessories,
        Self::Other,
    ];

    /// Human-readable label for the category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Shirt => "Shirt",
            Self::Pant => "Pant",
            Self::Shoes => "Shoes",
            Self::SportsGear => "Sports Gear",
            Self::Accessories => "Accessories",
            Self::Other => "Other",
        }
    }

    /// Returns the category following this one in menu order, wrapping at
    /// the end. Used by the form's type selector.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Returns the category preceding this one in menu order, wrapping at
    /// the start.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Opaque unique identifier for a catalog item.
///
/// Assigned once by [`IdMint::mint`] when the item is created and never
/// reassigned. Treated as a token: the only supported operations are
/// equality comparison and display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps an existing identifier string (seed data, tests).
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues fresh, session-unique item identifiers.
///
/// Ids combine a millisecond timestamp with a per-session counter. The
/// counter alone guarantees uniqueness within the session; the timestamp
/// keeps ids roughly ordered by creation time.
#[derive(Debug, Default)]
pub struct IdMint {
    counter: u64,
}

impl IdMint {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints the next identifier.
    pub fn mint(&mut self) -> ItemId {
        let millis = chrono::Utc::now().timestamp_millis();
        let id = ItemId(format!("{millis}-{}", self.counter));
        self.counter += 1;
        id
    }
}

/// Represents one catalog entry.
///
/// Items are created only through the add-item form's validated submission
/// path, which guarantees a non-empty `name`, non-empty `description`, and a
/// cover image reference. The catalog itself never re-checks these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned at creation.
    pub id: ItemId,

    /// Display name. Non-empty.
    pub name: String,

    /// Category used for type filtering.
    #[serde(rename = "type")]
    pub item_type: ItemType,

    /// Free-text description. Non-empty.
    pub description: String,

    /// URI of the primary image. Exactly one, required.
    #[serde(rename = "coverImage")]
    pub cover_image: String,

    /// URIs of additional images, in display order. May be empty.
    #[serde(rename = "additionalImages", default)]
    pub additional_images: Vec<String>,

    /// Unix timestamp set once at creation. Display and default ordering
    /// only.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl Item {
    /// Creates a new item stamped with the current time.
    #[must_use]
    pub fn new(
        id: ItemId,
        name: String,
        item_type: ItemType,
        description: String,
        cover_image: String,
        additional_images: Vec<String>,
    ) -> Self {
        Self {
            id,
            name,
            item_type,
            description,
            cover_image,
            additional_images,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    /// All image URIs in carousel order: cover first, then the additional
    /// images.
    #[must_use]
    pub fn images(&self) -> Vec<&str> {
        std::iter::once(self.cover_image.as_str())
            .chain(self.additional_images.iter().map(String::as_str))
            .collect()
    }

    /// Human-readable creation date, e.g. "Jan 15, 2024".
    #[must_use]
    pub fn added_label(&self) -> String {
        chrono::DateTime::from_timestamp(self.created_at, 0)
            .map_or_else(|| "unknown".to_string(), |dt| dt.format("%b %-d, %Y").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Item {
        Item::new(
            ItemId::new("test-1"),
            name.to_string(),
            ItemType::Shirt,
            "a description".to_string(),
            "https://example.com/cover.jpg".to_string(),
            vec!["https://example.com/extra.jpg".to_string()],
        )
    }

    #[test]
    fn sports_gear_uses_two_word_wire_name() {
        let json = serde_json::to_string(&ItemType::SportsGear).unwrap();
        assert_eq!(json, "\"Sports Gear\"");

        let back: ItemType = serde_json::from_str("\"Sports Gear\"").unwrap();
        assert_eq!(back, ItemType::SportsGear);
    }

    #[test]
    fn type_cycling_wraps_both_directions() {
        assert_eq!(ItemType::Other.next(), ItemType::Shirt);
        assert_eq!(ItemType::Shirt.previous(), ItemType::Other);
        assert_eq!(ItemType::Shirt.next(), ItemType::Pant);
    }

    #[test]
    fn mint_issues_unique_ids() {
        let mut mint = IdMint::new();
        let a = mint.mint();
        let b = mint.mint();
        assert_ne!(a, b);
    }

    #[test]
    fn images_puts_cover_first() {
        let item = item("Premium Cotton T-Shirt");
        let images = item.images();
        assert_eq!(images.len(), 2);
        assert_eq!(images[0], "https://example.com/cover.jpg");
    }

    #[test]
    fn added_label_formats_date() {
        let mut it = item("Slim Fit Jeans");
        it.created_at = 1_705_276_800; // 2024-01-15T00:00:00Z
        assert_eq!(it.added_label(), "Jan 15, 2024");
    }
}
