//! Screen routing and input mode state types.
//!
//! These enums form the small state machines that decide which keybindings
//! are active and which screen the renderer draws. The detail view is not a
//! screen of its own: it is an overlay on the browse screen whose visibility
//! is the catalog's selection state.

/// Top-level screen routing.
///
/// Mirrors the two pages of the catalog UI: browsing the collection and
/// composing a new item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Item list with search and type filtering. Default screen.
    Browse,

    /// Add-item form.
    AddItem,
}

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// User is typing in the search input field.
    Typing,

    /// User is navigating the filtered results.
    Navigating,
}

/// Input handling mode on the browse screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Default navigation and command mode.
    Normal,

    /// Active search with a [`SearchFocus`] indicating whether keys type
    /// into the query or move the cursor.
    Search(SearchFocus),
}

/// Focus ring of the add-item form.
///
/// Order matches the form's visual top-to-bottom layout; Tab walks forward
/// through it and wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Type,
    Description,
    CoverImage,
    AdditionalImages,
}

impl FormField {
    const RING: [Self; 5] = [
        Self::Name,
        Self::Type,
        Self::Description,
        Self::CoverImage,
        Self::AdditionalImages,
    ];

    /// The next field in the focus ring, wrapping at the end.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::RING.iter().position(|f| *f == self).unwrap_or(0);
        Self::RING[(idx + 1) % Self::RING.len()]
    }

    /// The previous field in the focus ring, wrapping at the start.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::RING.iter().position(|f| *f == self).unwrap_or(0);
        Self::RING[(idx + Self::RING.len() - 1) % Self::RING.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_focus_ring_wraps_both_directions() {
        assert_eq!(FormField::AdditionalImages.next(), FormField::Name);
        assert_eq!(FormField::Name.previous(), FormField::AdditionalImages);

        let mut field = FormField::Name;
        for _ in 0..FormField::RING.len() {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
    }
}
