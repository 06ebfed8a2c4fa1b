//! Transient state for composing one new catalog item.
//!
//! A [`FormSession`] accumulates candidate field values and a parallel map of
//! per-field validation errors. Nothing reaches the catalog until the event
//! handler validates the session and builds an [`Item`] from it; until then
//! the state is page-scoped and can be abandoned without a trace (staged
//! image handles are handed back for release).
//!
//! # Error semantics
//!
//! Validation failure is not an error value; it is a recoverable state
//! carried in the error map and surfaced inline next to each field.
//! The clearing rules are asymmetric on purpose, matching the established
//! flow: editing a field removes its stale error immediately, but the field
//! is only re-validated at the next submission attempt.

use std::collections::BTreeMap;

use crate::domain::{Item, ItemId, ItemType};
use crate::media::MediaUri;

/// Validated form fields, used as error-map keys.
///
/// Only fields with a validation rule appear here; the type selector cannot
/// fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
    CoverImage,
}

impl Field {
    /// Form label for the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "Item Name",
            Self::Description => "Item Description",
            Self::CoverImage => "Cover Image",
        }
    }
}

/// In-progress add-item form state.
#[derive(Debug, Default)]
pub struct FormSession {
    name: String,
    item_type: ItemType,
    description: String,
    cover_image: Option<MediaUri>,
    additional_images: Vec<MediaUri>,
    errors: BTreeMap<Field, String>,
}

impl FormSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    #[must_use]
    pub fn cover_image(&self) -> Option<&MediaUri> {
        self.cover_image.as_ref()
    }

    #[must_use]
    pub fn additional_images(&self) -> &[MediaUri] {
        &self.additional_images
    }

    /// The current error map, keyed by field.
    #[must_use]
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    /// The error message currently attached to a field, if any.
    #[must_use]
    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Appends a character to the name. Clears any stale name error.
    pub fn push_name_char(&mut self, c: char) {
        self.name.push(c);
        self.errors.remove(&Field::Name);
    }

    /// Removes the last character of the name. Clears any stale name error.
    pub fn backspace_name(&mut self) {
        self.name.pop();
        self.errors.remove(&Field::Name);
    }

    /// Appends a character to the description. Clears any stale description
    /// error.
    pub fn push_description_char(&mut self, c: char) {
        self.description.push(c);
        self.errors.remove(&Field::Description);
    }

    /// Removes the last character of the description. Clears any stale
    /// description error.
    pub fn backspace_description(&mut self) {
        self.description.pop();
        self.errors.remove(&Field::Description);
    }

    /// Advances the type selector. The selector has no validation rule, so
    /// no error entry is touched.
    pub fn cycle_type_forward(&mut self) {
        self.item_type = self.item_type.next();
    }

    /// Steps the type selector backwards.
    pub fn cycle_type_backward(&mut self) {
        self.item_type = self.item_type.previous();
    }

    /// Stages a cover image, replacing any existing one.
    ///
    /// Returns the replaced handle so the caller can release it. Staging
    /// clears a stale cover-image error, the same way text edits do.
    pub fn stage_cover(&mut self, uri: MediaUri) -> Option<MediaUri> {
        self.errors.remove(&Field::CoverImage);
        self.cover_image.replace(uri)
    }

    /// Removes the staged cover image, returning it for release.
    pub fn clear_cover(&mut self) -> Option<MediaUri> {
        self.cover_image.take()
    }

    /// Appends an additional image to the staged list.
    pub fn push_additional(&mut self, uri: MediaUri) {
        self.additional_images.push(uri);
    }

    /// Removes the most recently staged additional image, returning it for
    /// release.
    pub fn pop_additional(&mut self) -> Option<MediaUri> {
        self.additional_images.pop()
    }

    /// Recomputes the full error map from current field values.
    ///
    /// Rules: name non-empty after trimming, description non-empty after
    /// trimming, cover image staged. Returns `true` iff the recomputed map
    /// is empty. Idempotent; the stored map is the only side effect.
    pub fn validate(&mut self) -> bool {
        let mut errors = BTreeMap::new();

        if self.name.trim().is_empty() {
            errors.insert(Field::Name, "Item name is required".to_string());
        }
        if self.description.trim().is_empty() {
            errors.insert(Field::Description, "Item description is required".to_string());
        }
        if self.cover_image.is_none() {
            errors.insert(Field::CoverImage, "Cover image is required".to_string());
        }

        tracing::debug!(error_count = errors.len(), "form validated");
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Builds the new item and resets the form for the next composition.
    ///
    /// Callers must run [`validate`](Self::validate) first; if the cover
    /// image is missing this returns `None` and leaves the form untouched.
    /// On success the staged handles transfer into the item (they are NOT
    /// released; the item owns them for the rest of the session) and every
    /// field returns to its default.
    pub fn build_item(&mut self, id: ItemId) -> Option<Item> {
        let cover = self.cover_image.take()?;

        let item = Item::new(
            id,
            std::mem::take(&mut self.name),
            self.item_type,
            std::mem::take(&mut self.description),
            cover.into_string(),
            std::mem::take(&mut self.additional_images)
                .into_iter()
                .map(MediaUri::into_string)
                .collect(),
        );

        self.item_type = ItemType::default();
        self.errors.clear();

        tracing::debug!(item_id = %item.id, "item built from form");
        Some(item)
    }

    /// Abandons the composition, clearing every field.
    ///
    /// Returns all staged image handles so the caller can release them.
    pub fn reset(&mut self) -> Vec<MediaUri> {
        self.name.clear();
        self.description.clear();
        self.item_type = ItemType::default();
        self.errors.clear();

        let mut staged: Vec<MediaUri> = self.cover_image.take().into_iter().collect();
        staged.append(&mut self.additional_images);
        staged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::MediaStore;
    use std::path::PathBuf;

    #[test]
    fn empty_submission_reports_exactly_three_errors() {
        let mut form = FormSession::new();

        assert!(!form.validate());
        let fields: Vec<Field> = form.errors().keys().copied().collect();
        assert_eq!(fields, vec![Field::Name, Field::Description, Field::CoverImage]);
    }

    #[test]
    fn whitespace_only_text_fails_validation() {
        let mut form = FormSession::new();
        for c in "   ".chars() {
            form.push_name_char(c);
        }
        assert!(!form.validate());
        assert!(form.error(Field::Name).is_some());
    }

    #[test]
    fn editing_a_flagged_field_clears_its_error_eagerly() {
        let mut form = FormSession::new();
        assert!(!form.validate());
        assert!(form.error(Field::Name).is_some());

        form.push_name_char('x');

        // The name error disappears immediately, but the field is not
        // re-validated: the other two errors stay put.
        assert!(form.error(Field::Name).is_none());
        assert!(form.error(Field::Description).is_some());
        assert!(form.error(Field::CoverImage).is_some());
    }

    #[test]
    fn staging_a_cover_clears_the_cover_error() {
        let mut media = MediaStore::new();
        let mut form = FormSession::new();
        assert!(!form.validate());

        let replaced = form.stage_cover(media.acquire(PathBuf::from("/tmp/cover.jpg")));
        assert!(replaced.is_none());
        assert!(form.error(Field::CoverImage).is_none());
    }

    #[test]
    fn restaging_a_cover_returns_the_old_handle() {
        let mut media = MediaStore::new();
        let mut form = FormSession::new();

        let first = media.acquire(PathBuf::from("/tmp/a.jpg"));
        let first_copy = first.clone();
        form.stage_cover(first);

        let replaced = form.stage_cover(media.acquire(PathBuf::from("/tmp/b.jpg")));
        assert_eq!(replaced, Some(first_copy));
    }

    #[test]
    fn validate_is_idempotent() {
        let mut form = FormSession::new();
        assert!(!form.validate());
        let first = form.errors().clone();
        assert!(!form.validate());
        assert_eq!(&first, form.errors());
    }

    #[test]
    fn build_item_transfers_staged_images_and_resets() {
        let mut media = MediaStore::new();
        let mut form = FormSession::new();

        for c in "Wool Scarf".chars() {
            form.push_name_char(c);
        }
        for c in "Hand-knit merino scarf.".chars() {
            form.push_description_char(c);
        }
        form.cycle_type_forward(); // Shirt -> Pant
        form.stage_cover(media.acquire(PathBuf::from("/tmp/scarf.jpg")));
        form.push_additional(media.acquire(PathBuf::from("/tmp/scarf-2.jpg")));

        assert!(form.validate());
        let item = form.build_item(ItemId::new("test-id")).unwrap();

        assert_eq!(item.name, "Wool Scarf");
        assert_eq!(item.item_type, ItemType::Pant);
        assert_eq!(item.images().len(), 2);
        assert!(item.cover_image.starts_with("media://"));

        // Transferred handles stay live in the registry.
        assert_eq!(media.len(), 2);
        assert!(media.resolve(&item.cover_image).is_some());

        // The form is back to defaults, ready for the next composition.
        assert!(form.name().is_empty());
        assert!(form.description().is_empty());
        assert_eq!(form.item_type(), ItemType::Shirt);
        assert!(form.cover_image().is_none());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn build_item_without_cover_leaves_the_form_untouched() {
        let mut form = FormSession::new();
        form.push_name_char('a');
        assert!(form.build_item(ItemId::new("test-id")).is_none());
        assert_eq!(form.name(), "a");
    }

    #[test]
    fn reset_hands_back_every_staged_handle() {
        let mut media = MediaStore::new();
        let mut form = FormSession::new();

        form.stage_cover(media.acquire(PathBuf::from("/tmp/a.jpg")));
        form.push_additional(media.acquire(PathBuf::from("/tmp/b.jpg")));
        form.push_additional(media.acquire(PathBuf::from("/tmp/c.jpg")));

        let staged = form.reset();
        assert_eq!(staged.len(), 3);
        assert!(form.cover_image().is_none());
        assert!(form.additional_images().is_empty());

        for uri in &staged {
            assert!(media.release(uri));
        }
        assert!(media.is_empty());
    }
}
