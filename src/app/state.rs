//! Application state container and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for all
//! transient UI state: the catalog store, the active query, the cached
//! visible-id list, cursor and routing state, the in-progress form, and the
//! media handle registry.
//!
//! # Architecture
//!
//! Core data (the catalog) is kept separate from derived state (the visible
//! id list, the cursor). The visible list is recomputed by [`AppState::
//! apply_query`] after every input that can change it, and ids are resolved
//! back to records only at view model computation time, so a stale id can
//! never dangle.

use super::modes::{FormField, InputMode, Screen, SearchFocus};
use crate::catalog::{match_ranges, Catalog, ItemQuery, TypeFilter};
use crate::domain::{IdMint, Item, ItemId};
use crate::form::{Field, FormSession};
use crate::infrastructure::paths;
use crate::media::MediaStore;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, BrowseView, DetailView, EmptyState, FooterInfo, FormView, HeaderInfo, ItemRow,
    SearchBarInfo, UiViewModel,
};

/// Width of the NAME column in the item table.
const NAME_COLUMN_WIDTH: usize = 32;

/// Width of the TYPE column in the item table.
const TYPE_COLUMN_WIDTH: usize = 14;

/// Central application state container.
///
/// Mutated by the event handler in response to user input; view models are
/// computed on demand from state snapshots.
#[derive(Debug)]
pub struct AppState {
    /// The item store: catalog contents plus detail-view selection.
    pub catalog: Catalog,

    /// Active search term and type filter.
    pub query: ItemQuery,

    /// Ids of items passing the current query, in catalog order.
    ///
    /// Recomputed by [`apply_query`](Self::apply_query); resolved to records
    /// at render time.
    pub visible: Vec<ItemId>,

    /// Zero-based cursor position within `visible`.
    ///
    /// Clamped by [`apply_query`](Self::apply_query); wraps during
    /// navigation.
    pub cursor: usize,

    /// Active screen.
    pub screen: Screen,

    /// Input handling mode on the browse screen.
    pub input_mode: InputMode,

    /// In-progress add-item composition.
    pub form: FormSession,

    /// Form field holding keyboard focus.
    pub form_focus: FormField,

    /// Shared input buffer for the two image-path fields.
    ///
    /// Confirmed paths leave this buffer and become staged media handles.
    pub path_input: String,

    /// Registry of session-scoped image handles.
    pub media: MediaStore,

    /// Issues fresh item ids on submission.
    pub id_mint: IdMint,

    /// Current page of the detail view's image pager. Reset when a detail
    /// view opens.
    pub image_page: usize,

    /// Whether the post-submission success banner is showing. While set,
    /// further submissions are ignored until the redirect timer fires.
    pub submit_notice: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Recipient address for enquiry mails.
    pub enquiry_address: String,
}

impl AppState {
    /// Creates application state over an initial catalog.
    #[must_use]
    pub fn new(items: Vec<Item>, theme: Theme, enquiry_address: String) -> Self {
        let mut catalog = Catalog::new();
        catalog.replace_all(items);

        let mut state = Self {
            catalog,
            query: ItemQuery::new(),
            visible: vec![],
            cursor: 0,
            screen: Screen::Browse,
            input_mode: InputMode::Normal,
            form: FormSession::new(),
            form_focus: FormField::Name,
            path_input: String::new(),
            media: MediaStore::new(),
            id_mint: IdMint::new(),
            image_page: 0,
            submit_notice: false,
            theme,
            enquiry_address,
        };
        state.apply_query();
        state
    }

    /// Re-derives the visible id list from the catalog and current query,
    /// then clamps the cursor to the new bounds.
    pub fn apply_query(&mut self) {
        self.visible = self.query.filter_ids(self.catalog.items());

        if self.visible.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.visible.len() - 1);
        }
    }

    /// Moves the cursor down one row, wrapping to the top. No-op when the
    /// visible list is empty.
    pub fn move_cursor_down(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.visible.len();
    }

    /// Moves the cursor up one row, wrapping to the bottom. No-op when the
    /// visible list is empty.
    pub fn move_cursor_up(&mut self) {
        if self.visible.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.visible.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// The item under the cursor, if any.
    #[must_use]
    pub fn cursor_item(&self) -> Option<&Item> {
        self.visible.get(self.cursor).and_then(|id| self.catalog.get(id))
    }

    /// Display label for an image reference.
    ///
    /// Session-scoped `media://` handles resolve to their source path (with
    /// the sandbox prefix stripped); anything else, seed URLs in practice,
    /// displays verbatim.
    #[must_use]
    pub fn image_label(&self, uri: &str) -> String {
        self.media.resolve(uri).map_or_else(
            || uri.to_string(),
            |path| paths::strip_host_prefix(&path.display().to_string()),
        )
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, _cols: usize) -> UiViewModel {
        let body = match self.screen {
            Screen::AddItem => BodyView::Form(self.compute_form_view()),
            Screen::Browse => match self.catalog.selected() {
                Some(item) => BodyView::Detail(self.compute_detail_view(item)),
                None => BodyView::Browse(self.compute_browse_view(rows)),
            },
        };

        UiViewModel {
            header: self.compute_header(&body),
            footer: self.compute_footer(&body),
            body,
        }
    }

    fn compute_browse_view(&self, rows: usize) -> BrowseView {
        let search_bar = if matches!(self.input_mode, InputMode::Search(_)) {
            Some(SearchBarInfo {
                query: self.query.search.clone(),
            })
        } else {
            None
        };

        if self.visible.is_empty() {
            return BrowseView {
                summary: self.compute_summary(),
                search_bar,
                rows: vec![],
                cursor: 0,
                empty_state: Some(self.compute_empty_state()),
            };
        }

        let available_rows = self.calculate_available_rows(rows).max(1);

        let mut window_start = self.cursor.saturating_sub(available_rows / 2);
        let window_end = (window_start + available_rows).min(self.visible.len());
        if window_end - window_start < available_rows && self.visible.len() >= available_rows {
            window_start = window_end.saturating_sub(available_rows);
        }

        let highlight = matches!(self.input_mode, InputMode::Search(_)) && !self.query.search.is_empty();

        let item_rows: Vec<ItemRow> = self.visible[window_start..window_end]
            .iter()
            .enumerate()
            .filter_map(|(relative_idx, id)| {
                let item = self.catalog.get(id)?;
                Some(self.compute_item_row(item, window_start + relative_idx, highlight))
            })
            .collect();

        BrowseView {
            summary: self.compute_summary(),
            search_bar,
            rows: item_rows,
            cursor: self.cursor.saturating_sub(window_start),
            empty_state: None,
        }
    }

    fn compute_item_row(&self, item: &Item, absolute_idx: usize, highlight: bool) -> ItemRow {
        let name = if item.name.chars().count() > NAME_COLUMN_WIDTH - 2 {
            let prefix: String = item.name.chars().take(NAME_COLUMN_WIDTH - 5).collect();
            format!("{prefix}...")
        } else {
            item.name.clone()
        };

        let highlight_ranges = if highlight {
            match_ranges(&name, &self.query.search)
        } else {
            vec![]
        };

        ItemRow {
            name,
            type_label: item.item_type.label().to_string(),
            added: item.added_label(),
            is_cursor: absolute_idx == self.cursor,
            highlight_ranges,
        }
    }

    fn compute_detail_view(&self, item: &Item) -> DetailView {
        let images: Vec<String> = item.images().iter().map(|uri| self.image_label(uri)).collect();
        let image_index = if images.is_empty() {
            0
        } else {
            self.image_page.min(images.len() - 1)
        };

        DetailView {
            name: item.name.clone(),
            type_label: item.item_type.label().to_string(),
            added: item.added_label(),
            description: item.description.clone(),
            images,
            image_index,
        }
    }

    fn compute_form_view(&self) -> FormView {
        FormView {
            name: self.form.name().to_string(),
            name_error: self.form.error(Field::Name).map(str::to_string),
            type_label: self.form.item_type().label().to_string(),
            description: self.form.description().to_string(),
            description_error: self.form.error(Field::Description).map(str::to_string),
            cover: self
                .form
                .cover_image()
                .map(|uri| self.image_label(uri.as_str())),
            cover_error: self.form.error(Field::CoverImage).map(str::to_string),
            additional: self
                .form
                .additional_images()
                .iter()
                .map(|uri| self.image_label(uri.as_str()))
                .collect(),
            path_input: self.path_input.clone(),
            focus: self.form_focus,
            success: self.submit_notice,
        }
    }

    /// Picks the empty-state message for an empty visible list.
    ///
    /// An unfiltered view of an unpopulated catalog means nothing has been
    /// added yet; anything else means the active criteria excluded every
    /// item. The two situations get distinct messages.
    fn compute_empty_state(&self) -> EmptyState {
        if self.query.is_unfiltered() {
            EmptyState {
                message: "No items added yet".to_string(),
                subtitle: "Press 'a' to add your first item to the collection".to_string(),
            }
        } else {
            EmptyState {
                message: "No items found".to_string(),
                subtitle: "Try adjusting your search criteria or filters".to_string(),
            }
        }
    }

    /// Result summary line above the table, qualified by the active filter
    /// and search term.
    fn compute_summary(&self) -> String {
        let mut summary = format!(
            "Showing {} of {} items",
            self.visible.len(),
            self.catalog.len()
        );

        if let TypeFilter::Only(t) = self.query.type_filter {
            summary.push_str(&format!(" in {}", t.label()));
        }
        if !self.query.search.is_empty() {
            summary.push_str(&format!(" matching \"{}\"", self.query.search));
        }
        summary
    }

    fn compute_header(&self, body: &BodyView) -> HeaderInfo {
        let title = match body {
            BodyView::Browse(_) => format!(" Item Catalog ({}) ", self.visible.len()),
            BodyView::Detail(_) => " Item Details ".to_string(),
            BodyView::Form(_) => " Add New Item ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self, body: &BodyView) -> FooterInfo {
        let keybindings = match body {
            BodyView::Detail(_) => {
                "h/l: images  e: enquire  ESC: close".to_string()
            }
            BodyView::Form(_) => {
                "Tab/Shift+Tab: fields  Enter: confirm field  Ctrl+s: submit  ESC: cancel"
                    .to_string()
            }
            BodyView::Browse(_) => match self.input_mode {
                InputMode::Search(SearchFocus::Typing) => {
                    "ESC: exit search  Enter: view  Ctrl+n/p: navigate  Type to filter".to_string()
                }
                InputMode::Search(SearchFocus::Navigating) => {
                    "ESC: exit search  /: edit query  j/k or Ctrl+n/p: navigate  Enter: view"
                        .to_string()
                }
                InputMode::Normal => {
                    "j/k: navigate  /: search  Tab: filter  Enter: view  a: add  q: quit"
                        .to_string()
                }
            },
        };
        FooterInfo { keybindings }
    }

    /// Rows left for the item table after subtracting UI chrome.
    ///
    /// Chrome is the blank top line, header, two borders, the summary line,
    /// the column header row, and the footer; search mode adds the 3-line
    /// search box.
    const fn calculate_available_rows(&self, total_rows: usize) -> usize {
        match self.input_mode {
            InputMode::Normal => total_rows.saturating_sub(7),
            InputMode::Search(_) => total_rows.saturating_sub(10),
        }
    }

    /// Fixed column widths for the table renderer (NAME, TYPE).
    #[must_use]
    pub const fn column_widths() -> (usize, usize) {
        (NAME_COLUMN_WIDTH, TYPE_COLUMN_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed;
    use crate::domain::ItemType;

    fn seeded_state() -> AppState {
        AppState::new(
            seed::seed_items().unwrap(),
            Theme::default(),
            "store@itemstore.com".to_string(),
        )
    }

    #[test]
    fn cursor_wraps_and_ignores_empty_lists() {
        let mut state = AppState::new(vec![], Theme::default(), String::new());
        state.move_cursor_down();
        state.move_cursor_up();
        assert_eq!(state.cursor, 0);

        let mut state = seeded_state();
        assert_eq!(state.visible.len(), 4);
        state.move_cursor_up();
        assert_eq!(state.cursor, 3);
        state.move_cursor_down();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn apply_query_clamps_the_cursor() {
        let mut state = seeded_state();
        state.cursor = 3;
        state.query.search = "jeans".to_string();
        state.apply_query();

        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.cursor_item().unwrap().name, "Slim Fit Jeans");
    }

    #[test]
    fn empty_catalog_gets_the_not_added_yet_message() {
        let state = AppState::new(vec![], Theme::default(), String::new());
        let vm = state.compute_viewmodel(24, 80);

        let BodyView::Browse(browse) = vm.body else {
            panic!("expected browse body");
        };
        let empty = browse.empty_state.expect("empty state expected");
        assert_eq!(empty.message, "No items added yet");
    }

    #[test]
    fn excluding_filters_get_the_no_matches_message() {
        let mut state = seeded_state();
        state.query.search = "zzz-no-such-item".to_string();
        state.apply_query();
        let vm = state.compute_viewmodel(24, 80);

        let BodyView::Browse(browse) = vm.body else {
            panic!("expected browse body");
        };
        let empty = browse.empty_state.expect("empty state expected");
        assert_eq!(empty.message, "No items found");
    }

    #[test]
    fn selection_switches_the_body_to_the_detail_view() {
        let mut state = seeded_state();
        let id = state.visible[1].clone();
        state.catalog.set_selected(Some(id));

        let vm = state.compute_viewmodel(24, 80);
        let BodyView::Detail(detail) = vm.body else {
            panic!("expected detail body");
        };
        assert_eq!(detail.name, "Slim Fit Jeans");
        assert_eq!(detail.images.len(), 3);
        assert_eq!(detail.image_index, 0);
    }

    #[test]
    fn summary_reflects_active_criteria() {
        let mut state = seeded_state();
        state.query.type_filter = TypeFilter::Only(ItemType::Shoes);
        state.query.search = "run".to_string();
        state.apply_query();

        let vm = state.compute_viewmodel(24, 80);
        let BodyView::Browse(browse) = vm.body else {
            panic!("expected browse body");
        };
        assert_eq!(browse.summary, "Showing 1 of 4 items in Shoes matching \"run\"");
    }
}
