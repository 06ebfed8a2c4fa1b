//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from application state by
//! `AppState::compute_viewmodel` and consumed by the renderer. They carry no
//! business logic, only display-ready data such as truncated labels,
//! highlight ranges, and pre-selected empty-state messages.

use crate::app::modes::FormField;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UiViewModel {
    /// Header information (title, count).
    pub header: HeaderInfo,

    /// Footer information (keybinding hints for the active mode).
    pub footer: FooterInfo,

    /// Screen-specific body content.
    pub body: BodyView,
}

/// Body content for the active screen.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Item list with search/filter chrome.
    Browse(BrowseView),

    /// Full-pane detail view of the selected item.
    Detail(DetailView),

    /// Add-item form.
    Form(FormView),
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header bar.
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the active mode.
    pub keybindings: String,
}

/// Browse screen content.
#[derive(Debug, Clone)]
pub struct BrowseView {
    /// Result summary line, e.g. `Showing 2 of 4 items matching "tee"`.
    pub summary: String,

    /// Search input state, present while search mode is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Rows within the visible window.
    pub rows: Vec<ItemRow>,

    /// Cursor position relative to the visible window.
    pub cursor: usize,

    /// Empty-state message when no rows are visible.
    pub empty_state: Option<EmptyState>,
}

/// One row of the item table.
#[derive(Debug, Clone)]
pub struct ItemRow {
    /// Item name, truncated to the name column.
    pub name: String,

    /// Category label.
    pub type_label: String,

    /// Creation date label, e.g. "Jan 15, 2024".
    pub added: String,

    /// Whether the navigation cursor is on this row.
    pub is_cursor: bool,

    /// Char ranges of the search term within `name`, for highlighting.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Search bar display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
}

/// Empty-state message display information.
///
/// Two distinct variants exist: "no items added yet" (the catalog itself is
/// unpopulated and nothing is filtered out) and "no items found" (the active
/// search/filter excluded everything).
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Detail view content for the selected item.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub name: String,
    pub type_label: String,

    /// Creation date label.
    pub added: String,

    pub description: String,

    /// Display labels for every image, cover first.
    pub images: Vec<String>,

    /// Index of the image currently shown by the pager.
    pub image_index: usize,
}

/// Add-item form content.
#[derive(Debug, Clone)]
pub struct FormView {
    pub name: String,
    pub name_error: Option<String>,

    pub type_label: String,

    pub description: String,
    pub description_error: Option<String>,

    /// Display label of the staged cover image, if one is staged.
    pub cover: Option<String>,
    pub cover_error: Option<String>,

    /// Display labels of staged additional images, in staging order.
    pub additional: Vec<String>,

    /// Contents of the shared image-path input buffer.
    pub path_input: String,

    /// Field holding keyboard focus.
    pub focus: FormField,

    /// Whether the post-submission success banner is showing.
    pub success: bool,
}
