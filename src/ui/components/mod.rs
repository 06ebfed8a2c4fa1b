//! Composable UI component renderers.
//!
//! Each component renders one part of the interface with cursor-positioned
//! ANSI output; the layout functions below compose them into full screens.
//!
//! # Components
//!
//! - [`header`]: title bar
//! - [`footer`]: keybinding hints
//! - [`search`]: search input box
//! - [`table`]: item list (summary, column headers, rows)
//! - [`detail`]: selected item detail view
//! - [`form`]: add-item form
//! - [`empty`]: empty state messages

mod detail;
mod empty;
mod footer;
mod form;
mod header;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BrowseView, DetailView, FormView, UiViewModel};

use detail::render_detail;
use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use search::render_search_bar;
use table::{render_summary, render_table_headers, render_table_rows};

/// Renders a horizontal separator line at the given row. Returns the next
/// free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the footer chrome (separator plus keybinding bar) pinned to the
/// bottom of the pane.
fn render_bottom_chrome(vm: &UiViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1);
    render_border(footer_row.saturating_sub(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the browse screen: header, optional search box, summary line,
/// item table (or empty state), footer.
pub fn render_browse_screen(
    vm: &UiViewModel,
    browse: &BrowseView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);

    if let Some(search) = &browse.search_bar {
        current_row = render_search_bar(current_row, search, theme, cols);
    }

    current_row = render_summary(current_row, &browse.summary, theme, cols);

    if let Some(empty) = &browse.empty_state {
        render_empty_state(current_row + 2, empty, theme, cols);
    } else {
        current_row = render_table_headers(current_row, theme);
        render_table_rows(current_row, &browse.rows, theme, cols);
    }

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the detail screen: header, item detail, footer.
pub fn render_detail_screen(
    vm: &UiViewModel,
    detail: &DetailView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_detail(current_row + 1, detail, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}

/// Renders the add-item screen: header, form, footer.
pub fn render_form_screen(
    vm: &UiViewModel,
    form: &FormView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_form(current_row + 1, form, theme, cols);

    render_bottom_chrome(vm, theme, cols, rows);
}
