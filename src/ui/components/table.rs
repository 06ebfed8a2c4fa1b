//! Item table component renderer.
//!
//! Renders the visible catalog window as a three-column table (NAME, TYPE,
//! ADDED) with cursor-row highlighting and search-match highlighting on the
//! name column.

use crate::app::AppState;
use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ItemRow;

/// Renders the result summary line ("Showing X of Y items ...") at the
/// given row. Returns the next free row.
pub fn render_summary(row: usize, summary: &str, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    let line: String = summary.chars().take(cols).collect();
    print!(" {line}");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the column headers. Returns the next free row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    let (name_w, type_w) = AppState::column_widths();

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(" {:<name_w$} {:<type_w$} {}", "NAME", "TYPE", "ADDED");
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all visible table rows starting at the given row. Returns the
/// next free row.
pub fn render_table_rows(row: usize, items: &[ItemRow], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one table row.
///
/// Styling precedence: cursor background over match highlights over normal
/// text. The row is padded to the terminal width so the cursor background
/// covers the whole line.
fn render_table_row(row: usize, item: &ItemRow, theme: &Theme, cols: usize) -> usize {
    let (name_w, type_w) = AppState::column_widths();

    position_cursor(row, 1);

    if item.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    print!(" ");
    if item.highlight_ranges.is_empty() {
        print!("{}", item.name);
    } else {
        helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_cursor);
    }

    let name_len = item.name.chars().count().min(name_w);
    print!("{}", " ".repeat(name_w.saturating_sub(name_len) + 1));

    let type_label: String = item.type_label.chars().take(type_w).collect();
    print!("{type_label}");
    print!("{}", " ".repeat(type_w.saturating_sub(type_label.chars().count()) + 1));

    print!("{}", item.added);

    let line_len = 1 + name_w + 1 + type_w + 1 + item.added.chars().count();
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}
