//! Detail view component renderer.
//!
//! Full-pane view of the selected item: name, category badge, creation
//! date, the image pager with its position indicator, the wrapped
//! description, and a details block. Closing the view is a selection
//! change handled upstream; this renderer only draws.

use crate::ui::helpers::{position_cursor, wrap_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DetailView;

/// Left margin for detail content.
const MARGIN: usize = 2;

/// Maximum image rows listed under the pager before eliding.
const MAX_IMAGE_ROWS: usize = 5;

/// Renders the detail view starting at the given row. Returns the next
/// free row.
pub fn render_detail(row: usize, detail: &DetailView, theme: &Theme, cols: usize) -> usize {
    let indent = " ".repeat(MARGIN);
    let content_width = cols.saturating_sub(MARGIN * 2).max(20);
    let mut current_row = row;

    // Name and category badge.
    position_cursor(current_row, 1);
    print!("{indent}{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!("{}", detail.name);
    print!("{}", Theme::reset());
    current_row += 1;

    position_cursor(current_row, 1);
    print!("{indent}");
    print!("{}{}", Theme::fg(&theme.colors.badge_fg), Theme::bg(&theme.colors.badge_bg));
    print!(" {} ", detail.type_label);
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("  Added {}", detail.added);
    print!("{}", Theme::reset());
    current_row += 2;

    // Image pager.
    if !detail.images.is_empty() {
        position_cursor(current_row, 1);
        print!("{indent}{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("Images ({} / {})", detail.image_index + 1, detail.images.len());
        print!("{}", Theme::reset());
        current_row += 1;

        let listed = detail.images.len().min(MAX_IMAGE_ROWS);
        for (idx, label) in detail.images.iter().take(listed).enumerate() {
            position_cursor(current_row, 1);
            let marker = if idx == detail.image_index { "●" } else { "○" };
            if idx == detail.image_index {
                print!("{indent}{}", Theme::fg(&theme.colors.field_focus_fg));
            } else {
                print!("{indent}{}", Theme::fg(&theme.colors.text_dim));
            }
            let shown: String = label.chars().take(content_width.saturating_sub(2)).collect();
            print!("{marker} {shown}");
            print!("{}", Theme::reset());
            current_row += 1;
        }
        if detail.images.len() > listed {
            position_cursor(current_row, 1);
            print!("{indent}{}", Theme::fg(&theme.colors.text_dim));
            print!("… and {} more", detail.images.len() - listed);
            print!("{}", Theme::reset());
            current_row += 1;
        }
        current_row += 1;
    }

    // Description.
    position_cursor(current_row, 1);
    print!("{indent}{}{}Description{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    current_row += 1;

    for line in wrap_text(&detail.description, content_width) {
        position_cursor(current_row, 1);
        print!("{indent}{}{line}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
        current_row += 1;
    }
    current_row += 1;

    // Details block.
    position_cursor(current_row, 1);
    print!("{indent}{}{}Details{}", Theme::bold(), Theme::fg(&theme.colors.header_fg), Theme::reset());
    current_row += 1;

    let photo_label = if detail.images.len() == 1 { "photo" } else { "photos" };
    let rows = [
        ("Type", detail.type_label.clone()),
        ("Images", format!("{} {photo_label}", detail.images.len())),
        ("Added", detail.added.clone()),
    ];
    for (label, value) in rows {
        position_cursor(current_row, 1);
        print!("{indent}{}{label}:{} ", Theme::fg(&theme.colors.text_dim), Theme::reset());
        print!("{}{value}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
        current_row += 1;
    }

    current_row
}
