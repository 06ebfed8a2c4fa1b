//! Add-item form component renderer.
//!
//! Renders the form fields top to bottom with a focus marker, inline
//! validation errors under their fields, the staged image lists, and the
//! post-submission success banner. All interaction lives in the event
//! handler; this renderer only draws the view model.

use crate::app::modes::FormField;
use crate::form::Field;
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FormView;

/// Left margin for form content.
const MARGIN: usize = 2;

/// Renders the add-item form starting at the given row. Returns the next
/// free row.
pub fn render_form(row: usize, form: &FormView, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;

    if form.success {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(MARGIN));
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.success_fg));
        print!("✓ Item successfully added! Redirecting to view items...");
        print!("{}", Theme::reset());
        current_row += 2;
    }

    let name_label = format!("{} *", Field::Name.label());
    current_row = render_text_field(
        current_row,
        &name_label,
        &form.name,
        form.focus == FormField::Name,
        form.name_error.as_deref(),
        theme,
        cols,
    );

    current_row = render_label(current_row, "Item Type *", form.focus == FormField::Type, theme);
    position_cursor(current_row, 1);
    print!("{}", " ".repeat(MARGIN + 2));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("< {} >", form.type_label);
    print!("{}", Theme::reset());
    current_row += 2;

    let description_label = format!("{} *", Field::Description.label());
    current_row = render_text_field(
        current_row,
        &description_label,
        &form.description,
        form.focus == FormField::Description,
        form.description_error.as_deref(),
        theme,
        cols,
    );

    // Cover image: staged label or a staging hint, plus the path buffer
    // while the field is focused.
    let cover_label = format!("{} *", Field::CoverImage.label());
    current_row = render_label(current_row, &cover_label, form.focus == FormField::CoverImage, theme);
    position_cursor(current_row, 1);
    print!("{}", " ".repeat(MARGIN + 2));
    match &form.cover {
        Some(label) => {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            let shown: String = label.chars().take(cols.saturating_sub(MARGIN + 4)).collect();
            print!("● {shown}");
        }
        None => {
            print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
            print!("none (type a path and press Enter)");
        }
    }
    print!("{}", Theme::reset());
    current_row += 1;
    if form.focus == FormField::CoverImage {
        current_row = render_path_input(current_row, &form.path_input, theme);
    }
    if let Some(error) = form.cover_error.as_deref() {
        current_row = render_error(current_row, error, theme);
    }
    current_row += 1;

    // Additional images: staged list plus the path buffer while focused.
    current_row = render_label(
        current_row,
        "Additional Images (Optional)",
        form.focus == FormField::AdditionalImages,
        theme,
    );
    if form.additional.is_empty() {
        position_cursor(current_row, 1);
        print!("{}", " ".repeat(MARGIN + 2));
        print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
        print!("none");
        print!("{}", Theme::reset());
        current_row += 1;
    } else {
        for label in &form.additional {
            position_cursor(current_row, 1);
            print!("{}", " ".repeat(MARGIN + 2));
            print!("{}", Theme::fg(&theme.colors.text_normal));
            let shown: String = label.chars().take(cols.saturating_sub(MARGIN + 4)).collect();
            print!("○ {shown}");
            print!("{}", Theme::reset());
            current_row += 1;
        }
    }
    if form.focus == FormField::AdditionalImages {
        current_row = render_path_input(current_row, &form.path_input, theme);
    }

    current_row
}

/// Renders a field label line with the focus marker. Returns the next row.
fn render_label(row: usize, label: &str, focused: bool, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN));
    if focused {
        print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.field_focus_fg));
        print!("▸ {label}");
    } else {
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("  {label}");
    }
    print!("{}", Theme::reset());
    row + 1
}

/// Renders a single-value text field (label, value, optional error).
fn render_text_field(
    row: usize,
    label: &str,
    value: &str,
    focused: bool,
    error: Option<&str>,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = render_label(row, label, focused, theme);

    position_cursor(current_row, 1);
    print!("{}", " ".repeat(MARGIN + 2));
    print!("{}", Theme::fg(&theme.colors.text_normal));
    let shown: String = value.chars().take(cols.saturating_sub(MARGIN + 4)).collect();
    print!("{shown}");
    if focused {
        print!("{}_{}", Theme::fg(&theme.colors.field_focus_fg), Theme::reset());
    }
    print!("{}", Theme::reset());
    current_row += 1;

    if let Some(error) = error {
        current_row = render_error(current_row, error, theme);
    }
    current_row + 1
}

/// Renders the image-path input buffer line. Returns the next row.
fn render_path_input(row: usize, path_input: &str, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN + 2));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("Path: ");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{path_input}");
    print!("{}_{}", Theme::fg(&theme.colors.field_focus_fg), Theme::reset());
    row + 1
}

/// Renders an inline validation error line. Returns the next row.
fn render_error(row: usize, error: &str, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(MARGIN + 2));
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print!("! {error}");
    print!("{}", Theme::reset());
    row + 1
}
