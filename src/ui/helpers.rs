//! Shared rendering utilities.
//!
//! Low-level helpers used across components: cursor positioning, padded
//! line printing, search-match highlighting, and naive word wrapping for
//! the detail view's description block.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column via
/// `\x1b[{row};{col}H`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Ranges are char-index `(start, end)` pairs with exclusive end, as
/// produced by the query engine's substring scanner. When the row is under
/// the cursor, highlighting is suppressed so it cannot fight the selection
/// background.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_cursor_row: bool,
) {
    if ranges.is_empty() || is_cursor_row {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start.min(chars.len())].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted: String = chars[start.min(chars.len())..end.min(chars.len())]
            .iter()
            .collect();
        print!("{highlighted}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Greedy word wrap to a maximum line width, in characters.
///
/// Words longer than the width are emitted on their own line rather than
/// split. Blank input yields no lines.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.trim().is_empty() {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_text_respects_width_and_keeps_words_whole() {
        let lines = wrap_text("Classic slim-fit jeans made from premium denim", 20);
        assert!(lines.iter().all(|l| l.chars().count() <= 20));
        assert_eq!(lines.join(" "), "Classic slim-fit jeans made from premium denim");
    }

    #[test]
    fn wrap_text_handles_degenerate_input() {
        assert!(wrap_text("", 20).is_empty());
        assert!(wrap_text("   ", 20).is_empty());
        assert_eq!(wrap_text("indivisible", 4), vec!["indivisible".to_string()]);
    }
}
