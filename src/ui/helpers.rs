//! Shared rendering utilities and helpers.
//!
//! Components draw into a `String` frame with absolute cursor positioning, so a
//! frame can be written to the terminal in one go or inspected in tests.
//!
//! # Features
//!
//! - **Fuzzy Match Highlighting**: Renders text with highlighted character ranges
//! - **Selection Awareness**: Adjusts highlighting based on selection state
//! - **UTF-8 Safe**: Operates on character indices, not byte indices

use crate::ui::theme::Theme;

/// Appends the cursor move to `row`, `col` (both 1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends the clear-screen and cursor-home sequences.
pub fn clear_screen(out: &mut String) {
    out.push_str("\u{1b}[2J\u{1b}[H");
}

/// Number of characters `text` occupies on screen.
#[must_use]
pub fn visual_len(text: &str) -> usize {
    text.chars().count()
}

/// Appends `text` followed by spaces up to `width` characters.
pub fn pad_to(out: &mut String, text: &str, width: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(width.saturating_sub(visual_len(text))));
}

/// Appends `text` with highlighted character ranges for fuzzy matches.
///
/// Ranges are `(start, end)` character indices with an exclusive end. When
/// `is_selected` is `true`, match highlighting is disabled to avoid conflicting
/// with selection background colors.
///
/// # Example
///
/// ```rust
/// use fisheye::ui::helpers::render_highlighted_text;
/// use fisheye::ui::Theme;
///
/// let mut out = String::new();
/// render_highlighted_text(&mut out, "Mimi Keel", &[(0, 2)], &Theme::default(), false);
/// assert!(out.ends_with("mi Keel"));
/// ```
pub fn render_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}
