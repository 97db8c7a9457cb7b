//! Empty state component renderer.
//!
//! Shown instead of a list when there is nothing to show: an empty catalog, an
//! unknown photographer, or a photographer without media.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message starting at `row`.
///
/// # Layout
///
/// ```text
/// [2 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// # Returns
///
/// The next available row position.
pub fn render_empty_state(out: &mut String, row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let msg_row = row + 2;
    let msg_len = visual_len(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    position_cursor(out, msg_row, 1);
    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&" ".repeat(msg_padding));
    out.push_str(&empty.message);
    out.push_str(&" ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    out.push_str(Theme::reset());

    let sub_len = visual_len(&empty.subtitle);
    let sub_padding = cols.saturating_sub(sub_len) / 2;

    position_cursor(out, msg_row + 1, 1);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&" ".repeat(sub_padding));
    out.push_str(&empty.subtitle);
    out.push_str(&" ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    out.push_str(Theme::reset());

    msg_row + 2
}
