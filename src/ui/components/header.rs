//! Header component renderer.
//!
//! Renders the page title bar centered, with an optional dimmed subtitle line
//! (photographer location and tagline).

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

fn centered(out: &mut String, text: &str, cols: usize) {
    let len = visual_len(text);
    let padding = cols.saturating_sub(len) / 2;
    out.push_str(&" ".repeat(padding));
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(padding + len)));
}

/// Renders the header at `row`.
///
/// # Returns
///
/// The next available row position: `row + 1`, or `row + 2` with a subtitle.
pub fn render_header(out: &mut String, row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }
    centered(out, &header.title, cols);
    out.push_str(Theme::reset());

    let Some(subtitle) = &header.subtitle else {
        return row + 1;
    };

    position_cursor(out, row + 1, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    centered(out, subtitle, cols);
    out.push_str(Theme::reset());
    row + 2
}
