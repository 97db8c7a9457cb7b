//! Table component renderer.
//!
//! Renders the photographer list (NAME, LOCATION, PRICE, TAGLINE) and the media
//! list (TITLE, TYPE, DATE, LIKES). Both support selection highlighting; the
//! photographer list also renders fuzzy match highlights on names.

use crate::ui::helpers::{self, pad_to, position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MediaItem, PhotographerItem};

const NAME_WIDTH: usize = 30;
const LOCATION_WIDTH: usize = 22;
const PRICE_WIDTH: usize = 12;

const TITLE_WIDTH: usize = 42;
const KIND_WIDTH: usize = 8;
const DATE_WIDTH: usize = 12;

fn render_headers(out: &mut String, row: usize, theme: &Theme, columns: &[(&str, usize)]) -> usize {
    position_cursor(out, row, 1);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    for (label, width) in columns {
        pad_to(out, label, *width);
    }
    out.push_str(Theme::reset());
    row + 1
}

fn start_row(out: &mut String, row: usize, is_selected: bool, theme: &Theme) {
    position_cursor(out, row, 1);
    if is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
}

/// Renders the photographer table column headers.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_photographer_headers(out: &mut String, row: usize, theme: &Theme) -> usize {
    render_headers(
        out,
        row,
        theme,
        &[("NAME", NAME_WIDTH), ("LOCATION", LOCATION_WIDTH), ("PRICE", PRICE_WIDTH), ("TAGLINE", 0)],
    )
}

/// Renders every photographer row starting at `row`.
pub fn render_photographer_rows(
    out: &mut String,
    row: usize,
    items: &[PhotographerItem],
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_photographer_row(out, current_row, item, theme, cols);
    }
    current_row
}

/// Renders one photographer, padded to the full width so the selection
/// background covers the whole line.
fn render_photographer_row(out: &mut String, row: usize, item: &PhotographerItem, theme: &Theme, cols: usize) -> usize {
    start_row(out, row, item.is_selected, theme);

    helpers::render_highlighted_text(out, &item.name, &item.highlight_ranges, theme, item.is_selected);
    out.push_str(&" ".repeat(NAME_WIDTH.saturating_sub(visual_len(&item.name))));

    pad_to(out, &item.location, LOCATION_WIDTH);
    pad_to(out, &item.price_label, PRICE_WIDTH);

    if !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
    }
    out.push_str(&item.tagline);

    let line_len = NAME_WIDTH + LOCATION_WIDTH + PRICE_WIDTH + visual_len(&item.tagline);
    out.push_str(&" ".repeat(cols.saturating_sub(line_len)));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the media table column headers, with the active sort order.
pub fn render_media_headers(out: &mut String, row: usize, order_label: &str, theme: &Theme) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&format!("Sort by: {order_label}"));
    out.push_str(Theme::reset());

    render_headers(
        out,
        row + 1,
        theme,
        &[("TITLE", TITLE_WIDTH), ("TYPE", KIND_WIDTH), ("DATE", DATE_WIDTH), ("LIKES", 0)],
    )
}

/// Renders every media row starting at `row`.
pub fn render_media_rows(out: &mut String, row: usize, items: &[MediaItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_media_row(out, current_row, item, theme, cols);
    }
    current_row
}

fn render_media_row(out: &mut String, row: usize, item: &MediaItem, theme: &Theme, cols: usize) -> usize {
    start_row(out, row, item.is_selected, theme);

    pad_to(out, &item.title, TITLE_WIDTH);
    pad_to(out, item.kind, KIND_WIDTH);
    pad_to(out, &item.date, DATE_WIDTH);

    let heart = if item.liked { "♥" } else { "♡" };
    let likes = format!("{} {heart}", item.likes);
    if item.liked && !item.is_selected {
        out.push_str(&Theme::fg(&theme.colors.like_fg));
    }
    out.push_str(&likes);

    let line_len = TITLE_WIDTH + KIND_WIDTH + DATE_WIDTH + visual_len(&likes);
    out.push_str(&" ".repeat(cols.saturating_sub(line_len)));
    out.push_str(Theme::reset());
    row + 1
}
