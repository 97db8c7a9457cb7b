//! Composable UI component renderers.
//!
//! Each component appends the ANSI sequences for one part of the screen to a
//! frame buffer and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Page title and photographer subtitle
//! - [`footer`]: Keybinding hints and the status notice
//! - [`search`]: Search input box of the listing page
//! - [`table`]: Photographer and media lists
//! - [`empty`]: Empty state message for no items
//! - [`badge`]: Total likes and daily price
//! - [`lightbox`] and [`contact`]: Modal overlays drawn in a [`modal`] frame
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header (+ subtitle)]
//! [Border]
//! [Search Bar - 3 lines, listing search mode only]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Blank padding to fill screen]
//! [Badge, photographer page only]
//! [Border]
//! [Footer]
//! ```

mod badge;
mod contact;
mod empty;
mod footer;
mod header;
mod lightbox;
mod modal;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, Overlay, UIViewModel};

/// Renders a horizontal border line at the specified row.
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    row + 1
}

/// Renders the page of `vm`, then its overlay if a modal is open.
pub fn render_page(out: &mut String, vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = header::render_header(out, current_row, &vm.header, theme, cols);
    current_row = render_border(out, current_row, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        current_row = search::render_search_bar(out, current_row, search, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(out, current_row, empty, theme, cols);
    } else {
        match &vm.body {
            Body::Photographers(items) => {
                current_row = table::render_photographer_headers(out, current_row, theme);
                table::render_photographer_rows(out, current_row, items, theme, cols);
            }
            Body::Media { order_label, items } => {
                current_row = table::render_media_headers(out, current_row, order_label, theme);
                table::render_media_rows(out, current_row, items, theme, cols);
            }
        }
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    if let Some(badge) = &vm.badge {
        badge::render_badge(out, border_row.saturating_sub(1), badge, theme, cols);
    }

    render_border(out, border_row, &theme.colors.border, cols);
    footer::render_footer(out, footer_row, &vm.footer, theme, cols);

    match &vm.overlay {
        Some(Overlay::Lightbox(lightbox)) => lightbox::render_lightbox(out, lightbox, theme, rows, cols),
        Some(Overlay::Contact(contact)) => contact::render_contact(out, contact, theme, rows, cols),
        None => {}
    }
}
