//! Lightbox overlay renderer.

use super::modal::{render_controls, render_frame, render_line};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LightboxView;

/// Content lines: kind and position, title, asset path, blank, controls.
const LIGHTBOX_HEIGHT: usize = 5;

/// Renders the open lightbox on top of the page.
///
/// ```text
/// ┌ Photo ──────────────────────────┐
/// │ image  2 / 9                    │
/// │ Fashion Yellow Beach            │
/// │ assets/media/Mimi/Fashion_...   │
/// │                                 │
/// │ [ Previous ] [ Next ] [ Close ] │
/// └─────────────────────────────────┘
/// ```
pub fn render_lightbox(out: &mut String, lightbox: &LightboxView, theme: &Theme, rows: usize, cols: usize) {
    let frame = render_frame(out, "Media", LIGHTBOX_HEIGHT, theme, rows, cols);

    render_line(out, &frame, 0, &format!("{}  {}", lightbox.kind, lightbox.position), &theme.colors.text_dim);
    render_line(out, &frame, 1, &lightbox.title, &theme.colors.header_fg);
    render_line(out, &frame, 2, &lightbox.asset_path, &theme.colors.text_normal);
    render_controls(out, &frame, 4, &lightbox.controls, theme);
}
