//! Centered modal frame shared by the lightbox and the contact form.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ControlView;

const MODAL_MAX_WIDTH: usize = 64;

/// Geometry of a drawn modal: the first content row, the content column and
/// the usable inner width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalFrame {
    pub top: usize,
    pub col: usize,
    pub inner_width: usize,
}

impl ModalFrame {
    /// Screen row of content line `line` (0-indexed).
    #[must_use]
    pub const fn row(&self, line: usize) -> usize {
        self.top + 1 + line
    }
}

/// Draws an empty box of `height` content lines with `title` in its top edge.
///
/// The box is centered and blanks whatever the page drew beneath it.
pub fn render_frame(out: &mut String, title: &str, height: usize, theme: &Theme, rows: usize, cols: usize) -> ModalFrame {
    let width = cols.saturating_sub(4).min(MODAL_MAX_WIDTH).max(4);
    let inner_width = width - 2;
    let left = cols.saturating_sub(width) / 2 + 1;
    let top = rows.saturating_sub(height + 2) / 2 + 1;
    let border = Theme::fg(&theme.colors.modal_border);

    let title = format!(" {title} ");
    let title_len = visual_len(&title).min(inner_width);
    let title: String = title.chars().take(title_len).collect();

    position_cursor(out, top, left);
    out.push_str(&border);
    out.push('┌');
    out.push_str(Theme::bold());
    out.push_str(&title);
    out.push_str(Theme::reset());
    out.push_str(&border);
    out.push_str(&"─".repeat(inner_width - title_len));
    out.push('┐');

    for line in 0..height {
        position_cursor(out, top + 1 + line, left);
        out.push_str(&border);
        out.push('│');
        out.push_str(&" ".repeat(inner_width));
        out.push('│');
    }

    position_cursor(out, top + height + 1, left);
    out.push('└');
    out.push_str(&"─".repeat(inner_width));
    out.push('┘');
    out.push_str(Theme::reset());

    ModalFrame { top, col: left + 1, inner_width }
}

/// Writes `text` on content line `line`, clipped to the frame.
pub fn render_line(out: &mut String, frame: &ModalFrame, line: usize, text: &str, color: &str) {
    let text: String = text.chars().take(frame.inner_width.saturating_sub(2)).collect();
    position_cursor(out, frame.row(line), frame.col + 1);
    out.push_str(&Theme::fg(color));
    out.push_str(&text);
    out.push_str(Theme::reset());
}

/// Draws the buttons of a modal side by side on content line `line`.
///
/// Disabled buttons are dimmed; the focused one uses the selection colors.
pub fn render_controls(out: &mut String, frame: &ModalFrame, line: usize, controls: &[ControlView], theme: &Theme) {
    position_cursor(out, frame.row(line), frame.col + 1);
    for control in controls {
        if control.focused {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else if control.enabled {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        } else {
            out.push_str(&Theme::fg(&theme.colors.disabled_fg));
        }
        out.push_str(&format!("[ {} ]", control.label));
        out.push_str(Theme::reset());
        out.push(' ');
    }
}
