//! Contact modal renderer.
//!
//! Each field takes three lines: label, value, and the validation message
//! (blank while the field is valid).

use super::modal::{render_controls, render_frame, render_line, ModalFrame};
use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ContactView, FieldView};

const LINES_PER_FIELD: usize = 3;

/// Renders the open contact form on top of the page.
pub fn render_contact(out: &mut String, contact: &ContactView, theme: &Theme, rows: usize, cols: usize) {
    let height = contact.fields.len() * LINES_PER_FIELD + 1;
    let frame = render_frame(out, &contact.title, height, theme, rows, cols);

    for (i, field) in contact.fields.iter().enumerate() {
        let line = i * LINES_PER_FIELD;
        render_field(out, &frame, line, field, theme);
    }

    render_controls(out, &frame, height - 1, &contact.controls, theme);
}

fn render_field(out: &mut String, frame: &ModalFrame, line: usize, field: &FieldView, theme: &Theme) {
    let label_color = if field.focused { &theme.colors.header_fg } else { &theme.colors.text_dim };
    render_line(out, frame, line, field.label, label_color);

    let width = frame.inner_width.saturating_sub(4);
    let value: String = field.value.chars().rev().take(width).collect::<Vec<_>>().into_iter().rev().collect();
    position_cursor(out, frame.row(line + 1), frame.col + 1);
    if field.focused {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }
    out.push_str("> ");
    out.push_str(&value);
    if field.focused {
        out.push('▏');
    }
    out.push_str(Theme::reset());

    if let Some(error) = field.error {
        render_line(out, frame, line + 2, error, &theme.colors.error_fg);
    }
}
