//! Total likes and price badge.

use crate::ui::helpers::{position_cursor, visual_len};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BadgeInfo;

/// Renders the badge right-aligned at `row`, e.g. ` 297 ♥   400€ / day `.
pub fn render_badge(out: &mut String, row: usize, badge: &BadgeInfo, theme: &Theme, cols: usize) -> usize {
    let text = format!(" {} ♥   {} ", badge.total_likes, badge.price_label);
    let col = cols.saturating_sub(visual_len(&text)).saturating_add(1);

    position_cursor(out, row, col);
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.badge_fg));
    out.push_str(&Theme::bg(&theme.colors.badge_bg));
    out.push_str(&text);
    out.push_str(Theme::reset());
    row + 1
}
