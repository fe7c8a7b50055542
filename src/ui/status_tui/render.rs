use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::widgets::{banner_for, screen_style};
use crate::core::resolver::Target;
use crate::core::state::MonitorState;
use crate::ui::formatters::{
    format_footer_left, format_probe_label, format_success_text, layout_footer,
};

/// Main render function
///
/// Fills the screen with the status colour, centres the banner on the
/// middle row and writes the footer on the last row.
pub fn render_status(frame: &mut Frame, state: &MonitorState, target: &Target) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let banner = banner_for(state.status);
    let style = screen_style(&banner);

    frame.render_widget(Block::default().style(style), area);

    frame.render_widget(
        Paragraph::new(banner.text).style(style),
        banner_area(area, banner.text),
    );

    render_footer(frame, area, state, target, style);
}

/// Row `height / 2`, starting at column `(width - len) / 2`
pub fn banner_area(area: Rect, text: &str) -> Rect {
    let text_width = (text.width() as u16).min(area.width);
    let x = area.width.saturating_sub(text_width) / 2;
    Rect::new(area.x + x, area.y + area.height / 2, text_width, 1)
}

fn render_footer(
    frame: &mut Frame,
    area: Rect,
    state: &MonitorState,
    target: &Target,
    style: Style,
) {
    let footer_row = Rect::new(area.x, area.bottom() - 1, area.width, 1);

    let left = format_footer_left(&target.address, &format_success_text(state));
    let right = format_probe_label(state, &target.interval_label);
    let line = layout_footer(area.width as usize, &left, &right);

    frame.render_widget(Paragraph::new(line).style(style), footer_row);
}
