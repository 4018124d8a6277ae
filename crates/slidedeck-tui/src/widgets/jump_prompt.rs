//! Jump-to-fragment prompt

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const WIDTH: u16 = 40;
const HEIGHT: u16 = 3;

pub struct JumpPrompt<'a> {
    query: &'a str,
}

impl<'a> JumpPrompt<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query }
    }

    /// Popup area centered in `area`
    pub fn area(area: Rect) -> Rect {
        let width = WIDTH.min(area.width);
        let height = HEIGHT.min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Widget for JumpPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::modal_block(" Go to ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        // Keep the tail of a long query visible
        let room = usize::from(inner.width).saturating_sub(4);
        let mut query = self.query;
        while query.width() > room {
            let mut chars = query.chars();
            chars.next();
            query = chars.as_str();
        }

        let line = Line::from(vec![
            Span::styled(" #", styles::accent()),
            Span::styled(query, styles::text_bright()),
            Span::styled("▏", styles::accent()),
        ]);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
