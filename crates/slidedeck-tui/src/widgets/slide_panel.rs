//! Active slide panel

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use slidedeck_core::{ScrollExtent, Slide};

use crate::theme::{palette, styles};

pub struct SlidePanel<'a> {
    slide: Option<&'a Slide>,
    index: usize,
    offset: u16,
    focused: bool,
}

impl<'a> SlidePanel<'a> {
    pub fn new(slide: Option<&'a Slide>, index: usize) -> Self {
        Self {
            slide,
            index,
            offset: 0,
            focused: false,
        }
    }

    /// First visible body row
    pub fn offset(mut self, offset: u16) -> Self {
        self.offset = offset;
        self
    }

    /// Accent the border (presentation mode)
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

/// Style one markdown source line for display
fn styled_line(raw: &str) -> Line<'_> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('#') {
        let text = trimmed.trim_start_matches('#').trim();
        return Line::from(Span::styled(text, styles::accent_bold()));
    }
    if trimmed.starts_with("```") {
        return Line::from(Span::styled(raw, styles::text_muted()));
    }
    if let Some(item) = trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("* "))
    {
        let indent = raw.len() - trimmed.len();
        return Line::from(vec![
            Span::raw(" ".repeat(indent)),
            Span::styled("• ", styles::accent()),
            Span::styled(item, styles::text_primary()),
        ]);
    }
    Line::from(Span::styled(raw, styles::text_primary()))
}

impl Widget for SlidePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused)
            .style(Style::default().bg(palette::CARD_BG))
            .title(Line::from(Span::styled(
                format!(" {} ", self.index),
                styles::text_muted(),
            )));

        let Some(slide) = self.slide else {
            block.render(area, buf);
            return;
        };

        let inner = block.inner(area);
        let extent = ScrollExtent::new(self.offset, slide.height(), inner.height);
        if extent.is_scrollable() && !extent.at_bottom() {
            block = block.title_bottom(Line::from(Span::styled(" more ↓ ", styles::accent())).right_aligned());
        }

        let lines: Vec<Line> = slide.lines.iter().map(|l| styled_line(l)).collect();
        Paragraph::new(lines)
            .block(block)
            .scroll((self.offset, 0))
            .render(area, buf);
    }
}
