//! Header bar widget
//!
//! Deck name on the left; fragment location, progress and mode badges on
//! the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use slidedeck_core::Progress;

use crate::theme::{palette, styles};

/// Main header showing app title, deck name and status
pub struct DeckHeader<'a> {
    deck_name: &'a str,
    fragment: Option<&'a str>,
    progress: Option<Progress>,
    auto_advance: bool,
}

impl<'a> DeckHeader<'a> {
    pub fn new(deck_name: &'a str) -> Self {
        Self {
            deck_name,
            fragment: None,
            progress: None,
            auto_advance: false,
        }
    }

    /// Show the current location fragment (without `#`)
    pub fn fragment(mut self, fragment: Option<&'a str>) -> Self {
        self.fragment = fragment;
        self
    }

    pub fn progress(mut self, progress: Option<Progress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn auto_advance(mut self, running: bool) -> Self {
        self.auto_advance = running;
        self
    }
}

impl Widget for DeckHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("SlideDeck", styles::accent_bold()),
            Span::raw(" "),
            Span::styled("/", styles::text_muted()),
            Span::raw(" "),
            Span::styled(self.deck_name, styles::text_secondary()),
        ]);

        let mut right_spans = Vec::new();
        if self.auto_advance {
            right_spans.push(Span::styled("▶ auto", styles::status_green()));
            right_spans.push(Span::raw("  "));
        }
        if let Some(progress) = self.progress {
            right_spans.push(Span::styled(
                format!("{}%", progress.percentage),
                styles::text_muted(),
            ));
            right_spans.push(Span::raw("  "));
        }
        if let Some(fragment) = self.fragment {
            right_spans.push(Span::styled(format!("#{}", fragment), styles::accent()));
            right_spans.push(Span::raw(" "));
        }
        let right = Line::from(right_spans);

        let left_width = left.width() as u16;
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);

        // Drop the right section rather than overlap the deck name
        if left_width + right_width < inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}
