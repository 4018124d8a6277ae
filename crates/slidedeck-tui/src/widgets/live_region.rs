//! Live-region row
//!
//! Shows the current announcement while it is posted. With no announcement
//! the row carries key hints, or stays empty in presentation mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

const HINTS: [(&str, &str); 6] = [
    ("←/→", "navigate"),
    ("1-9", "jump"),
    ("g", "go to"),
    ("f", "present"),
    ("a", "auto"),
    ("q", "quit"),
];

pub struct LiveRegionLine<'a> {
    text: Option<&'a str>,
    hints: bool,
}

impl<'a> LiveRegionLine<'a> {
    pub fn new(text: Option<&'a str>) -> Self {
        Self { text, hints: true }
    }

    pub fn hints(mut self, hints: bool) -> Self {
        self.hints = hints;
        self
    }
}

impl Widget for LiveRegionLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let line = match self.text {
            Some(text) => Line::from(vec![
                Span::raw(" "),
                Span::styled(text, styles::text_bright()),
            ]),
            None if self.hints => {
                let mut spans = vec![Span::raw(" ")];
                for (key, action) in HINTS {
                    spans.push(Span::styled(key, styles::keybinding()));
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(action, styles::text_muted()));
                    spans.push(Span::raw("  "));
                }
                Line::from(spans)
            }
            None => return,
        };
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_announcement_replaces_hints() {
        let mut term = TestTerminal::with_size(60, 1);
        term.render_widget(
            LiveRegionLine::new(Some("Slide 2 of 6: Agenda")),
            term.area(),
        );
        assert!(term.buffer_contains("Slide 2 of 6: Agenda"));
        assert!(!term.buffer_contains("navigate"));
    }

    #[test]
    fn test_hints_when_idle() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(LiveRegionLine::new(None), term.area());
        assert!(term.buffer_contains("navigate"));
        assert!(term.buffer_contains("quit"));
    }

    #[test]
    fn test_hidden_hints() {
        let mut term = TestTerminal::with_size(80, 1);
        term.render_widget(LiveRegionLine::new(None).hints(false), term.area());
        assert!(term.content().trim().is_empty());
    }
}
