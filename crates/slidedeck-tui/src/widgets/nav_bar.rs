//! Previous/next buttons and the "current of total" counter

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use slidedeck_core::NavState;

use crate::theme::styles;

const PREVIOUS_LABEL: &str = " ◀ Prev ";
const NEXT_LABEL: &str = " Next ▶ ";
const BUTTON_WIDTH: u16 = 8;

/// Click areas of the previous and next buttons
pub fn button_rects(area: Rect) -> (Rect, Rect) {
    let width = BUTTON_WIDTH.min(area.width);
    let previous = Rect::new(area.x, area.y, width, area.height.min(1));
    let next = Rect::new(area.right() - width, area.y, width, area.height.min(1));
    (previous, next)
}

pub struct NavBar<'a> {
    nav: NavState,
    counter: Option<&'a str>,
    show_buttons: bool,
}

impl<'a> NavBar<'a> {
    pub fn new(nav: NavState) -> Self {
        Self {
            nav,
            counter: None,
            show_buttons: true,
        }
    }

    pub fn counter(mut self, counter: Option<&'a str>) -> Self {
        self.counter = counter;
        self
    }

    pub fn show_buttons(mut self, show: bool) -> Self {
        self.show_buttons = show;
        self
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        if self.show_buttons {
            let (previous, next) = button_rects(area);
            let style = |enabled: bool| {
                if enabled {
                    styles::focused_selected()
                } else {
                    styles::text_muted()
                }
            };
            buf.set_stringn(
                previous.x,
                previous.y,
                PREVIOUS_LABEL,
                usize::from(previous.width),
                style(self.nav.previous_enabled),
            );
            buf.set_stringn(
                next.x,
                next.y,
                NEXT_LABEL,
                usize::from(next.width),
                style(self.nav.next_enabled),
            );
        }

        if let Some(counter) = self.counter {
            let line = Line::from(Span::styled(counter, styles::text_secondary())).centered();
            line.render(area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;

    fn nav(previous: bool, next: bool) -> NavState {
        NavState {
            previous_enabled: previous,
            next_enabled: next,
        }
    }

    #[test]
    fn test_button_rects() {
        let (previous, next) = button_rects(Rect::new(0, 10, 40, 1));
        assert_eq!(previous, Rect::new(0, 10, 8, 1));
        assert_eq!(next, Rect::new(32, 10, 8, 1));
    }

    #[test]
    fn test_counter_and_buttons_render() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(
            NavBar::new(nav(true, true)).counter(Some("3 of 6")),
            term.area(),
        );

        assert!(term.buffer_contains("Prev"));
        assert!(term.buffer_contains("Next"));
        assert!(term.buffer_contains("3 of 6"));
    }

    #[test]
    fn test_disabled_button_is_dimmed() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(NavBar::new(nav(false, true)), term.area());

        // "Prev" text starts at column 3 of " ◀ Prev "
        let previous = &term.buffer()[(3, 0)];
        let next = &term.buffer()[(33, 0)];
        assert!(!previous.modifier.contains(Modifier::BOLD));
        assert!(next.modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_counter_only() {
        let mut term = TestTerminal::with_size(40, 1);
        term.render_widget(
            NavBar::new(nav(true, false))
                .counter(Some("6 of 6"))
                .show_buttons(false),
            term.area(),
        );

        assert!(term.buffer_contains("6 of 6"));
        assert!(!term.buffer_contains("Prev"));
    }
}
