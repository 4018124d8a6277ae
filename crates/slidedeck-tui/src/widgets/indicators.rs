//! Slide indicator dots

use ratatui::{buffer::Buffer, layout::Rect, style::Modifier, widgets::Widget};

use crate::theme::styles;

const ACTIVE_DOT: &str = "●";
const DOT: &str = "○";

/// Cells of the indicator dots, centered in `area` with one column between
/// them. Dots that do not fit are left out.
pub fn dot_rects(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || area.height == 0 || area.width == 0 {
        return Vec::new();
    }
    let needed = count.saturating_mul(2).saturating_sub(1);
    let slack = usize::from(area.width).saturating_sub(needed);
    let start = usize::from(area.x) + slack / 2;
    let right = usize::from(area.right());

    (0..count)
        .map(|i| start + i * 2)
        .take_while(|x| *x < right)
        .filter_map(|x| u16::try_from(x).ok())
        .map(|x| Rect::new(x, area.y, 1, 1))
        .collect()
}

/// One dot per slide; the active slide's dot is filled.
pub struct Indicators<'a> {
    indicators: &'a [bool],
    focused: Option<usize>,
}

impl<'a> Indicators<'a> {
    pub fn new(indicators: &'a [bool]) -> Self {
        Self {
            indicators,
            focused: None,
        }
    }

    /// Highlight the keyboard-focused indicator (1-based)
    pub fn focused(mut self, focused: Option<usize>) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for Indicators<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rects = dot_rects(area, self.indicators.len());
        for (i, (rect, active)) in rects.iter().zip(self.indicators).enumerate() {
            let (symbol, style) = if *active {
                (ACTIVE_DOT, styles::accent_bold())
            } else {
                (DOT, styles::text_muted())
            };
            let style = if self.focused == Some(i + 1) {
                styles::focused_selected().add_modifier(Modifier::UNDERLINED)
            } else {
                style
            };
            buf.set_string(rect.x, rect.y, symbol, style);
        }
    }
}
