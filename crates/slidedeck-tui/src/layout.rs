//! Screen layout definitions for the TUI
//!
//! The chrome around the slide (header, indicators, navigation bar) is
//! hidden in presentation mode. The live-region row is always present.

use ratatui::layout::{Constraint, Layout, Rect};
use slidedeck_app::AppState;

/// Which parts of the chrome to lay out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub header: bool,
    pub indicators: bool,
    pub nav: bool,
}

impl Chrome {
    pub fn for_state(state: &AppState) -> Self {
        let ui = &state.settings.ui;
        let chrome = !state.presentation_mode && state.deck.is_some();
        Self {
            header: !state.presentation_mode,
            indicators: chrome && ui.show_indicators,
            nav: chrome && (ui.show_nav_buttons || ui.show_counter),
        }
    }

    /// Presentation mode: nothing but the slide
    pub fn hidden() -> Self {
        Self {
            header: false,
            indicators: false,
            nav: false,
        }
    }
}

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Deck name, fragment and status badges
    pub header: Option<Rect>,

    /// The active slide
    pub slide: Rect,

    /// Slide indicator dots
    pub indicators: Option<Rect>,

    /// Previous/next buttons and the counter
    pub nav: Option<Rect>,

    /// Announcement / key hint row
    pub live: Rect,
}

impl ScreenAreas {
    /// Rows available to the slide body inside its border
    pub fn slide_viewport(&self) -> u16 {
        self.slide.height.saturating_sub(2)
    }
}

/// Create the main screen layout
pub fn create(area: Rect, chrome: Chrome) -> ScreenAreas {
    let mut constraints = Vec::with_capacity(5);
    if chrome.header {
        constraints.push(Constraint::Length(3)); // Top border + title row + bottom border
    }
    constraints.push(Constraint::Min(3)); // Slide (glass container)
    if chrome.indicators {
        constraints.push(Constraint::Length(1));
    }
    if chrome.nav {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1)); // Live region

    let chunks = Layout::vertical(constraints).split(area);
    let mut chunks = chunks.iter().copied();

    // Every push above has a matching chunk
    let header = chrome.header.then(|| chunks.next()).flatten();
    let slide = chunks.next().unwrap_or_default();
    let indicators = chrome.indicators.then(|| chunks.next()).flatten();
    let nav = chrome.nav.then(|| chunks.next()).flatten();
    let live = chunks.next().unwrap_or_default();

    ScreenAreas {
        header,
        slide,
        indicators,
        nav,
        live,
    }
}
