//! Main render/view function (View in TEA pattern)


use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use slidedeck_app::state::{AppState, UiMode};

use crate::layout::{self, Chrome, ScreenAreas};
use crate::theme::{palette, styles};
use crate::widgets;

/// Layout for the current frame size and state
pub fn screen_areas(area: Rect, state: &AppState) -> ScreenAreas {
    layout::create(area, Chrome::for_state(state))
}

/// Render the complete UI (View function in TEA)
///
/// Only the active slide is drawn; the indicators, buttons, counter and live
/// region all read from the deck's projected view.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = screen_areas(area, state);
    let ui = &state.settings.ui;

    if let Some(header_area) = areas.header {
        let header = widgets::DeckHeader::new(&state.document.name)
            .fragment(
                ui.show_fragment
                    .then(|| state.history.current())
                    .filter(|_| state.deck.is_some()),
            )
            .progress(state.progress())
            .auto_advance(state.auto_advance);
        frame.render_widget(header, header_area);
    }

    let Some(deck) = &state.deck else {
        render_unavailable(frame, areas.slide, &state.document.name);
        frame.render_widget(widgets::LiveRegionLine::new(None).hints(false), areas.live);
        return;
    };
    let deck_view = deck.view();

    if let Some(index) = deck_view.active_slide() {
        let panel = widgets::SlidePanel::new(state.document.slide(index), index)
            .offset(state.scroll.offset(index))
            .focused(state.presentation_mode);
        frame.render_widget(panel, areas.slide);
    }

    if let Some(indicators_area) = areas.indicators {
        let indicators =
            widgets::Indicators::new(&deck_view.indicators).focused(state.focused_indicator);
        frame.render_widget(indicators, indicators_area);
    }

    if let Some(nav_area) = areas.nav {
        let nav = widgets::NavBar::new(deck_view.nav)
            .counter(ui.show_counter.then_some(deck_view.counter.as_str()))
            .show_buttons(ui.show_nav_buttons);
        frame.render_widget(nav, nav_area);
    }

    frame.render_widget(
        widgets::LiveRegionLine::new(state.live_region.text()).hints(!state.presentation_mode),
        areas.live,
    );

    if state.ui_mode == UiMode::JumpInput {
        let prompt_area = widgets::JumpPrompt::area(areas.slide);
        frame.render_widget(widgets::JumpPrompt::new(&state.jump_query), prompt_area);
    }
}

/// Shown in place of the slide when the deck has nothing to present
fn render_unavailable(frame: &mut Frame, area: Rect, name: &str) {
    let block = styles::glass_block(false);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            format!("{} has no slides", name),
            styles::status_red(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("q", styles::keybinding()),
            Span::styled(" quit", styles::text_muted()),
        ]),
    ];
    let top = inner.height.saturating_sub(3) / 2;
    let text_area = Rect::new(inner.x, inner.y + top, inner.width, inner.height - top);
    frame.render_widget(Paragraph::new(lines).centered(), text_area);
}
