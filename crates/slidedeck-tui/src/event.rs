//! Terminal event polling
//!
//! Keys become [`Message::Key`]. Mouse presses and releases become pointer
//! messages in pixels, so a drag across the slide is judged by the same swipe
//! threshold as a touch gesture. A press and release on the same indicator or
//! navigation button is a click on it.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use slidedeck_app::config::NavigationSettings;
use slidedeck_app::message::Message;
use slidedeck_app::InputKey;
use slidedeck_core::prelude::*;

use crate::layout::ScreenAreas;
use crate::widgets::{button_rects, dot_rects};

/// Rows scrolled per mouse wheel notch
const WHEEL_ROWS: u16 = 3;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Something clickable on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Indicator dot for a slide (1-based)
    Indicator(usize),
    Previous,
    Next,
}

impl ClickTarget {
    fn message(self) -> Message {
        match self {
            ClickTarget::Indicator(index) => Message::IndicatorClicked(index),
            ClickTarget::Previous => Message::PreviousSlide,
            ClickTarget::Next => Message::NextSlide,
        }
    }
}

/// Locate the click target under a cell of the last-drawn layout
pub fn target_at(areas: &ScreenAreas, total: usize, column: u16, row: u16) -> Option<ClickTarget> {
    let position = Position::new(column, row);

    if let Some(indicators) = areas.indicators {
        let hit = dot_rects(indicators, total)
            .iter()
            .position(|r| r.contains(position));
        if let Some(i) = hit {
            return Some(ClickTarget::Indicator(i + 1));
        }
    }

    if let Some(nav) = areas.nav {
        let (previous, next) = button_rects(nav);
        if previous.contains(position) {
            return Some(ClickTarget::Previous);
        }
        if next.contains(position) {
            return Some(ClickTarget::Next);
        }
    }

    None
}

/// Turns mouse events into pointer and click messages.
#[derive(Debug, Clone)]
pub struct PointerRouter {
    cell_width: f32,
    cell_height: f32,
    pressed_on: Option<ClickTarget>,
}

impl PointerRouter {
    pub fn new(settings: &NavigationSettings) -> Self {
        Self {
            cell_width: settings.cell_width_px,
            cell_height: settings.cell_height_px,
            pressed_on: None,
        }
    }

    /// Pixel position of a cell's top-left corner
    fn to_pixels(&self, column: u16, row: u16) -> (f32, f32) {
        (
            f32::from(column) * self.cell_width,
            f32::from(row) * self.cell_height,
        )
    }

    pub fn route(&mut self, mouse: MouseEvent, areas: &ScreenAreas, total: usize) -> Option<Message> {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed_on = target_at(areas, total, mouse.column, mouse.row);
                let (x, y) = self.to_pixels(mouse.column, mouse.row);
                Some(Message::PointerDown { x, y })
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let pressed_on = self.pressed_on.take();
                let released_on = target_at(areas, total, mouse.column, mouse.row);
                match (pressed_on, released_on) {
                    (Some(a), Some(b)) if a == b => Some(a.message()),
                    _ => {
                        let (x, y) = self.to_pixels(mouse.column, mouse.row);
                        Some(Message::PointerUp { x, y })
                    }
                }
            }
            MouseEventKind::ScrollDown if contains(areas.slide, mouse) => {
                Some(Message::ScrollContentDown(WHEEL_ROWS))
            }
            MouseEventKind::ScrollUp if contains(areas.slide, mouse) => {
                Some(Message::ScrollContentUp(WHEEL_ROWS))
            }
            _ => None,
        }
    }
}

fn contains(area: Rect, mouse: MouseEvent) -> bool {
    area.contains(Position::new(mouse.column, mouse.row))
}

/// Poll for terminal events with timeout
pub fn poll(router: &mut PointerRouter, areas: &ScreenAreas, total: usize) -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) if key.kind == event::KeyEventKind::Press => {
                Ok(key_event_to_input(key).map(Message::Key))
            }
            Event::Mouse(mouse) => Ok(router.route(mouse, areas, total)),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for deferred effects
        Ok(Some(Message::Tick))
    }
}
