//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::JumpInput => handle_key_jump_input(state, key),
        UiMode::Unavailable => handle_key_unavailable(key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Indicator Focus
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::FocusNextIndicator),
        InputKey::BackTab => Some(Message::FocusPreviousIndicator),
        InputKey::Enter if state.focused_indicator.is_some() => {
            Some(Message::ActivateFocusedIndicator)
        }
        InputKey::Char(' ') if state.focused_indicator.is_some() => {
            Some(Message::ActivateFocusedIndicator)
        }

        // ─────────────────────────────────────────────────────────
        // Slide Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Right | InputKey::Down | InputKey::Char(' ') => Some(Message::NextSlide),
        InputKey::Left | InputKey::Up => Some(Message::PreviousSlide),
        InputKey::Home => Some(Message::FirstSlide),
        InputKey::End => Some(Message::LastSlide),

        // Esc leaves presentation mode first, then drops indicator focus
        InputKey::Esc if state.presentation_mode => Some(Message::ExitPresentationMode),
        InputKey::Esc if state.focused_indicator.is_some() => Some(Message::ClearFocus),

        // ─────────────────────────────────────────────────────────
        // Content Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Char('j') => Some(Message::ScrollContentDown(1)),
        InputKey::Char('k') => Some(Message::ScrollContentUp(1)),
        InputKey::PageDown => Some(Message::ScrollContentDown(page_rows(state))),
        InputKey::PageUp => Some(Message::ScrollContentUp(page_rows(state))),

        // ─────────────────────────────────────────────────────────
        // Modes
        // ─────────────────────────────────────────────────────────
        InputKey::Char('f') => Some(Message::TogglePresentationMode),
        InputKey::Char('a') => Some(Message::ToggleAutoAdvance),

        // ─────────────────────────────────────────────────────────
        // Fragment Location
        // ─────────────────────────────────────────────────────────
        InputKey::Char('g') | InputKey::Char('#') => Some(Message::OpenJumpPrompt),
        InputKey::Char('[') => Some(Message::HistoryBack),
        InputKey::Char(']') => Some(Message::HistoryForward),

        // Digits 1..=9 jump straight to a slide that exists
        key => key
            .digit()
            .filter(|n| (1..=state.total_slides().min(9)).contains(n))
            .map(Message::GotoSlide),
    }
}

/// Handle key events while the jump prompt has focus
fn handle_key_jump_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Esc => Some(Message::CancelJump),
        InputKey::Enter => Some(Message::SubmitJump),
        InputKey::Backspace => {
            let mut text = state.jump_query.clone();
            text.pop();
            Some(Message::JumpInput { text })
        }
        InputKey::CharCtrl('u') => Some(Message::JumpInput {
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut text = state.jump_query.clone();
            text.push(c);
            Some(Message::JumpInput { text })
        }
        _ => None,
    }
}

/// Handle key events when the deck could not be initialized
fn handle_key_unavailable(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn page_rows(state: &AppState) -> u16 {
    state.scroll.viewport().saturating_sub(1).max(1)
}
