//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use slidedeck_core::{Deck, Point, SlideChange};
use tracing::{debug, info};

use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

use super::{keys::handle_key, pipeline, pointer, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    let now = Instant::now();

    // Any interaction other than the toggle itself cancels auto-advance
    let interrupt = state.auto_advance
        && message.is_user_interaction()
        && handle_interaction_key(state, &message) != Some(Message::ToggleAutoAdvance);

    let result = dispatch(state, message, now);

    if interrupt {
        info!("Auto-advance stopped by user interaction");
        state.set_auto_advance(false);
        return result.with_action(UpdateAction::StopAutoAdvance);
    }
    result
}

fn handle_interaction_key(state: &AppState, message: &Message) -> Option<Message> {
    match message {
        Message::Key(key) => handle_key(state, key.clone()),
        _ => None,
    }
}

fn dispatch(state: &mut AppState, message: Message, now: Instant) -> UpdateResult {
    match message {
        Message::Key(key) => UpdateResult::from(handle_key(state, key)),

        Message::Tick => {
            state.tick(now);
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Transition Requests
        // ─────────────────────────────────────────────────────────
        Message::NextSlide => navigate(state, now, Deck::next),
        Message::PreviousSlide => navigate(state, now, Deck::previous),
        Message::FirstSlide => navigate(state, now, Deck::first),
        Message::LastSlide => navigate(state, now, Deck::last),
        Message::GotoSlide(n) => navigate(state, now, |deck| deck.goto(n)),
        Message::GotoSlideRaw(raw) => navigate(state, now, |deck| deck.goto_raw(&raw)),

        // ─────────────────────────────────────────────────────────
        // Pointer Messages
        // ─────────────────────────────────────────────────────────
        Message::PointerDown { x, y } => {
            state.swipe.press(Point::new(x, y));
            UpdateResult::none()
        }

        Message::PointerUp { x, y } => {
            UpdateResult::from(pointer::handle_release(state, Point::new(x, y)))
        }

        // Clicks navigate without taking keyboard focus
        Message::IndicatorClicked(index) => UpdateResult::message(Message::GotoSlide(index)),

        // ─────────────────────────────────────────────────────────
        // Indicator Focus
        // ─────────────────────────────────────────────────────────
        Message::FocusNextIndicator => {
            let total = state.total_slides();
            if total > 0 && state.settings.ui.show_indicators {
                state.focused_indicator = Some(match state.focused_indicator {
                    Some(i) if i < total => i + 1,
                    _ => 1,
                });
            }
            UpdateResult::none()
        }

        Message::FocusPreviousIndicator => {
            let total = state.total_slides();
            if total > 0 && state.settings.ui.show_indicators {
                state.focused_indicator = Some(match state.focused_indicator {
                    Some(i) if i > 1 => i - 1,
                    _ => total,
                });
            }
            UpdateResult::none()
        }

        Message::ClearFocus => {
            state.focused_indicator = None;
            UpdateResult::none()
        }

        Message::ActivateFocusedIndicator => match state.focused_indicator {
            Some(index) => UpdateResult::message(Message::GotoSlide(index)),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // Slide Content Scrolling
        // ─────────────────────────────────────────────────────────
        Message::ScrollContentDown(rows) => {
            if let Some(current) = state.current_slide() {
                state.scroll.scroll_down(current, rows);
            }
            UpdateResult::none()
        }

        Message::ScrollContentUp(rows) => {
            if let Some(current) = state.current_slide() {
                state.scroll.scroll_up(current, rows);
            }
            UpdateResult::none()
        }

        Message::ContentViewport(rows) => {
            if state.scroll.viewport() != rows {
                state.scroll.set_viewport(rows);
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Presentation Mode
        // ─────────────────────────────────────────────────────────
        Message::EnterPresentationMode => {
            state.set_presentation_mode(true);
            UpdateResult::none()
        }

        Message::ExitPresentationMode => {
            state.set_presentation_mode(false);
            UpdateResult::none()
        }

        Message::TogglePresentationMode => {
            let active = !state.presentation_mode;
            state.set_presentation_mode(active);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Auto-advance
        // ─────────────────────────────────────────────────────────
        Message::StartAutoAdvance => {
            if state.deck.is_none() {
                return UpdateResult::none();
            }
            let interval = state.settings.auto_advance.interval();
            info!("Auto-advance started ({:?})", interval);
            state.set_auto_advance(true);
            UpdateResult::action(UpdateAction::StartAutoAdvance { interval })
        }

        Message::StopAutoAdvance => {
            if !state.auto_advance {
                return UpdateResult::none();
            }
            info!("Auto-advance stopped");
            state.set_auto_advance(false);
            UpdateResult::action(UpdateAction::StopAutoAdvance)
        }

        Message::ToggleAutoAdvance => {
            if state.auto_advance {
                UpdateResult::message(Message::StopAutoAdvance)
            } else {
                UpdateResult::message(Message::StartAutoAdvance)
            }
        }

        Message::AutoAdvanceTick => {
            if !state.auto_advance {
                debug!("Ignoring auto-advance tick; timer not running");
                return UpdateResult::none();
            }
            let at_last = state.deck.as_ref().map_or(true, |d| d.state().is_last());
            if at_last {
                UpdateResult::message(Message::StopAutoAdvance)
            } else {
                navigate(state, now, Deck::next)
            }
        }

        // ─────────────────────────────────────────────────────────
        // Fragment Location
        // ─────────────────────────────────────────────────────────
        Message::OpenJumpPrompt => {
            if state.ui_mode == UiMode::Normal {
                state.ui_mode = UiMode::JumpInput;
                state.jump_query.clear();
            }
            UpdateResult::none()
        }

        Message::JumpInput { text } => {
            state.jump_query = text;
            UpdateResult::none()
        }

        Message::SubmitJump => {
            state.ui_mode = UiMode::Normal;
            let query = std::mem::take(&mut state.jump_query);
            let query = query.trim();
            if query.is_empty() {
                return UpdateResult::none();
            }
            // A bare number is shorthand for that slide's fragment
            let fragment = match query.parse::<usize>() {
                Ok(n) => state.scheme.format(n),
                Err(_) => query.to_string(),
            };
            UpdateResult::message(Message::NavigateFragment(fragment))
        }

        Message::CancelJump => {
            state.ui_mode = UiMode::Normal;
            state.jump_query.clear();
            UpdateResult::none()
        }

        Message::NavigateFragment(fragment) => {
            let fragment = fragment.trim().trim_start_matches('#').to_string();
            if fragment == state.history.current() {
                return UpdateResult::none();
            }
            if state.scheme.parse(&fragment, state.total_slides()).is_none() {
                debug!("Fragment #{} does not name a slide; ignored", fragment);
                return UpdateResult::none();
            }
            state.history.push(fragment);
            UpdateResult::message(Message::FragmentNavigated)
        }

        Message::HistoryBack => match state.history.back() {
            Some(_) => UpdateResult::message(Message::FragmentNavigated),
            None => UpdateResult::none(),
        },

        Message::HistoryForward => match state.history.forward() {
            Some(_) => UpdateResult::message(Message::FragmentNavigated),
            None => UpdateResult::none(),
        },

        Message::FragmentNavigated => {
            let total = state.total_slides();
            match state.scheme.parse(state.history.current(), total) {
                Some(n) => navigate(state, now, |deck| deck.goto(n)),
                None => {
                    debug!(
                        "Fragment #{} does not name a slide; ignored",
                        state.history.current()
                    );
                    UpdateResult::none()
                }
            }
        }
    }
}

/// Apply a transition to the deck and, when it commits, run the render
/// pipeline.
fn navigate(
    state: &mut AppState,
    now: Instant,
    transition: impl FnOnce(&mut Deck) -> Option<SlideChange>,
) -> UpdateResult {
    let Some(deck) = state.deck.as_mut() else {
        return UpdateResult::none();
    };
    if let Some(change) = transition(deck) {
        pipeline::run(state, &change, now);
    }
    UpdateResult::none()
}
