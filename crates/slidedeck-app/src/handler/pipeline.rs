//! Render-observer pipeline
//!
//! After a committed transition the deck has already re-projected its view.
//! The stages below then run once each, in this fixed order. A transition
//! request that was ignored never reaches the pipeline.

use std::time::Instant;

use slidedeck_core::{DeckEvent, LiveRegion, SlideChange};
use tracing::debug;

use crate::config::Settings;
use crate::state::{AppState, PendingScrollReset};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    /// Post the new position to the live region
    Announce,
    /// Replace the current fragment entry
    SyncFragment,
    /// Schedule the entered slide's content to scroll back to the top
    ResetScroll,
    /// Queue `DeckEvent::SlideChanged` for subscribers
    Notify,
}

pub const PIPELINE: [RenderStage; 4] = [
    RenderStage::Announce,
    RenderStage::SyncFragment,
    RenderStage::ResetScroll,
    RenderStage::Notify,
];

impl RenderStage {
    pub fn enabled(&self, settings: &Settings) -> bool {
        match self {
            RenderStage::Announce => settings.accessibility.announce,
            RenderStage::SyncFragment => settings.behavior.sync_fragment,
            RenderStage::ResetScroll | RenderStage::Notify => true,
        }
    }
}

/// Run every enabled stage for `change`. Returns the stages that ran.
pub fn run(state: &mut AppState, change: &SlideChange, now: Instant) -> Vec<RenderStage> {
    let mut ran = Vec::with_capacity(PIPELINE.len());
    for stage in PIPELINE {
        if !stage.enabled(&state.settings) {
            continue;
        }
        match stage {
            RenderStage::Announce => announce(state, change, now),
            RenderStage::SyncFragment => sync_fragment(state, change),
            RenderStage::ResetScroll => reset_scroll(state, change, now),
            RenderStage::Notify => notify(state, change),
        }
        ran.push(stage);
    }
    debug!(
        "Slide {} -> {} of {}; ran {:?}",
        change.from, change.current, change.total, ran
    );
    ran
}

fn announce(state: &mut AppState, change: &SlideChange, now: Instant) {
    let text = LiveRegion::compose(change, state.document.title(change.current));
    state.live_region.announce(text, now);
}

fn sync_fragment(state: &mut AppState, change: &SlideChange) {
    let fragment = state.scheme.format(change.current);
    state.history.replace(fragment);
}

fn reset_scroll(state: &mut AppState, change: &SlideChange, now: Instant) {
    if state.scroll.extent(change.current).is_scrollable() {
        state.scroll_reset = Some(PendingScrollReset {
            slide: change.current,
            due: now + state.settings.behavior.scroll_reset_delay(),
        });
    }
}

fn notify(state: &mut AppState, change: &SlideChange) {
    state.pending_events.push(DeckEvent::from(*change));
}
