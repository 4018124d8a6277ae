//! Events published to external listeners

use serde::Serialize;

use crate::deck::SlideChange;

/// Notifications other code may subscribe to. `SlideChanged` is emitted once
/// per committed transition and never for ignored requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeckEvent {
    SlideChanged {
        from: usize,
        current: usize,
        total: usize,
    },

    PresentationModeChanged { active: bool },

    AutoAdvanceChanged { running: bool },
}

impl From<SlideChange> for DeckEvent {
    fn from(change: SlideChange) -> Self {
        DeckEvent::SlideChanged {
            from: change.from,
            current: change.current,
            total: change.total,
        }
    }
}
