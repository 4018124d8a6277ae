//! Handler module - TEA update function and input adapters
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes
//! - `pointer`: Swipe release handling
//! - `pipeline`: Ordered render observers run after every committed transition

pub(crate) mod keys;
pub mod pipeline;
pub(crate) mod pointer;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use pipeline::RenderStage;
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Start the periodic auto-advance timer, replacing any running one
    StartAutoAdvance { interval: Duration },

    /// Cancel the auto-advance timer
    StopAutoAdvance,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    pub fn with_action(mut self, action: UpdateAction) -> Self {
        self.action = Some(action);
        self
    }
}

impl From<Option<Message>> for UpdateResult {
    fn from(message: Option<Message>) -> Self {
        Self {
            message,
            action: None,
        }
    }
}
