//! slidedeck-app - Application state and orchestration for SlideDeck
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management:
//! input adapters turn keys and pointer gestures into [`Message`]s, [`handler::update`]
//! drives the deck, and the render-observer pipeline fans committed transitions out
//! to the live region, the fragment history and event subscribers. The [`Engine`]
//! owns the message channel, the event broadcaster and the auto-advance timer.

pub mod auto_advance;
pub mod config;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use handler::{RenderStage, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::AppState;
