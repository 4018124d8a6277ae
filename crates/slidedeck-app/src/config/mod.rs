//! Configuration file parsing for SlideDeck
//!
//! Supports:
//! - `.slidedeck/config.toml` next to the deck - presenter settings

pub mod settings;
pub mod types;

pub use settings::{load_settings, validate_settings};
pub use types::*;
