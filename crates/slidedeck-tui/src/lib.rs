//! slidedeck-tui - Terminal UI for SlideDeck
//!
//! This crate provides the ratatui-based terminal interface. It creates an Engine
//! from slidedeck-app and adds terminal rendering, keyboard and mouse polling, and
//! the slide, indicator, navigation and live-region widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
