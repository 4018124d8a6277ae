//! Widget components for the presenter

mod header;
mod indicators;
mod jump_prompt;
mod live_region;
mod nav_bar;
mod slide_panel;

pub use header::DeckHeader;
pub use indicators::{dot_rects, Indicators};
pub use jump_prompt::JumpPrompt;
pub use live_region::LiveRegionLine;
pub use nav_bar::{button_rects, NavBar};
pub use slide_panel::SlidePanel;
