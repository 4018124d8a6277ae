//! # slidedeck-core - Core Domain Types
//!
//! Foundation crate for SlideDeck. Provides the slide-index state machine,
//! its view projection, fragment parsing, swipe classification, the live
//! region announcer, deck document parsing, and error handling.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### State (`deck`)
//! - [`DeckState`] - Current/total slide pair with the `1 <= current <= total` invariant
//! - [`Deck`] - Transition API (`goto`, `next`, `previous`) that re-projects the view on commit
//! - [`SlideChange`] - Result of a committed transition
//!
//! ### Views (`view`)
//! - [`DeckView`] - Pure projection of a [`DeckState`] onto every dependent view
//! - [`SlidePosition`] - Ternary slide classification (past / active / upcoming)
//!
//! ### Fragments (`fragment`)
//! - [`FragmentScheme`] - `slide-<n>` or named-tab fragment grammar
//! - [`FragmentHistory`] - Replace/push/back/forward fragment location
//!
//! ### Input (`swipe`)
//! - [`SwipeTracker`] - Press/release pointer tracking with swipe classification
//! - [`ScrollExtent`] - Inner content scroll boundaries used to gate swipes
//!
//! ### Accessibility (`announce`)
//! - [`LiveRegion`] - Single-slot announcement with timed removal
//!
//! ### Documents (`document`)
//! - [`Document`], [`Slide`] - Parsed deck source
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use slidedeck_core::prelude::*;
//! ```

pub mod announce;
pub mod deck;
pub mod document;
pub mod error;
pub mod events;
pub mod fragment;
pub mod logging;
pub mod swipe;
pub mod view;

/// Prelude for common imports used throughout all SlideDeck crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use announce::{Announcement, LiveRegion, DEFAULT_ANNOUNCEMENT_TTL};
pub use deck::{Deck, DeckState, Progress, SlideChange};
pub use document::{Document, Slide};
pub use error::{Error, Result, ResultExt};
pub use events::DeckEvent;
pub use fragment::{FragmentHistory, FragmentScheme};
pub use swipe::{
    Point, ScrollExtent, SwipeDirection, SwipeGesture, SwipeTracker, SWIPE_THRESHOLD_PX,
};
pub use view::{DeckView, NavState, SlidePosition};
