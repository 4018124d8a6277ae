//! Headless mode - JSON event output for scripting and tests
//!
//! Instead of drawing the deck, headless mode reads commands from stdin and
//! writes structured JSON events to stdout, one per line (NDJSON).
//!
//! # Example Output
//!
//! ```json
//! {"event":"started","deck":"talk.md","current":1,"total":6,"fragment":"slide-1","timestamp":1704700001000}
//! {"event":"slide_changed","from":1,"current":2,"total":6,"fragment":"slide-2","timestamp":1704700002000}
//! ```

pub mod runner;

use chrono::Utc;
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

use slidedeck_app::AppState;
use slidedeck_core::DeckEvent;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Deck opened and navigation is ready
    Started {
        deck: String,
        current: usize,
        total: usize,
        fragment: String,
        timestamp: i64,
    },

    /// A transition was committed
    SlideChanged {
        from: usize,
        current: usize,
        total: usize,
        fragment: String,
        timestamp: i64,
    },

    PresentationModeChanged { active: bool, timestamp: i64 },

    AutoAdvanceChanged { running: bool, timestamp: i64 },

    /// Reply to the `status` command
    Status {
        current: usize,
        total: usize,
        percentage: u8,
        fragment: String,
        announcement: Option<String>,
        presentation: bool,
        auto_advance: bool,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    /// `None` when the deck has no slides.
    pub fn started(state: &AppState) -> Option<Self> {
        let deck = state.deck.as_ref()?;
        Some(Self::Started {
            deck: state.document.name.clone(),
            current: deck.current(),
            total: deck.total(),
            fragment: state.history.current().to_string(),
            timestamp: Self::now(),
        })
    }

    pub fn status(state: &AppState) -> Option<Self> {
        let progress = state.progress()?;
        Some(Self::Status {
            current: progress.current,
            total: progress.total,
            percentage: progress.percentage,
            fragment: state.history.current().to_string(),
            announcement: state.live_region.text().map(str::to_string),
            presentation: state.presentation_mode,
            auto_advance: state.auto_advance,
            timestamp: Self::now(),
        })
    }

    /// Translate a broadcast deck event, attaching the fragment the
    /// location shows after the commit.
    pub fn from_deck_event(event: DeckEvent, fragment: &str) -> Self {
        match event {
            DeckEvent::SlideChanged {
                from,
                current,
                total,
            } => Self::SlideChanged {
                from,
                current,
                total,
                fragment: fragment.to_string(),
                timestamp: Self::now(),
            },
            DeckEvent::PresentationModeChanged { active } => Self::PresentationModeChanged {
                active,
                timestamp: Self::now(),
            },
            DeckEvent::AutoAdvanceChanged { running } => Self::AutoAdvanceChanged {
                running,
                timestamp: Self::now(),
            },
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }
}
