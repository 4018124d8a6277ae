//! Live region announcements
//!
//! Holds at most one pending announcement. A newer announcement replaces
//! the pending one instead of queueing behind it, and the text is cleared
//! once its time-to-live has passed.

use std::time::{Duration, Instant};

use crate::deck::SlideChange;

/// How long an announcement stays in the live region.
pub const DEFAULT_ANNOUNCEMENT_TTL: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub text: String,
    pub posted_at: Instant,
}

#[derive(Debug, Clone)]
pub struct LiveRegion {
    current: Option<Announcement>,
    ttl: Duration,
    posted: u64,
}

impl LiveRegion {
    pub fn new(ttl: Duration) -> Self {
        Self {
            current: None,
            ttl,
            posted: 0,
        }
    }

    /// Text for a committed transition, e.g. `Slide 3 of 6: Pricing`.
    pub fn compose(change: &SlideChange, title: Option<&str>) -> String {
        match title.map(str::trim).filter(|t| !t.is_empty()) {
            Some(title) => format!("Slide {} of {}: {}", change.current, change.total, title),
            None => format!("Slide {} of {}", change.current, change.total),
        }
    }

    pub fn announce(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some(Announcement {
            text: text.into(),
            posted_at: now,
        });
        self.posted += 1;
    }

    /// Drop the announcement once its TTL has elapsed. Returns whether
    /// anything was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let due = self
            .current
            .as_ref()
            .is_some_and(|a| now.saturating_duration_since(a.posted_at) >= self.ttl);
        if due {
            self.current = None;
        }
        due
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.text.as_str())
    }

    pub fn announcement(&self) -> Option<&Announcement> {
        self.current.as_ref()
    }

    /// Total announcements posted since creation.
    pub fn posted(&self) -> u64 {
        self.posted
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for LiveRegion {
    fn default() -> Self {
        Self::new(DEFAULT_ANNOUNCEMENT_TTL)
    }
}
