//! Slide-index state machine
//!
//! [`DeckState`] holds the `(current, total)` pair and enforces
//! `1 <= current <= total`. [`Deck`] wraps it with the transition API and
//! owns the [`DeckView`] projection, recomputing it in full exactly once per
//! committed transition.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::view::DeckView;

/// Current slide (1-based) and fixed slide count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeckState {
    current: usize,
    total: usize,
}

impl DeckState {
    /// Create a state positioned on the first slide.
    pub fn new(total: usize) -> Result<Self> {
        if total == 0 {
            return Err(Error::EmptyDeck);
        }
        Ok(Self { current: 1, total })
    }

    /// Create a state positioned on `start`, falling back to the first slide
    /// when `start` is out of range.
    pub fn seeded(total: usize, start: Option<usize>) -> Result<Self> {
        let mut state = Self::new(total)?;
        if let Some(n) = start.filter(|n| state.contains(*n)) {
            state.current = n;
        }
        Ok(state)
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    /// Whether `n` is a valid 1-based slide index for this deck.
    pub fn contains(&self, n: usize) -> bool {
        (1..=self.total).contains(&n)
    }

    /// Whether moving to `n` would be a committed transition.
    fn accepts(&self, n: usize) -> bool {
        self.contains(n) && n != self.current
    }

    pub fn progress(&self) -> Progress {
        let percentage = ((self.current as f64 / self.total as f64) * 100.0).round() as u8;
        Progress {
            current: self.current,
            total: self.total,
            percentage,
        }
    }
}

/// Position summary for status displays and headless `status` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percentage: u8,
}

/// A committed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideChange {
    pub from: usize,
    pub current: usize,
    pub total: usize,
}

/// Deck controller: state plus its projected view.
#[derive(Debug, Clone)]
pub struct Deck {
    state: DeckState,
    view: DeckView,
    render_passes: u64,
}

impl Deck {
    pub fn new(total: usize) -> Result<Self> {
        Ok(Self::from_state(DeckState::new(total)?))
    }

    /// Create a deck starting at `start` when it is a valid index.
    pub fn with_start(total: usize, start: Option<usize>) -> Result<Self> {
        Ok(Self::from_state(DeckState::seeded(total, start)?))
    }

    fn from_state(state: DeckState) -> Self {
        Self {
            view: DeckView::project(&state),
            state,
            render_passes: 1,
        }
    }

    pub fn state(&self) -> &DeckState {
        &self.state
    }

    pub fn current(&self) -> usize {
        self.state.current
    }

    pub fn total(&self) -> usize {
        self.state.total
    }

    pub fn view(&self) -> &DeckView {
        &self.view
    }

    /// Number of full projections performed, including the initial one.
    pub fn render_passes(&self) -> u64 {
        self.render_passes
    }

    /// Move to slide `n`. Out-of-range or same-slide requests are ignored.
    pub fn goto(&mut self, n: usize) -> Option<SlideChange> {
        if !self.state.accepts(n) {
            tracing::debug!(
                "Ignoring transition request to {} (current={}, total={})",
                n,
                self.state.current,
                self.state.total
            );
            return None;
        }
        Some(self.commit(n))
    }

    /// Parse `raw` as a slide number and move there; anything that is not a
    /// non-negative integer is ignored.
    pub fn goto_raw(&mut self, raw: &str) -> Option<SlideChange> {
        match raw.trim().parse::<usize>() {
            Ok(n) => self.goto(n),
            Err(_) => {
                tracing::debug!("Ignoring non-integer slide request {:?}", raw);
                None
            }
        }
    }

    pub fn next(&mut self) -> Option<SlideChange> {
        self.goto(self.state.current + 1)
    }

    pub fn previous(&mut self) -> Option<SlideChange> {
        // current >= 1, so goto(0) is the boundary no-op
        self.goto(self.state.current - 1)
    }

    pub fn first(&mut self) -> Option<SlideChange> {
        self.goto(1)
    }

    pub fn last(&mut self) -> Option<SlideChange> {
        self.goto(self.state.total)
    }

    fn commit(&mut self, n: usize) -> SlideChange {
        let from = self.state.current;
        self.state.current = n;
        self.render();
        SlideChange {
            from,
            current: n,
            total: self.state.total,
        }
    }

    /// Re-project every view from the current state.
    pub fn render(&mut self) -> &DeckView {
        self.view = DeckView::project(&self.state);
        self.render_passes += 1;
        &self.view
    }
}
