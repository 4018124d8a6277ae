//! Pointer/touch swipe classification
//!
//! A release counts as a horizontal swipe only when the horizontal travel
//! dominates the vertical travel and exceeds the distance threshold. When
//! the active slide has its own scrollable content, a swipe is honored only
//! once that content sits at the boundary in the swipe's direction.

use serde::Serialize;

/// Minimum horizontal travel, in device-independent pixels.
pub const SWIPE_THRESHOLD_PX: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Finger/pointer travel direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Travel toward negative x; advances the deck.
    Left,
    /// Travel toward positive x; goes back.
    Right,
}

/// Travel between press and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeGesture {
    pub dx: f32,
    pub dy: f32,
}

impl SwipeGesture {
    pub fn between(start: Point, end: Point) -> Self {
        Self {
            dx: end.x - start.x,
            dy: end.y - start.y,
        }
    }

    pub fn classify(&self, threshold: f32) -> Option<SwipeDirection> {
        if self.dx.abs() > self.dy.abs() && self.dx.abs() > threshold {
            Some(if self.dx < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            })
        } else {
            None
        }
    }
}

/// Remembers the press point until the matching release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeTracker {
    start: Option<Point>,
    threshold: f32,
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn press(&mut self, at: Point) {
        self.start = Some(at);
    }

    /// Finish the gesture. A release without a press yields nothing.
    pub fn release(&mut self, at: Point) -> Option<SwipeDirection> {
        let start = self.start.take()?;
        SwipeGesture::between(start, at).classify(self.threshold)
    }

    pub fn is_pressed(&self) -> bool {
        self.start.is_some()
    }
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

/// Scroll position of a slide's inner content, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollExtent {
    pub offset: u16,
    pub content: u16,
    pub viewport: u16,
}

impl ScrollExtent {
    pub fn new(offset: u16, content: u16, viewport: u16) -> Self {
        Self {
            offset,
            content,
            viewport,
        }
    }

    pub fn is_scrollable(&self) -> bool {
        self.content > self.viewport
    }

    pub fn max_offset(&self) -> u16 {
        self.content.saturating_sub(self.viewport)
    }

    pub fn at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Whether a swipe in `direction` may change slides.
    pub fn permits(&self, direction: SwipeDirection) -> bool {
        if !self.is_scrollable() {
            return true;
        }
        match direction {
            SwipeDirection::Right => self.at_top(),
            SwipeDirection::Left => self.at_bottom(),
        }
    }
}
