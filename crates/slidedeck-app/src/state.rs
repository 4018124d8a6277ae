//! Application state (Model in TEA pattern)

use std::time::Instant;

use slidedeck_core::{
    Deck, DeckEvent, Document, FragmentHistory, FragmentScheme, LiveRegion, Progress,
    ScrollExtent, SwipeTracker,
};
use tracing::{error, info};

use crate::config::{FragmentMode, Settings};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Deck navigation
    #[default]
    Normal,

    /// Jump prompt has focus; keys edit the prompt instead of navigating
    JumpInput,

    /// The deck has no slides; navigation is disabled
    Unavailable,
}

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Scroll offsets of each slide's body plus the viewport height they are
/// measured against.
#[derive(Debug, Clone, Default)]
pub struct ContentScroll {
    offsets: Vec<u16>,
    heights: Vec<u16>,
    viewport: u16,
}

impl ContentScroll {
    pub fn new(document: &Document) -> Self {
        Self {
            offsets: vec![0; document.len()],
            heights: document.slides.iter().map(|s| s.height()).collect(),
            viewport: 0,
        }
    }

    pub fn viewport(&self) -> u16 {
        self.viewport
    }

    /// Update the viewport, clamping offsets that now point past the end.
    pub fn set_viewport(&mut self, viewport: u16) {
        self.viewport = viewport;
        for i in 0..self.offsets.len() {
            let max = self.heights[i].saturating_sub(viewport);
            self.offsets[i] = self.offsets[i].min(max);
        }
    }

    /// Scroll extent of slide `index` (1-based).
    pub fn extent(&self, index: usize) -> ScrollExtent {
        let i = index.saturating_sub(1);
        ScrollExtent::new(
            self.offsets.get(i).copied().unwrap_or(0),
            self.heights.get(i).copied().unwrap_or(0),
            self.viewport,
        )
    }

    pub fn offset(&self, index: usize) -> u16 {
        self.extent(index).offset
    }

    pub fn scroll_down(&mut self, index: usize, rows: u16) {
        let extent = self.extent(index);
        if let Some(offset) = index.checked_sub(1).and_then(|i| self.offsets.get_mut(i)) {
            *offset = offset.saturating_add(rows).min(extent.max_offset());
        }
    }

    pub fn scroll_up(&mut self, index: usize, rows: u16) {
        if let Some(offset) = index.checked_sub(1).and_then(|i| self.offsets.get_mut(i)) {
            *offset = offset.saturating_sub(rows);
        }
    }

    pub fn reset(&mut self, index: usize) {
        if let Some(offset) = index.checked_sub(1).and_then(|i| self.offsets.get_mut(i)) {
            *offset = 0;
        }
    }
}

/// A deferred scroll-to-top for a slide that was just entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingScrollReset {
    pub slide: usize,
    pub due: Instant,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current UI mode
    pub ui_mode: UiMode,

    /// Application lifecycle phase
    pub phase: AppPhase,

    /// The parsed deck source
    pub document: Document,

    /// Slide state machine; `None` when the document has no slides
    pub deck: Option<Deck>,

    /// Presenter settings
    pub settings: Settings,

    /// Fragment grammar for this deck
    pub scheme: FragmentScheme,

    /// Fragment location and its history entries
    pub history: FragmentHistory,

    /// Accessibility announcement slot
    pub live_region: LiveRegion,

    /// Chrome hidden, slide fills the screen
    pub presentation_mode: bool,

    /// Whether the auto-advance timer is running
    pub auto_advance: bool,

    /// Focused indicator (1-based), if any
    pub focused_indicator: Option<usize>,

    /// Body scroll positions
    pub scroll: ContentScroll,

    /// Deferred scroll reset, applied on tick
    pub scroll_reset: Option<PendingScrollReset>,

    /// Pointer press/release tracking
    pub swipe: SwipeTracker,

    /// Jump prompt contents
    pub jump_query: String,

    /// Events queued for external subscribers; drained by the engine
    pub pending_events: Vec<DeckEvent>,
}

impl AppState {
    /// Build state for `document`, seeding the position from `fragment`.
    ///
    /// A document without slides leaves the presenter up with navigation
    /// disabled.
    pub fn new(document: Document, settings: Settings, fragment: Option<&str>) -> Self {
        let scheme = document.fragment_scheme(settings.deck.fragment == FragmentMode::Tabs);
        let total = document.len();
        let start = fragment.and_then(|f| scheme.parse(f, total));

        let (deck, ui_mode) = match Deck::with_start(total, start) {
            Ok(deck) => (Some(deck), UiMode::Normal),
            Err(e) => {
                error!(
                    "Cannot initialize navigation for {}: {}",
                    document.name, e
                );
                (None, UiMode::Unavailable)
            }
        };

        let history = match &deck {
            Some(deck) => FragmentHistory::new(scheme.format(deck.current())),
            None => FragmentHistory::new(fragment.unwrap_or_default()),
        };

        if let Some(deck) = &deck {
            info!(
                "Opened {} with {} slide(s), starting at {} ({} fragments)",
                document.name,
                deck.total(),
                deck.current(),
                settings.deck.fragment
            );
        }

        Self {
            ui_mode,
            phase: AppPhase::Running,
            scroll: ContentScroll::new(&document),
            document,
            deck,
            live_region: LiveRegion::new(settings.accessibility.announcement_ttl()),
            swipe: SwipeTracker::new(settings.navigation.swipe_threshold_px),
            settings,
            scheme,
            history,
            presentation_mode: false,
            auto_advance: false,
            focused_indicator: None,
            scroll_reset: None,
            jump_query: String::new(),
            pending_events: Vec::new(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn current_slide(&self) -> Option<usize> {
        self.deck.as_ref().map(|d| d.current())
    }

    pub fn total_slides(&self) -> usize {
        self.deck.as_ref().map(|d| d.total()).unwrap_or(0)
    }

    pub fn progress(&self) -> Option<Progress> {
        self.deck.as_ref().map(|d| d.state().progress())
    }

    /// Scroll extent of the active slide's body.
    pub fn active_extent(&self) -> ScrollExtent {
        self.current_slide()
            .map(|i| self.scroll.extent(i))
            .unwrap_or_default()
    }

    pub fn set_presentation_mode(&mut self, active: bool) {
        if self.presentation_mode != active {
            self.presentation_mode = active;
            self.pending_events
                .push(DeckEvent::PresentationModeChanged { active });
        }
    }

    pub fn set_auto_advance(&mut self, running: bool) {
        if self.auto_advance != running {
            self.auto_advance = running;
            self.pending_events
                .push(DeckEvent::AutoAdvanceChanged { running });
        }
    }

    /// Apply deferred effects whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        self.live_region.expire(now);
        if let Some(pending) = self.scroll_reset {
            if now >= pending.due {
                self.scroll.reset(pending.slide);
                self.scroll_reset = None;
            }
        }
    }

    pub fn take_events(&mut self) -> Vec<DeckEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
