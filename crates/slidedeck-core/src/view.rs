//! View projection
//!
//! Every view a presenter draws (slide visibility, indicators, nav buttons,
//! counter text) is derived from [`DeckState`] here, in one pass. Nothing is
//! patched incrementally from a previous projection.

use serde::Serialize;

use crate::deck::DeckState;

/// Where a slide sits relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlidePosition {
    /// Already shown; slides out to the left.
    Past,
    /// The current slide.
    Active,
    /// Not yet shown (default state).
    Upcoming,
}

impl SlidePosition {
    pub fn classify(index: usize, current: usize) -> Self {
        use std::cmp::Ordering;
        match index.cmp(&current) {
            Ordering::Less => SlidePosition::Past,
            Ordering::Equal => SlidePosition::Active,
            Ordering::Greater => SlidePosition::Upcoming,
        }
    }

    /// Class marker for the position; upcoming slides carry none.
    pub fn class_name(&self) -> &'static str {
        match self {
            SlidePosition::Past => "prev",
            SlidePosition::Active => "active",
            SlidePosition::Upcoming => "",
        }
    }
}

/// Enablement of the previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavState {
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

/// Full projection of a deck state. Indexes into the vectors are 0-based;
/// slide `n` lives at `n - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeckView {
    pub slides: Vec<SlidePosition>,
    /// Hidden from assistive technology (every slide but the active one).
    pub hidden: Vec<bool>,
    pub indicators: Vec<bool>,
    pub nav: NavState,
    pub counter: String,
}

impl DeckView {
    pub fn project(state: &DeckState) -> Self {
        let current = state.current();
        let total = state.total();

        let slides: Vec<SlidePosition> = (1..=total)
            .map(|i| SlidePosition::classify(i, current))
            .collect();
        let hidden = slides.iter().map(|p| *p != SlidePosition::Active).collect();
        let indicators = (1..=total).map(|i| i == current).collect();

        Self {
            slides,
            hidden,
            indicators,
            nav: NavState {
                previous_enabled: current != 1,
                next_enabled: current != total,
            },
            counter: format!("{} of {}", current, total),
        }
    }

    /// 1-based index of the highlighted indicator.
    pub fn active_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|on| *on).map(|i| i + 1)
    }

    /// 1-based index of the active slide.
    pub fn active_slide(&self) -> Option<usize> {
        self.slides
            .iter()
            .position(|p| *p == SlidePosition::Active)
            .map(|i| i + 1)
    }

    pub fn position(&self, index: usize) -> Option<SlidePosition> {
        index
            .checked_sub(1)
            .and_then(|i| self.slides.get(i))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: usize, current: usize) -> DeckState {
        DeckState::seeded(total, Some(current)).unwrap()
    }

    #[test]
    fn test_ternary_classification() {
        let view = DeckView::project(&state(5, 3));
        assert_eq!(
            view.slides,
            vec![
                SlidePosition::Past,
                SlidePosition::Past,
                SlidePosition::Active,
                SlidePosition::Upcoming,
                SlidePosition::Upcoming,
            ]
        );
        assert_eq!(view.slides[0].class_name(), "prev");
        assert_eq!(view.slides[2].class_name(), "active");
        assert_eq!(view.slides[4].class_name(), "");
    }

    #[test]
    fn test_single_indicator_matches_current() {
        for current in 1..=4 {
            let view = DeckView::project(&state(4, current));
            assert_eq!(view.indicators.iter().filter(|on| **on).count(), 1);
            assert_eq!(view.active_indicator(), Some(current));
            assert_eq!(view.active_slide(), Some(current));
        }
    }

    #[test]
    fn test_nav_enablement_at_boundaries() {
        let first = DeckView::project(&state(3, 1));
        assert!(!first.nav.previous_enabled);
        assert!(first.nav.next_enabled);

        let middle = DeckView::project(&state(3, 2));
        assert!(middle.nav.previous_enabled);
        assert!(middle.nav.next_enabled);

        let last = DeckView::project(&state(3, 3));
        assert!(last.nav.previous_enabled);
        assert!(!last.nav.next_enabled);
    }

    #[test]
    fn test_single_slide_deck_disables_both_buttons() {
        let view = DeckView::project(&state(1, 1));
        assert!(!view.nav.previous_enabled);
        assert!(!view.nav.next_enabled);
    }

    #[test]
    fn test_counter_text() {
        assert_eq!(DeckView::project(&state(6, 2)).counter, "2 of 6");
    }

    #[test]
    fn test_hidden_flags_everything_but_active() {
        let view = DeckView::project(&state(3, 2));
        assert_eq!(view.hidden, vec![true, false, true]);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let s = state(6, 4);
        assert_eq!(DeckView::project(&s), DeckView::project(&s));
    }

    #[test]
    fn test_position_lookup_is_one_based() {
        let view = DeckView::project(&state(3, 2));
        assert_eq!(view.position(0), None);
        assert_eq!(view.position(1), Some(SlidePosition::Past));
        assert_eq!(view.position(2), Some(SlidePosition::Active));
        assert_eq!(view.position(4), None);
    }
}
