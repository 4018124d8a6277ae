//! Fragment deep links
//!
//! A fragment addresses a slide either as `slide-<n>` or, for tabbed decks,
//! by a name from a fixed allow-list. [`FragmentHistory`] models the location
//! a presenter keeps: transitions replace the current entry, explicit
//! navigation pushes a new one, and back/forward move between entries.

use std::sync::LazyLock;

use regex::Regex;

static SLIDE_FRAGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^slide-(\d+)$").expect("Invalid slide fragment regex"));

/// Strip an optional leading `#`.
fn bare(fragment: &str) -> &str {
    let fragment = fragment.trim();
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// Fragment grammar used by a deck.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FragmentScheme {
    /// `slide-<n>`, 1-based.
    #[default]
    Slides,
    /// One name per slide, in slide order.
    Tabs(Vec<String>),
}

impl FragmentScheme {
    /// Resolve a fragment to a 1-based slide index valid for `total` slides.
    pub fn parse(&self, fragment: &str, total: usize) -> Option<usize> {
        let fragment = bare(fragment);
        let index = match self {
            FragmentScheme::Slides => SLIDE_FRAGMENT
                .captures(fragment)
                .and_then(|caps| caps[1].parse::<usize>().ok()),
            FragmentScheme::Tabs(names) => names
                .iter()
                .position(|name| name == fragment)
                .map(|i| i + 1),
        };
        index.filter(|n| (1..=total).contains(n))
    }

    /// Fragment (without `#`) addressing slide `index`.
    pub fn format(&self, index: usize) -> String {
        match self {
            FragmentScheme::Tabs(names) => match index.checked_sub(1).and_then(|i| names.get(i)) {
                Some(name) => name.clone(),
                None => format!("slide-{}", index),
            },
            FragmentScheme::Slides => format!("slide-{}", index),
        }
    }
}

/// Fragment location with history entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentHistory {
    entries: Vec<String>,
    cursor: usize,
}

impl FragmentHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: vec![bare(&initial.into()).to_string()],
            cursor: 0,
        }
    }

    /// The fragment currently shown, without `#`.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Rewrite the current entry without creating a history entry.
    pub fn replace(&mut self, fragment: impl Into<String>) {
        self.entries[self.cursor] = bare(&fragment.into()).to_string();
    }

    /// Navigate to a new entry, discarding any forward entries.
    pub fn push(&mut self, fragment: impl Into<String>) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(bare(&fragment.into()).to_string());
        self.cursor += 1;
    }

    pub fn back(&mut self) -> Option<&str> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.current())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl Default for FragmentHistory {
    fn default() -> Self {
        Self::new("")
    }
}
