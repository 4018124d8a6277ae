//! Deck document parsing
//!
//! A deck is a markdown file whose slides are separated by lines holding
//! only `---`. The first ATX heading of a slide is its title. A line of the
//! form `<!-- tab: name -->` names the slide for tab fragments and is not
//! shown.

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result, ResultExt};
use crate::fragment::FragmentScheme;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#{1,6}\s+(.+?)(?:\s+#+)?\s*$").expect("Invalid heading regex"));

static TAB_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<!--\s*tab:\s*([A-Za-z0-9_-]+)\s*-->$").expect("Invalid tab directive regex")
});

const SEPARATOR: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Slide {
    pub title: Option<String>,
    /// Explicit tab name from a `<!-- tab: name -->` directive.
    pub tab: Option<String>,
    /// Display lines, directives removed.
    pub lines: Vec<String>,
}

impl Slide {
    fn from_lines(raw: &[&str]) -> Option<Self> {
        let mut tab = None;
        let mut lines = Vec::with_capacity(raw.len());
        for line in raw {
            if let Some(caps) = TAB_DIRECTIVE.captures(line.trim()) {
                tab = Some(caps[1].to_string());
            } else {
                lines.push(line.trim_end().to_string());
            }
        }

        while lines.first().is_some_and(|l| l.trim().is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return None;
        }

        let title = lines
            .iter()
            .find_map(|l| HEADING.captures(l).map(|caps| caps[1].to_string()));

        Some(Self { title, tab, lines })
    }

    /// Number of rows the slide body occupies.
    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len()).unwrap_or(u16::MAX)
    }

    /// Name under which the slide is addressed by tab fragments.
    pub fn tab_name(&self, index: usize) -> String {
        if let Some(tab) = &self.tab {
            return tab.clone();
        }
        self.title
            .as_deref()
            .map(slugify)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("slide-{}", index))
    }
}

/// Lowercase, alphanumerics kept, everything else collapsed to `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;
    for c in text.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    slug
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub name: String,
    pub slides: Vec<Slide>,
}

impl Document {
    pub fn parse(name: impl Into<String>, source: &str) -> Self {
        let mut slides = Vec::new();
        let mut chunk: Vec<&str> = Vec::new();
        for line in source.lines() {
            if line.trim_end() == SEPARATOR {
                slides.extend(Slide::from_lines(&chunk));
                chunk.clear();
            } else {
                chunk.push(line);
            }
        }
        slides.extend(Slide::from_lines(&chunk));

        Self {
            name: name.into(),
            slides,
        }
    }

    /// Read and parse a deck file. A file without slides parses to an empty
    /// document; callers decide whether that is fatal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::deck_not_found(path));
        }
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read deck {}", path.display()))?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("deck")
            .to_string();
        let doc = Self::parse(name, &source);
        tracing::debug!("Parsed {} slide(s) from {}", doc.len(), path.display());
        Ok(doc)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide by 1-based index.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        index.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    pub fn title(&self, index: usize) -> Option<&str> {
        self.slide(index).and_then(|s| s.title.as_deref())
    }

    /// Allow-list of tab names in slide order.
    ///
    /// Names are unique: a repeat gets `-2`, `-3`, ... appended so every
    /// fragment resolves back to the slide that wrote it.
    pub fn tab_names(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut names = Vec::with_capacity(self.slides.len());
        for (i, slide) in self.slides.iter().enumerate() {
            let base = slide.tab_name(i + 1);
            let mut name = base.clone();
            let mut n = 2;
            while !seen.insert(name.clone()) {
                name = format!("{}-{}", base, n);
                n += 1;
            }
            names.push(name);
        }
        names
    }

    pub fn fragment_scheme(&self, tabs: bool) -> FragmentScheme {
        if tabs {
            FragmentScheme::Tabs(self.tab_names())
        } else {
            FragmentScheme::Slides
        }
    }
}
