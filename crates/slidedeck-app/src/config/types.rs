//! Configuration types for SlideDeck
//!
//! Defines:
//! - `Settings` - Global application settings (`.slidedeck/config.toml`)
//! - Related sub-sections and enums

use serde::{Deserialize, Serialize};
use std::time::Duration;

use slidedeck_core::{DEFAULT_ANNOUNCEMENT_TTL, SWIPE_THRESHOLD_PX};

/// Fragment grammar selected for a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FragmentMode {
    /// `#slide-<n>`
    #[default]
    Slides,
    /// `#<tab-name>` from the slide allow-list
    Tabs,
}

impl std::fmt::Display for FragmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FragmentMode::Slides => write!(f, "slides"),
            FragmentMode::Tabs => write!(f, "tabs"),
        }
    }
}

/// Application settings (.slidedeck/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub deck: DeckSettings,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub auto_advance: AutoAdvanceSettings,

    #[serde(default)]
    pub accessibility: AccessibilitySettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Deck addressing settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeckSettings {
    #[serde(default)]
    pub fragment: FragmentMode,
}

/// Pointer/swipe settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationSettings {
    /// Minimum horizontal travel for a swipe, in pixels
    #[serde(default = "default_swipe_threshold")]
    pub swipe_threshold_px: f32,

    /// Width of one terminal cell in pixels, used to convert mouse drags
    #[serde(default = "default_cell_width")]
    pub cell_width_px: f32,

    /// Height of one terminal cell in pixels
    #[serde(default = "default_cell_height")]
    pub cell_height_px: f32,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            swipe_threshold_px: default_swipe_threshold(),
            cell_width_px: default_cell_width(),
            cell_height_px: default_cell_height(),
        }
    }
}

/// Auto-advance settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AutoAdvanceSettings {
    /// Start advancing as soon as the deck opens
    #[serde(default)]
    pub enabled: bool,

    /// Seconds between automatic advances
    #[serde(default = "default_auto_advance_secs")]
    pub interval_secs: u64,
}

impl Default for AutoAdvanceSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_secs: default_auto_advance_secs(),
        }
    }
}

impl AutoAdvanceSettings {
    /// Longest accepted interval, one day
    pub const MAX_INTERVAL_SECS: u64 = 24 * 60 * 60;

    /// Interval clamped to `1..=MAX_INTERVAL_SECS` seconds
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.clamp(1, Self::MAX_INTERVAL_SECS))
    }
}

/// Live region settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AccessibilitySettings {
    /// Announce every slide change in the live region
    #[serde(default = "default_true")]
    pub announce: bool,

    /// How long an announcement stays visible
    #[serde(default = "default_announcement_ttl_ms")]
    pub announcement_ttl_ms: u64,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            announce: true,
            announcement_ttl_ms: default_announcement_ttl_ms(),
        }
    }
}

impl AccessibilitySettings {
    pub fn announcement_ttl(&self) -> Duration {
        Duration::from_millis(self.announcement_ttl_ms)
    }
}

/// Behavior settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Rewrite the fragment on every slide change
    #[serde(default = "default_true")]
    pub sync_fragment: bool,

    /// Delay before a newly entered slide's content is scrolled back to the top
    #[serde(default = "default_scroll_reset_delay_ms")]
    pub scroll_reset_delay_ms: u64,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            sync_fragment: true,
            scroll_reset_delay_ms: default_scroll_reset_delay_ms(),
        }
    }
}

impl BehaviorSettings {
    pub fn scroll_reset_delay(&self) -> Duration {
        Duration::from_millis(self.scroll_reset_delay_ms)
    }
}

/// Optional views. Disabling one hides it without affecting navigation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_true")]
    pub show_indicators: bool,

    #[serde(default = "default_true")]
    pub show_nav_buttons: bool,

    #[serde(default = "default_true")]
    pub show_counter: bool,

    #[serde(default = "default_true")]
    pub show_fragment: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_indicators: true,
            show_nav_buttons: true,
            show_counter: true,
            show_fragment: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_swipe_threshold() -> f32 {
    SWIPE_THRESHOLD_PX
}

fn default_cell_width() -> f32 {
    8.0
}

fn default_cell_height() -> f32 {
    16.0
}

fn default_auto_advance_secs() -> u64 {
    15
}

fn default_announcement_ttl_ms() -> u64 {
    DEFAULT_ANNOUNCEMENT_TTL.as_millis() as u64
}

fn default_scroll_reset_delay_ms() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_advance_interval_is_clamped() {
        let mut auto = AutoAdvanceSettings::default();
        auto.interval_secs = 0;
        assert_eq!(auto.interval(), Duration::from_secs(1));

        auto.interval_secs = u64::MAX;
        assert_eq!(
            auto.interval(),
            Duration::from_secs(AutoAdvanceSettings::MAX_INTERVAL_SECS)
        );
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.deck.fragment, FragmentMode::Slides);
        assert_eq!(settings.navigation.swipe_threshold_px, 50.0);
        assert!(!settings.auto_advance.enabled);
        assert_eq!(settings.auto_advance.interval(), Duration::from_secs(15));
        assert!(settings.accessibility.announce);
        assert_eq!(
            settings.accessibility.announcement_ttl(),
            Duration::from_millis(1000)
        );
        assert!(settings.behavior.sync_fragment);
        assert_eq!(
            settings.behavior.scroll_reset_delay(),
            Duration::from_millis(300)
        );
        assert!(settings.ui.show_indicators);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml = r#"
[deck]
fragment = "tabs"

[ui]
show_counter = false
"#;
        let settings: Settings = toml::from_str(toml).unwrap();
        assert_eq!(settings.deck.fragment, FragmentMode::Tabs);
        assert!(!settings.ui.show_counter);
        assert!(settings.ui.show_indicators);
        assert_eq!(settings.navigation.cell_width_px, 8.0);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let section = AutoAdvanceSettings {
            enabled: true,
            interval_secs: 0,
        };
        assert_eq!(section.interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_fragment_mode_display() {
        assert_eq!(FragmentMode::Slides.to_string(), "slides");
        assert_eq!(FragmentMode::Tabs.to_string(), "tabs");
    }
}
