//! Settings parser for .slidedeck/config.toml

use super::types::{AutoAdvanceSettings, Settings};
use slidedeck_core::prelude::*;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.toml";
const SLIDEDECK_DIR: &str = ".slidedeck";

/// Load settings from `<deck_dir>/.slidedeck/config.toml`
///
/// Returns default settings if the file doesn't exist or can't be parsed.
pub fn load_settings(deck_dir: &Path) -> Settings {
    let config_path = deck_dir.join(SLIDEDECK_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Reject values that would make navigation unusable
pub fn validate_settings(settings: &Settings) -> Result<()> {
    let nav = &settings.navigation;
    if !(nav.swipe_threshold_px.is_finite() && nav.swipe_threshold_px >= 0.0) {
        return Err(Error::config_invalid(format!(
            "navigation.swipe_threshold_px must be a non-negative number, got {}",
            nav.swipe_threshold_px
        )));
    }
    if !(nav.cell_width_px > 0.0 && nav.cell_height_px > 0.0) {
        return Err(Error::config_invalid(
            "navigation.cell_width_px and cell_height_px must be positive",
        ));
    }
    let secs = settings.auto_advance.interval_secs;
    if secs > AutoAdvanceSettings::MAX_INTERVAL_SECS {
        return Err(Error::config_invalid(format!(
            "auto_advance.interval_secs must be at most {}, got {}",
            AutoAdvanceSettings::MAX_INTERVAL_SECS,
            secs
        )));
    }
    Ok(())
}
