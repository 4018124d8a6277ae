//! SlideDeck - A terminal slide deck presenter
//!
//! This is the binary entry point. Deck logic lives in the workspace crates.

mod headless;

use std::path::{Path, PathBuf};

use clap::Parser;
use slidedeck_app::config::{self, FragmentMode, Settings};
use slidedeck_core::{logging, Document};
use tracing::{error, info};

/// SlideDeck - A terminal slide deck presenter
#[derive(Parser, Debug)]
#[command(name = "slidedeck")]
#[command(about = "Present markdown slide decks in the terminal", long_about = None)]
struct Args {
    /// Deck file, optionally followed by `#fragment` (e.g. talk.md#slide-3)
    #[arg(value_name = "DECK")]
    deck: String,

    /// Start on this slide (1-based)
    #[arg(long, value_name = "N")]
    slide: Option<usize>,

    /// Use slide tab names as fragments instead of `slide-<n>`
    #[arg(long)]
    tabs: bool,

    /// Advance automatically, optionally every SECS seconds
    #[arg(long, value_name = "SECS", num_args = 0..=1)]
    auto_advance: Option<Option<u64>>,

    /// Disable slide change announcements
    #[arg(long)]
    no_announce: bool,

    /// Run in headless mode (JSON output, no TUI)
    #[arg(long)]
    headless: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    logging::init()?;

    let (deck_path, deck_fragment) = split_deck_arg(&args.deck);
    info!("Deck: {}", deck_path.display());

    let document = Document::load(&deck_path)?;

    let deck_dir = deck_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut settings = config::load_settings(deck_dir);
    apply_overrides(&mut settings, &args);
    config::validate_settings(&settings)?;

    let tabs = settings.deck.fragment == FragmentMode::Tabs;
    let fragment = match args.slide {
        Some(n) => Some(document.fragment_scheme(tabs).format(n)),
        None => deck_fragment,
    };

    let result = if args.headless {
        headless::runner::run_headless(document, settings, fragment.as_deref()).await
    } else {
        slidedeck_tui::run(document, settings, fragment.as_deref()).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!("See {} for details.", logging::get_current_log_file().display());
    }

    info!("SlideDeck exiting");
    Ok(result?)
}

/// Split `talk.md#slide-3` into the deck path and its fragment.
///
/// A path that names an existing file is taken whole, so decks with `#`
/// in their file name still open.
fn split_deck_arg(arg: &str) -> (PathBuf, Option<String>) {
    let whole = PathBuf::from(arg);
    if whole.is_file() {
        return (whole, None);
    }

    match arg.rsplit_once('#') {
        Some((path, fragment)) if !path.is_empty() => {
            let fragment = (!fragment.is_empty()).then(|| fragment.to_string());
            (PathBuf::from(path), fragment)
        }
        _ => (whole, None),
    }
}

/// CLI flags win over the config file.
fn apply_overrides(settings: &mut Settings, args: &Args) {
    if args.tabs {
        settings.deck.fragment = FragmentMode::Tabs;
    }

    if let Some(interval) = args.auto_advance {
        settings.auto_advance.enabled = true;
        if let Some(secs) = interval {
            settings.auto_advance.interval_secs = secs;
        }
    }

    if args.no_announce {
        settings.accessibility.announce = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("slidedeck").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_split_deck_arg_with_fragment() {
        let (path, fragment) = split_deck_arg("missing/talk.md#slide-3");
        assert_eq!(path, PathBuf::from("missing/talk.md"));
        assert_eq!(fragment.as_deref(), Some("slide-3"));
    }

    #[test]
    fn test_split_deck_arg_without_fragment() {
        let (path, fragment) = split_deck_arg("missing/talk.md");
        assert_eq!(path, PathBuf::from("missing/talk.md"));
        assert_eq!(fragment, None);

        let (path, fragment) = split_deck_arg("missing/talk.md#");
        assert_eq!(path, PathBuf::from("missing/talk.md"));
        assert_eq!(fragment, None);
    }

    #[test]
    fn test_split_deck_arg_prefers_existing_file() {
        let dir = tempdir().unwrap();
        let deck = dir.path().join("c#-tips.md");
        std::fs::write(&deck, "# C# tips").unwrap();

        let arg = deck.to_string_lossy().to_string();
        let (path, fragment) = split_deck_arg(&arg);
        assert_eq!(path, deck);
        assert_eq!(fragment, None);
    }

    #[test]
    fn test_auto_advance_flag_forms() {
        let mut settings = Settings::default();
        apply_overrides(&mut settings, &parse(&["talk.md"]));
        assert!(!settings.auto_advance.enabled);

        let mut settings = Settings::default();
        let default_secs = settings.auto_advance.interval_secs;
        apply_overrides(&mut settings, &parse(&["talk.md", "--auto-advance"]));
        assert!(settings.auto_advance.enabled);
        assert_eq!(settings.auto_advance.interval_secs, default_secs);

        let mut settings = Settings::default();
        apply_overrides(&mut settings, &parse(&["talk.md", "--auto-advance", "5"]));
        assert!(settings.auto_advance.enabled);
        assert_eq!(settings.auto_advance.interval_secs, 5);
    }

    #[test]
    fn test_flag_overrides() {
        let mut settings = Settings::default();
        apply_overrides(
            &mut settings,
            &parse(&["talk.md", "--tabs", "--no-announce", "--slide", "2"]),
        );
        assert_eq!(settings.deck.fragment, FragmentMode::Tabs);
        assert!(!settings.accessibility.announce);
    }
}
