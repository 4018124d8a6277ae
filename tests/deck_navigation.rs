//! End-to-end navigation through the engine
//!
//! These tests drive [`Engine`] the way the runners do: messages in,
//! broadcast [`DeckEvent`]s out.

use std::path::Path;

use tempfile::tempdir;
use tokio::sync::broadcast;

use slidedeck_app::config::{load_settings, FragmentMode, Settings};
use slidedeck_app::{Engine, InputKey, Message};
use slidedeck_core::{DeckEvent, Document, Error};

fn numbered_deck(slides: usize) -> Document {
    let source = (1..=slides)
        .map(|i| format!("# Slide {}\nPoint {}", i, i))
        .collect::<Vec<_>>()
        .join("\n---\n");
    Document::parse("numbered.md", &source)
}

fn slide_changes(rx: &mut broadcast::Receiver<DeckEvent>) -> Vec<(usize, usize)> {
    std::iter::from_fn(|| rx.try_recv().ok())
        .filter_map(|event| match event {
            DeckEvent::SlideChanged { from, current, .. } => Some((from, current)),
            _ => None,
        })
        .collect()
}

fn swipe(engine: &mut Engine, dx: f32, dy: f32) {
    let (x, y) = (400.0, 200.0);
    engine.process_message(Message::PointerDown { x, y });
    engine.process_message(Message::PointerUp {
        x: x + dx,
        y: y + dy,
    });
}

#[test]
fn six_slides_walk_to_the_end_and_back() {
    let mut engine = Engine::new(numbered_deck(6), Settings::default(), None);
    let mut rx = engine.subscribe();

    for _ in 0..5 {
        engine.process_message(Message::Key(InputKey::Right));
    }

    let deck = engine.state.deck.as_ref().unwrap();
    let view = deck.view();
    assert_eq!(deck.current(), 6);
    assert!(!view.nav.next_enabled);
    assert_eq!(view.active_indicator(), Some(6));
    assert_eq!(view.counter, "6 of 6");
    assert_eq!(engine.state.history.current(), "slide-6");

    // Ignored at the boundary
    engine.process_message(Message::Key(InputKey::Right));

    engine.process_message(Message::Key(InputKey::Left));
    assert_eq!(engine.state.current_slide(), Some(5));

    assert_eq!(
        slide_changes(&mut rx),
        vec![(1, 2), (2, 3), (3, 4), (4, 5), (5, 6), (6, 5)]
    );
}

#[test]
fn out_of_range_requests_leave_state_untouched() {
    let mut engine = Engine::new(numbered_deck(4), Settings::default(), None);
    let mut rx = engine.subscribe();

    engine.process_message(Message::GotoSlide(0));
    engine.process_message(Message::GotoSlide(5));
    engine.process_message(Message::GotoSlideRaw("two".to_string()));
    engine.process_message(Message::NavigateFragment("#slide-9".to_string()));

    assert_eq!(engine.state.current_slide(), Some(1));
    assert!(slide_changes(&mut rx).is_empty());
    assert_eq!(engine.state.deck.as_ref().unwrap().render_passes(), 1);
}

#[test]
fn swipe_advances_on_plain_slides() {
    let mut engine = Engine::new(numbered_deck(3), Settings::default(), None);
    engine.process_message(Message::ContentViewport(20));

    swipe(&mut engine, -80.0, -5.0);
    assert_eq!(engine.state.current_slide(), Some(2));

    swipe(&mut engine, 80.0, 5.0);
    assert_eq!(engine.state.current_slide(), Some(1));
}

#[test]
fn swipe_is_suppressed_while_content_is_mid_scroll() {
    let body = (1..=40)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n");
    let source = format!("# Long\n{}\n---\n# Short", body);
    let mut engine = Engine::new(
        Document::parse("long.md", &source),
        Settings::default(),
        None,
    );
    engine.process_message(Message::ContentViewport(10));
    engine.process_message(Message::ScrollContentDown(5));

    swipe(&mut engine, -80.0, -5.0);
    assert_eq!(engine.state.current_slide(), Some(1));

    engine.process_message(Message::ScrollContentDown(100));
    swipe(&mut engine, -80.0, -5.0);
    assert_eq!(engine.state.current_slide(), Some(2));
}

#[test]
fn fragment_seeds_the_starting_slide() {
    let engine = Engine::new(numbered_deck(6), Settings::default(), Some("#slide-4"));
    assert_eq!(engine.state.current_slide(), Some(4));
    assert_eq!(engine.state.history.current(), "slide-4");

    let engine = Engine::new(numbered_deck(6), Settings::default(), Some("#slide-40"));
    assert_eq!(engine.state.current_slide(), Some(1));
    assert_eq!(engine.state.history.current(), "slide-1");
}

#[test]
fn empty_deck_stays_up_without_navigation() {
    let mut engine = Engine::new(Document::parse("empty.md", "\n\n"), Settings::default(), None);
    assert!(engine.state.deck.is_none());

    engine.process_message(Message::Key(InputKey::Right));
    engine.process_message(Message::GotoSlide(1));
    assert_eq!(engine.state.current_slide(), None);

    engine.process_message(Message::Key(InputKey::Char('q')));
    assert!(engine.should_quit());
}

fn write_deck(dir: &Path, config: Option<&str>) -> std::path::PathBuf {
    let deck = dir.join("talk.md");
    std::fs::write(
        &deck,
        "# Intro\nHello\n---\n# Getting Started\nSteps\n---\n# Q&A\nQuestions?",
    )
    .unwrap();

    if let Some(config) = config {
        let config_dir = dir.join(".slidedeck");
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join("config.toml"), config).unwrap();
    }
    deck
}

#[test]
fn deck_file_with_tab_fragments_from_config() {
    let dir = tempdir().unwrap();
    let deck = write_deck(dir.path(), Some("[deck]\nfragment = \"tabs\"\n"));

    let document = Document::load(&deck).unwrap();
    let settings = load_settings(dir.path());
    assert_eq!(settings.deck.fragment, FragmentMode::Tabs);

    let mut engine = Engine::new(document, settings, Some("#getting-started"));
    assert_eq!(engine.state.current_slide(), Some(2));

    engine.process_message(Message::NextSlide);
    assert_eq!(engine.state.history.current(), "q-a");

    engine.process_message(Message::NavigateFragment("#intro".to_string()));
    assert_eq!(engine.state.current_slide(), Some(1));

    engine.process_message(Message::HistoryBack);
    assert_eq!(engine.state.current_slide(), Some(3));
}

#[test]
fn missing_deck_file_is_reported() {
    let dir = tempdir().unwrap();
    let result = Document::load(&dir.path().join("nope.md"));
    assert!(matches!(result, Err(Error::DeckNotFound { .. })));
}

#[tokio::test(start_paused = true)]
async fn auto_advance_runs_to_the_end_unless_interrupted() {
    let mut settings = Settings::default();
    settings.auto_advance.enabled = true;
    settings.auto_advance.interval_secs = 2;

    let mut engine = Engine::new(numbered_deck(3), settings, None);
    let mut rx = engine.subscribe();
    engine.start();

    for _ in 0..4 {
        tokio::time::sleep(std::time::Duration::from_millis(2_010)).await;
        engine.drain_pending_messages();
    }

    assert_eq!(engine.state.current_slide(), Some(3));
    assert!(!engine.auto_advance_running());
    assert_eq!(slide_changes(&mut rx), vec![(1, 2), (2, 3)]);
}
