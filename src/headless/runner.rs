//! Headless mode runner - main event loop without TUI
//!
//! Commands arrive on stdin, one per line, and are turned into the same
//! messages the TUI produces. Every broadcast deck event is written to
//! stdout as JSON.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc};

use slidedeck_app::config::Settings;
use slidedeck_app::signals::spawn_signal_handler;
use slidedeck_app::{Engine, Message};
use slidedeck_core::prelude::*;
use slidedeck_core::{DeckEvent, Document};

use super::HeadlessEvent;

/// Deferred effects (announcement removal) are checked at this rate.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// A parsed stdin line
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessCommand {
    /// Feed a message to the engine
    Send(Message),
    /// Print a status event
    Status,
    Quit,
    Empty,
    Unknown(String),
}

/// Run in headless mode - output JSON events instead of TUI
pub async fn run_headless(
    document: Document,
    settings: Settings,
    fragment: Option<&str>,
) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("SlideDeck starting in HEADLESS mode");
    info!("Deck: {}", document.name);
    info!("═══════════════════════════════════════════════════════");

    if document.is_empty() {
        let err = Error::no_slides(&document.name);
        error!("{}", err);
        HeadlessEvent::error(err.to_string(), err.is_fatal()).emit();
        return Err(err);
    }

    let mut engine = Engine::new(document, settings, fragment);
    let mut events = engine.subscribe();

    if let Some(started) = HeadlessEvent::started(&engine.state) {
        started.emit();
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<HeadlessCommand>(32);
    std::thread::spawn(move || {
        read_stdin_commands(cmd_tx);
    });

    spawn_signal_handler(engine.msg_sender());

    engine.start();
    emit_deck_events(&engine, &mut events);

    let result = headless_event_loop(&mut engine, &mut events, cmd_rx).await;

    engine.shutdown();
    emit_deck_events(&engine, &mut events);

    info!("SlideDeck headless mode exiting");
    result
}

/// Main headless event loop
///
/// When stdin closes the loop keeps running only while auto-advance is.
async fn headless_event_loop(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<DeckEvent>,
    mut commands: mpsc::Receiver<HeadlessCommand>,
) -> Result<()> {
    let mut tick = tokio::time::interval(TICK_INTERVAL);
    let mut stdin_open = true;

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        if !stdin_open && !engine.state.auto_advance {
            info!("Stdin closed and nothing left to run");
            break;
        }

        tokio::select! {
            msg = engine.msg_rx.recv() => match msg {
                Some(msg) => engine.process_message(msg),
                None => {
                    info!("Message channel closed");
                    break;
                }
            },
            cmd = commands.recv(), if stdin_open => match cmd {
                Some(cmd) => handle_command(engine, cmd),
                None => stdin_open = false,
            },
            _ = tick.tick() => engine.process_message(Message::Tick),
        }

        emit_deck_events(engine, events);
    }

    Ok(())
}

/// Apply one stdin command to the engine.
fn handle_command(engine: &mut Engine, cmd: HeadlessCommand) {
    match cmd {
        HeadlessCommand::Send(msg) => engine.process_message(msg),
        HeadlessCommand::Status => {
            if let Some(status) = HeadlessEvent::status(&engine.state) {
                status.emit();
            }
        }
        HeadlessCommand::Quit => engine.process_message(Message::Quit),
        HeadlessCommand::Empty => {}
        HeadlessCommand::Unknown(line) => {
            warn!("Unknown stdin command: {}", line);
            eprintln!("Unknown command: {}", line);
        }
    }
}

/// Forward every queued broadcast event to stdout.
fn emit_deck_events(engine: &Engine, events: &mut broadcast::Receiver<DeckEvent>) {
    loop {
        match events.try_recv() {
            Ok(event) => {
                HeadlessEvent::from_deck_event(event, engine.state.history.current()).emit();
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged, {} event(s) dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Parse one stdin line.
pub fn parse_command(line: &str) -> HeadlessCommand {
    let line = line.trim();
    let (word, arg) = match line.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (line, ""),
    };

    let msg = match (word, arg) {
        ("", _) => return HeadlessCommand::Empty,
        ("status", "") => return HeadlessCommand::Status,
        ("q" | "quit", "") => return HeadlessCommand::Quit,

        ("n" | "next", "") => Message::NextSlide,
        ("p" | "prev" | "previous", "") => Message::PreviousSlide,
        ("first", "") => Message::FirstSlide,
        ("last", "") => Message::LastSlide,
        ("goto", n) if !n.is_empty() => Message::GotoSlideRaw(n.to_string()),

        ("open", fragment) if !fragment.is_empty() => {
            Message::NavigateFragment(fragment.to_string())
        }
        (fragment, "") if fragment.len() > 1 && fragment.starts_with('#') => {
            Message::NavigateFragment(fragment.to_string())
        }
        ("back", "") => Message::HistoryBack,
        ("forward", "") => Message::HistoryForward,

        ("present", "") => Message::TogglePresentationMode,
        ("auto", "") => Message::ToggleAutoAdvance,

        _ => return HeadlessCommand::Unknown(line.to_string()),
    };

    HeadlessCommand::Send(msg)
}

/// Read stdin on a plain thread; stdin has no async reader worth the cost.
fn read_stdin_commands(cmd_tx: mpsc::Sender<HeadlessCommand>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => {
                let cmd = parse_command(&line);
                let quit = cmd == HeadlessCommand::Quit;
                if cmd_tx.blocking_send(cmd).is_err() || quit {
                    break;
                }
            }
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(slides: usize) -> Engine {
        let source = (1..=slides)
            .map(|i| format!("# Slide {}", i))
            .collect::<Vec<_>>()
            .join("\n---\n");
        Engine::new(
            Document::parse("deck.md", &source),
            Settings::default(),
            None,
        )
    }

    fn send(line: &str) -> Message {
        match parse_command(line) {
            HeadlessCommand::Send(msg) => msg,
            other => panic!("expected a message for {:?}, got {:?}", line, other),
        }
    }

    #[test]
    fn test_parse_navigation_commands() {
        assert_eq!(send("next"), Message::NextSlide);
        assert_eq!(send("  n  "), Message::NextSlide);
        assert_eq!(send("prev"), Message::PreviousSlide);
        assert_eq!(send("first"), Message::FirstSlide);
        assert_eq!(send("last"), Message::LastSlide);
        assert_eq!(send("goto 4"), Message::GotoSlideRaw("4".to_string()));
        assert_eq!(send("goto   abc"), Message::GotoSlideRaw("abc".to_string()));
    }

    #[test]
    fn test_parse_fragment_commands() {
        assert_eq!(
            send("#slide-3"),
            Message::NavigateFragment("#slide-3".to_string())
        );
        assert_eq!(
            send("open q-a"),
            Message::NavigateFragment("q-a".to_string())
        );
        assert_eq!(send("back"), Message::HistoryBack);
        assert_eq!(send("forward"), Message::HistoryForward);
    }

    #[test]
    fn test_parse_mode_and_control_commands() {
        assert_eq!(send("present"), Message::TogglePresentationMode);
        assert_eq!(send("auto"), Message::ToggleAutoAdvance);
        assert_eq!(parse_command("status"), HeadlessCommand::Status);
        assert_eq!(parse_command("quit"), HeadlessCommand::Quit);
        assert_eq!(parse_command("q"), HeadlessCommand::Quit);
        assert_eq!(parse_command("   "), HeadlessCommand::Empty);
    }

    #[test]
    fn test_parse_unknown_commands() {
        for line in ["jump", "goto", "#", "next 2", "open"] {
            assert_eq!(
                parse_command(line),
                HeadlessCommand::Unknown(line.to_string()),
                "line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_handle_command_drives_engine() {
        let mut engine = engine(6);
        let mut events = engine.subscribe();

        for line in ["next", "goto 5", "goto 9", "#slide-2", "back"] {
            handle_command(&mut engine, parse_command(line));
        }
        assert_eq!(engine.state.current_slide(), Some(5));

        let changes: Vec<_> = std::iter::from_fn(|| events.try_recv().ok())
            .filter_map(|event| match event {
                DeckEvent::SlideChanged { current, .. } => Some(current),
                _ => None,
            })
            .collect();
        assert_eq!(changes, vec![2, 5, 2, 5]);
    }

    #[test]
    fn test_quit_command() {
        let mut engine = engine(2);
        handle_command(&mut engine, HeadlessCommand::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test]
    async fn test_event_loop_exits_when_stdin_closes() {
        let mut engine = engine(3);
        let mut events = engine.subscribe();
        let (cmd_tx, cmd_rx) = mpsc::channel(8);

        cmd_tx.send(parse_command("next")).await.unwrap();
        drop(cmd_tx);

        headless_event_loop(&mut engine, &mut events, cmd_rx)
            .await
            .unwrap();
        assert_eq!(engine.state.current_slide(), Some(2));
    }
}
