//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the TEA state, the unified message channel, the
//! auto-advance timer and the event broadcaster. Both frontends feed it
//! messages and read state back from it.

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use slidedeck_core::{DeckEvent, Document};

use crate::auto_advance::AutoAdvanceTimer;
use crate::config::Settings;
use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Orchestration engine for SlideDeck.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, timer, stdin).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    pub msg_rx: mpsc::Receiver<Message>,

    /// The single periodic auto-advance timer
    auto_advance: AutoAdvanceTimer,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<DeckEvent>,
}

impl Engine {
    /// Create an Engine for `document`, seeding the position from
    /// `fragment` when it names a slide.
    pub fn new(document: Document, settings: Settings, fragment: Option<&str>) -> Self {
        let state = AppState::new(document, settings, fragment);
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            auto_advance: AutoAdvanceTimer::new(),
            event_tx,
        }
    }

    /// Apply startup behavior from settings. Must be called from within a
    /// tokio runtime when auto-advance is enabled.
    pub fn start(&mut self) {
        if self.state.settings.auto_advance.enabled {
            info!("Auto-advance enabled at startup");
            self.process_message(Message::StartAutoAdvance);
        }
    }

    /// Subscribe to deck events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<DeckEvent> {
        self.event_tx.subscribe()
    }

    /// Process a message and every follow-up it produces, then broadcast
    /// the events queued along the way.
    pub fn process_message(&mut self, msg: Message) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            let result = handler::update(&mut self.state, msg);
            if let Some(action) = result.action {
                self.handle_action(action);
            }
            next = result.message;
        }

        for event in self.state.take_events() {
            self.emit(event);
        }
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn auto_advance_running(&self) -> bool {
        self.auto_advance.is_running()
    }

    /// Stop background work before exit.
    pub fn shutdown(&mut self) {
        info!("Shutting down engine");
        self.auto_advance.stop();
        self.state.set_auto_advance(false);
        for event in self.state.take_events() {
            self.emit(event);
        }
    }

    fn handle_action(&mut self, action: UpdateAction) {
        match action {
            UpdateAction::StartAutoAdvance { interval } => {
                self.auto_advance.start(interval, self.msg_tx.clone());
            }
            UpdateAction::StopAutoAdvance => self.auto_advance.stop(),
        }
    }

    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: DeckEvent) {
        debug!("Emitting {:?}", event);
        let _ = self.event_tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use std::time::Duration;

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

    #[test]
    fn test_subscribers_receive_slide_changes() {
        let mut engine = engine(3);
        let mut rx = engine.subscribe();

        engine.process_message(Message::Key(InputKey::Right));
        engine.process_message(Message::Key(InputKey::Left));
        engine.process_message(Message::Key(InputKey::Left));

        assert_eq!(
            rx.try_recv().ok(),
            Some(DeckEvent::SlideChanged {
                from: 1,
                current: 2,
                total: 3
            })
        );
        assert_eq!(
            rx.try_recv().ok(),
            Some(DeckEvent::SlideChanged {
                from: 2,
                current: 1,
                total: 3
            })
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_emit_without_subscribers() {
        let mut engine = engine(2);
        engine.process_message(Message::NextSlide);
        assert_eq!(engine.state.current_slide(), Some(2));
    }

    #[tokio::test]
    async fn test_drain_pending_messages() {
        let mut engine = engine(4);
        let tx = engine.msg_sender();
        tx.send(Message::NextSlide).await.unwrap();
        tx.send(Message::GotoSlide(4)).await.unwrap();

        assert_eq!(engine.drain_pending_messages(), 2);
        assert_eq!(engine.state.current_slide(), Some(4));
    }

    #[tokio::test]
    async fn test_quit_message() {
        let mut engine = engine(2);
        engine.process_message(Message::Quit);
        assert!(engine.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_through_channel() {
        let mut engine = engine(3);
        engine.process_message(Message::StartAutoAdvance);
        assert!(engine.auto_advance_running());

        let interval = engine.state.settings.auto_advance.interval();
        tokio::time::sleep(interval + Duration::from_millis(10)).await;
        engine.drain_pending_messages();
        assert_eq!(engine.state.current_slide(), Some(2));

        // A key press cancels the timer
        engine.process_message(Message::Key(InputKey::Right));
        assert!(!engine.auto_advance_running());
        assert_eq!(engine.state.current_slide(), Some(3));

        tokio::time::sleep(interval * 3).await;
        engine.drain_pending_messages();
        assert_eq!(engine.state.current_slide(), Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_advance_stops_at_last_slide() {
        let mut engine = engine(2);
        let mut rx = engine.subscribe();
        engine.process_message(Message::StartAutoAdvance);

        let interval = engine.state.settings.auto_advance.interval();
        for _ in 0..3 {
            tokio::time::sleep(interval + Duration::from_millis(10)).await;
            engine.drain_pending_messages();
        }

        assert_eq!(engine.state.current_slide(), Some(2));
        assert!(!engine.state.auto_advance);
        assert!(!engine.auto_advance_running());

        let events: Vec<_> = std::iter::from_fn(|| rx.try_recv().ok()).collect();
        assert_eq!(
            events,
            vec![
                DeckEvent::AutoAdvanceChanged { running: true },
                DeckEvent::SlideChanged {
                    from: 1,
                    current: 2,
                    total: 2
                },
                DeckEvent::AutoAdvanceChanged { running: false },
            ]
        );
    }

    #[tokio::test]
    async fn test_start_honors_settings() {
        let mut settings = Settings::default();
        settings.auto_advance.enabled = true;
        let mut engine = Engine::new(
            Document::parse("deck.md", "# A\n---\n# B"),
            settings,
            None,
        );
        engine.start();
        assert!(engine.state.auto_advance);
        assert!(engine.auto_advance_running());

        engine.shutdown();
        assert!(!engine.auto_advance_running());
    }
}
