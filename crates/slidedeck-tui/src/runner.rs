//! Main TUI runner - entry point and event loop

use ratatui::layout::Rect;

use slidedeck_app::config::Settings;
use slidedeck_app::message::Message;
use slidedeck_app::{signals, Engine};
use slidedeck_core::prelude::*;
use slidedeck_core::Document;

use crate::event::{self, PointerRouter};
use crate::{render, terminal};

/// Run the TUI presenter for a deck
pub async fn run(document: Document, settings: Settings, fragment: Option<&str>) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut engine = Engine::new(document, settings, fragment);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    signals::spawn_signal_handler(engine.msg_sender());

    engine.start();

    // Initialize terminal
    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse_capture() {
        warn!("{}; swipes and clicks are unavailable", e);
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    // Restore terminal
    terminal::disable_mouse_capture();
    ratatui::restore();

    result
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let mut router = PointerRouter::new(&engine.state.settings.navigation);

    while !engine.should_quit() {
        // Process external messages (signal handler, auto-advance timer)
        engine.drain_pending_messages();

        let size = terminal.size()?;
        let areas = render::screen_areas(Rect::new(0, 0, size.width, size.height), &engine.state);
        engine.process_message(Message::ContentViewport(areas.slide_viewport()));

        // Render
        terminal.draw(|frame| render::view(frame, &engine.state))?;

        // Handle terminal events
        let total = engine.state.total_slides();
        if let Some(message) = event::poll(&mut router, &areas, total)? {
            engine.process_message(message);
        }
    }

    Ok(())
}
