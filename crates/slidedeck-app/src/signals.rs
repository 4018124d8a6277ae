//! OS signal handling
//!
//! SIGINT and SIGTERM (Ctrl+C on Windows) end the presentation the same way
//! `q` does: a [`Message::Quit`] through the engine channel, so the runner
//! restores the terminal and stops the auto-advance timer on its way out.

use std::fmt;
use std::future::Future;

use slidedeck_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Which signal asked the presenter to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownSignal::Interrupt => write!(f, "interrupt"),
            ShutdownSignal::Terminate => write!(f, "terminate"),
        }
    }
}

/// Spawn a task that turns the first shutdown signal into `Message::Quit`
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(forward_shutdown(wait_for_signal(), tx));
}

async fn forward_shutdown(
    signal: impl Future<Output = Result<ShutdownSignal>>,
    tx: mpsc::Sender<Message>,
) {
    match signal.await {
        Ok(signal) => {
            info!("Received {} signal, leaving the presentation", signal);
            if tx.send(Message::Quit).await.is_err() {
                debug!("Engine already gone; nothing to stop");
            }
        }
        Err(e) => error!("Signal handler error: {}", e),
    }
}

#[cfg(unix)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| Error::terminal(format!("Cannot listen for SIGINT: {}", e)))?;
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| Error::terminal(format!("Cannot listen for SIGTERM: {}", e)))?;

    Ok(tokio::select! {
        _ = sigint.recv() => ShutdownSignal::Interrupt,
        _ = sigterm.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_becomes_quit() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        forward_shutdown(async { Ok(ShutdownSignal::Terminate) }, tx).await;
        assert_eq!(rx.try_recv().ok(), Some(Message::Quit));
    }

    #[tokio::test]
    async fn test_listener_failure_sends_nothing() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        forward_shutdown(async { Err(Error::terminal("no signals here")) }, tx).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_closed_engine_is_tolerated() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);
        forward_shutdown(async { Ok(ShutdownSignal::Interrupt) }, tx).await;
    }

    #[tokio::test]
    async fn test_handler_stays_quiet_without_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        spawn_signal_handler(tx);

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_signal_names() {
        assert_eq!(ShutdownSignal::Interrupt.to_string(), "interrupt");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "terminate");
    }
}
