//! Periodic auto-advance timer
//!
//! At most one timer task is alive at a time. Starting replaces whatever was
//! running; the task only posts [`Message::AutoAdvanceTick`] and leaves the
//! decision to advance or stop to the update function.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::message::Message;

#[derive(Debug, Default)]
pub struct AutoAdvanceTimer {
    task: Option<JoinHandle<()>>,
}

impl AutoAdvanceTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start ticking every `interval`, cancelling any previous timer first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, interval: Duration, tx: mpsc::Sender<Message>) {
        self.stop();
        debug!("Starting auto-advance timer ({:?})", interval);

        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval_at(
                tokio::time::Instant::now() + interval,
                interval,
            );
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                trace!("Auto-advance tick");
                if tx.send(Message::AutoAdvanceTick).await.is_err() {
                    break;
                }
            }
        }));
    }

    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            debug!("Stopping auto-advance timer");
            task.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for AutoAdvanceTimer {
    fn drop(&mut self) {
        self.stop();
    }
}
