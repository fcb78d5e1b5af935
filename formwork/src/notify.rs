//! Change notification for store subscribers.
//!
//! Consumers that re-render on state changes subscribe to the store and
//! block on [`StoreListener::changed`] instead of polling. Signals carry no
//! payload; after waking, the consumer reads the store's current snapshot.
//! Redundant buffered signals collapse into a single wake via `drain`.

use tokio::sync::mpsc;

/// Sender half of a change-notification channel.
#[derive(Clone, Debug)]
pub struct Notifier {
    tx: mpsc::Sender<()>,
}

impl Notifier {
    /// Send a change signal.
    ///
    /// Non-blocking. Errors are ignored: a full buffer means a wake is
    /// already pending, a closed receiver means the subscriber went away.
    pub fn signal(&self) {
        let _ = self.tx.try_send(());
    }

    /// Whether the subscriber is still listening.
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }
}

/// Receiver half of a change-notification channel.
#[derive(Debug)]
pub struct StoreListener {
    rx: mpsc::Receiver<()>,
}

impl StoreListener {
    /// Wait for the next change signal.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<()> {
        self.rx.recv().await
    }

    /// Drain all pending signals.
    ///
    /// Called after waking to consume redundant buffered signals so that a
    /// burst of mutations produces a single re-render.
    pub fn drain(&mut self) {
        while self.rx.try_recv().is_ok() {}
    }
}

/// Create a new change-notification channel pair.
pub fn channel() -> (Notifier, StoreListener) {
    let (tx, rx) = mpsc::channel(16);
    (Notifier { tx }, StoreListener { rx })
}
