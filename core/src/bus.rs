use crate::theme::ThemeId;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};

/// Same-process theme change notification.
///
/// Published by the controller that performed a change, so that other
/// independently-initialized listeners in the same process (e.g. a second
/// controller on the same screen) can refresh without re-reading storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeEvent {
    /// The theme changed; `None` means "reset to default".
    Changed(Option<ThemeId>),
}

/// Fan-out pub-sub channel for [`ThemeEvent`]s.
///
/// Subscribers get their own `mpsc::Receiver` and decide when to drain it,
/// which keeps delivery deterministic in a single-threaded event loop:
/// nothing runs until the loop polls. Handles are cheap to clone and share
/// one subscriber list.
#[derive(Clone, Default)]
pub struct EventBus {
    senders: Arc<Mutex<Vec<Sender<ThemeEvent>>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber and return its receiving end.
    pub fn subscribe(&self) -> Receiver<ThemeEvent> {
        let (tx, rx) = channel();
        self.senders
            .lock()
            .expect("event bus subscriber list poisoned")
            .push(tx);
        rx
    }

    /// Deliver an event to every live subscriber, dropping the ones whose
    /// receiver has gone away.
    pub fn publish(&self, event: ThemeEvent) {
        let mut senders = self
            .senders
            .lock()
            .expect("event bus subscriber list poisoned");
        senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Number of live subscribers, for diagnostics.
    pub fn subscriber_count(&self) -> usize {
        self.senders
            .lock()
            .expect("event bus subscriber list poisoned")
            .len()
    }
}
