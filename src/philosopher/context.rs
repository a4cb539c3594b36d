//! Dependencies handed to every philosopher when it sits down.

use crate::lifecycle::{DelayRange, TableConfig};
use crate::model::{DiningEvent, EventKind, PhilosopherId};
use tokio::sync::mpsc;

/// Optional subscriber to the dinner's event stream.
///
/// Sending never blocks. A dropped receiver is ignored.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    sender: Option<mpsc::UnboundedSender<DiningEvent>>,
}

impl EventSink {
    /// A sink that discards everything.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DiningEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender: Some(sender) }, receiver)
    }

    pub fn emit(&self, philosopher: PhilosopherId, kind: EventKind) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(DiningEvent { philosopher, kind });
        }
    }
}

/// Pacing and observation shared by every philosopher at a table.
#[derive(Debug, Clone)]
pub struct DiningContext {
    pub think: DelayRange,
    pub eat: DelayRange,
    pub retry_backoff: DelayRange,
    pub events: EventSink,
}

impl DiningContext {
    pub fn new(config: &TableConfig, events: EventSink) -> Self {
        Self {
            think: config.think,
            eat: config.eat,
            retry_backoff: config.retry_backoff,
            events,
        }
    }

    /// No delays beyond a scheduler yield, no events.
    pub fn instant() -> Self {
        Self {
            think: DelayRange::ZERO,
            eat: DelayRange::ZERO,
            retry_backoff: DelayRange::ZERO,
            events: EventSink::disabled(),
        }
    }

    pub fn with_events(mut self, events: EventSink) -> Self {
        self.events = events;
        self
    }
}
