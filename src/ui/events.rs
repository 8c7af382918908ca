//! State-change events published to the view layer

use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 64;

/// Something the view may want to re-render for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// Submission busy flag changed
    CallingChanged(bool),
    /// Avatar loading flag changed
    LoadingChanged(bool),
    /// The controller-owned contact was replaced or mutated
    ContactChanged,
    /// Contact collection replaced, with its new length
    ContactsLoaded(usize),
    /// Location changed to the given path
    Navigated(String),
}

/// Broadcast channel for [`ViewEvent`]s
///
/// Publishing never fails: events sent while nobody listens are dropped.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ViewEvent>,
}

impl EventBus {
    /// Create a new bus
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CAPACITY);
        Self { sender }
    }

    /// Subscribe to future events
    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.sender.subscribe()
    }

    /// Publish an event
    pub fn publish(&self, event: ViewEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
