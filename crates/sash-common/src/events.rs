use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::PaneSize;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    PaneSizesChanged(Vec<PaneSize>),
    DragStarted { divider: usize },
    DragEnded { divider: usize },
    CardCreated(String),
    Shutdown,
    #[serde(other)]
    Unknown,
}

pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    /// Publish to all current subscribers. Returns how many received it;
    /// zero when nobody is listening.
    pub fn publish(&self, event: Event) -> usize {
        tracing::trace!(?event, "event bus publish");
        self.sender.send(event).unwrap_or(0)
    }
}
