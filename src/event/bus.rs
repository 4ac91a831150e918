use tokio::sync::mpsc;
use tracing::{debug, warn};

use super::events::RoomEvent;

pub type EventReceiver = mpsc::UnboundedReceiver<RoomEvent>;

/// Event bus funnelling every connection's events into the single room dispatcher
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: mpsc::UnboundedSender<RoomEvent>,
}

impl EventBus {
    /// Creates a bus together with the receiver the dispatcher consumes
    pub fn channel() -> (Self, EventReceiver) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Queues an event for the dispatcher
    pub fn emit(&self, event: RoomEvent) {
        let event_type = event.event_type();
        match self.sender.send(event) {
            Ok(()) => debug!(event_type, "Room event queued"),
            Err(err) => warn!(
                event_type,
                connection_id = %err.0.connection_id(),
                "Room dispatcher is gone, dropping event"
            ),
        }
    }
}
