use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::{bus::EventReceiver, room_handler::RoomEventHandler};

/// Single dispatcher task that feeds room events to a handler one at a time
pub struct RoomSubscription<H> {
    handler: H,
    receiver: EventReceiver,
}

impl<H> RoomSubscription<H>
where
    H: RoomEventHandler + 'static,
{
    pub fn new(handler: H, receiver: EventReceiver) -> Self {
        Self { handler, receiver }
    }

    /// Start the subscription - spawns the dispatcher task.
    ///
    /// The task runs until every `EventBus` clone is dropped and hands the handler back.
    pub fn start(self) -> JoinHandle<H> {
        tokio::spawn(self.run())
    }

    /// Process events until the bus closes
    pub async fn run(mut self) -> H {
        let handler_name = self.handler.handler_name();
        info!(handler = handler_name, "Room dispatcher started");

        while let Some(event) = self.receiver.recv().await {
            debug!(
                handler = handler_name,
                event_type = event.event_type(),
                connection_id = %event.connection_id(),
                "Dispatching room event"
            );

            if let Err(e) = self.handler.handle_room_event(event).await {
                warn!(
                    handler = handler_name,
                    error = %e,
                    "Room event handler failed"
                );
            }
        }

        info!(handler = handler_name, "Room dispatcher stopped - no more events");
        self.handler
    }
}
