use std::sync::Arc;

use cardroom::{
    event::{EventBus, EventReceiver, RoomEventHandler},
    room::{InMemoryRoomRepository, RoomModel},
    RoomCoordinator, WebsocketReceiveHandler,
};

use super::mocks::MockConnectionManager;

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

/// A coordinator wired to a mock transport.
///
/// Frames go through the real receive handler and event bus; queued events are drained
/// into the coordinator right away so every action is fully processed when it returns.
pub struct TestSetup {
    pub coordinator: RoomCoordinator,
    pub mock_conn_manager: Arc<MockConnectionManager>,
    pub input_handler: WebsocketReceiveHandler,
    pub event_bus: EventBus,
    receiver: EventReceiver,
}

impl TestSetup {
    pub fn new() -> Self {
        let (event_bus, receiver) = EventBus::channel();
        let mock_conn_manager = Arc::new(MockConnectionManager::new());
        let coordinator = RoomCoordinator::new(
            Box::new(InMemoryRoomRepository::new()),
            mock_conn_manager.clone(),
        );

        Self {
            coordinator,
            mock_conn_manager,
            input_handler: WebsocketReceiveHandler::new(event_bus.clone()),
            event_bus,
            receiver,
        }
    }

    /// Run every queued event through the coordinator
    pub async fn process_pending(&mut self) {
        while let Ok(event) = self.receiver.try_recv() {
            self.coordinator
                .handle_room_event(event)
                .await
                .expect("room event should be handled");
        }
    }

    pub fn room(&self, room_id: &str) -> Option<&RoomModel> {
        self.coordinator.repository().get(room_id)
    }

    pub fn room_count(&self) -> usize {
        self.coordinator.repository().room_count()
    }
}
