use std::sync::Arc;

use crate::{
    event::RoomEventError,
    websockets::{ConnectionManager, WebSocketMessage},
};

/// Serializes outbound messages and hands them to the transport
pub struct MessageBroadcaster {
    connection_manager: Arc<dyn ConnectionManager>,
}

impl MessageBroadcaster {
    pub fn new(connection_manager: Arc<dyn ConnectionManager>) -> Self {
        Self { connection_manager }
    }

    /// Send a message to the originating connection only
    pub async fn send_to_connection(
        &self,
        connection_id: &str,
        message: &WebSocketMessage,
    ) -> Result<(), RoomEventError> {
        let message_json = serde_json::to_string(message)?;
        self.connection_manager
            .send_to_connection(connection_id, &message_json)
            .await;
        Ok(())
    }

    /// Send a message to every participant of a room
    pub async fn broadcast_to_room(
        &self,
        participants: &[String],
        message: &WebSocketMessage,
    ) -> Result<(), RoomEventError> {
        let message_json = serde_json::to_string(message)?;
        self.connection_manager
            .send_to_connections(participants, &message_json)
            .await;
        Ok(())
    }
}
