use serde_json::json;

use cardroom::{
    event::RoomEvent,
    websockets::{MessageHandler, MessageType, WebSocketMessage},
};

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a raw frame from a connection and process it
    pub async fn send_raw(&mut self, connection_id: &str, frame: &str) {
        self.input_handler
            .handle_message(connection_id, frame.to_string())
            .await;
        self.process_pending().await;
    }

    /// Send a WebSocket message from a connection and process it
    pub async fn send_message(&mut self, connection_id: &str, message: WebSocketMessage) {
        let frame = serde_json::to_string(&message).unwrap();
        self.send_raw(connection_id, &frame).await;
    }

    /// Clear all recorded messages
    pub async fn clear_messages(&self) {
        self.mock_conn_manager.clear_messages().await;
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn join(&mut self, connection_id: &str, room_id: &str, deck_set: &str) {
        self.send_message(
            connection_id,
            WebSocketMessage::new(
                MessageType::JoinRoom,
                json!({ "sessionId": room_id, "deckSet": deck_set }),
            ),
        )
        .await;
    }

    pub async fn select(&mut self, connection_id: &str, room_id: &str, card_id: &str) {
        self.send_message(
            connection_id,
            WebSocketMessage::new(
                MessageType::SelectCard,
                json!({ "sessionId": room_id, "cardId": card_id }),
            ),
        )
        .await;
    }

    pub async fn deselect(&mut self, connection_id: &str, room_id: &str, card_id: &str) {
        self.send_message(
            connection_id,
            WebSocketMessage::new(
                MessageType::DeselectCard,
                json!({ "sessionId": room_id, "cardId": card_id }),
            ),
        )
        .await;
    }

    pub async fn reset(&mut self, connection_id: &str, room_id: &str) {
        self.send_message(
            connection_id,
            WebSocketMessage::new(MessageType::ResetRoomCards, json!(room_id)),
        )
        .await;
    }

    pub async fn leave(&mut self, connection_id: &str, room_id: &str) {
        self.send_message(
            connection_id,
            WebSocketMessage::new(MessageType::LeaveRoom, json!(room_id)),
        )
        .await;
    }

    /// Simulate the transport's terminal disconnect notification
    pub async fn disconnect(&mut self, connection_id: &str) {
        self.event_bus.emit(RoomEvent::Disconnected {
            connection_id: connection_id.to_string(),
        });
        self.process_pending().await;
    }
}
