use async_trait::async_trait;
use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::event::{EventBus, RoomEvent};
use crate::shared::AppState;

use super::commands::ClientCommand;
use super::messages::MessageType;
use super::socket::{Connection, MessageHandler};

/// Message handler for receiving WebSocket messages from the client
///
/// Parses every frame into a [`ClientCommand`] and queues it for the room coordinator.
pub struct WebsocketReceiveHandler {
    event_bus: EventBus,
}

impl WebsocketReceiveHandler {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

#[async_trait]
impl MessageHandler for WebsocketReceiveHandler {
    async fn handle_message(&self, connection_id: &str, message: String) {
        debug!(
            connection_id = %connection_id,
            message = %message,
            "Received message"
        );

        match ClientCommand::parse(&message) {
            Ok(command) => {
                debug!(
                    connection_id = %connection_id,
                    room_id = %command.room_id(),
                    "Queueing command"
                );
                self.event_bus.emit(RoomEvent::Command {
                    connection_id: connection_id.to_string(),
                    command,
                });
            }
            Err(e) if e.message_type() == Some(MessageType::JoinRoom) => {
                warn!(connection_id = %connection_id, error = %e, "Invalid joinRoom request");
                self.event_bus.emit(RoomEvent::InvalidJoin {
                    connection_id: connection_id.to_string(),
                });
            }
            Err(e) => {
                warn!(
                    connection_id = %connection_id,
                    error = %e,
                    "Dropping invalid WebSocket message"
                );
            }
        }
    }
}

/// WebSocket endpoint
/// GET /ws - every upgraded socket gets a fresh connection id
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(app_state): State<AppState>,
) -> Response {
    let connection_id = Uuid::new_v4().to_string();
    debug!(connection_id = %connection_id, "WebSocket connection requested");

    ws.on_upgrade(move |socket| handle_websocket_connection(socket, connection_id, app_state))
}

/// Handle the upgraded WebSocket connection
async fn handle_websocket_connection(
    socket: axum::extract::ws::WebSocket,
    connection_id: String,
    app_state: AppState,
) {
    // Create the outbound channel (app -> client)
    let (outbound_sender, outbound_receiver) = mpsc::unbounded_channel::<String>();
    app_state
        .connection_manager
        .add_connection(connection_id.clone(), outbound_sender)
        .await;
    let active_connections = app_state.connection_manager.connection_count().await;
    info!(
        connection_id = %connection_id,
        active_connections = active_connections,
        "WebSocket connection established"
    );

    let message_handler = Arc::new(WebsocketReceiveHandler::new(app_state.event_bus.clone()));
    let connection = Connection::new(
        connection_id.clone(),
        Box::new(socket),
        outbound_receiver,
        message_handler,
    );

    // Run the connection until disconnect
    match connection.run().await {
        Ok(()) => info!(connection_id = %connection_id, "WebSocket connection closed cleanly"),
        Err(e) => warn!(
            connection_id = %connection_id,
            error = ?e,
            "WebSocket connection error"
        ),
    }

    // Cleanup: stop delivering to this socket, then let the coordinator reconcile room state
    app_state
        .connection_manager
        .remove_connection(&connection_id)
        .await;
    app_state.event_bus.emit(RoomEvent::Disconnected {
        connection_id: connection_id.clone(),
    });

    info!(connection_id = %connection_id, "WebSocket disconnect event emitted");
}
