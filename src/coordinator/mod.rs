//! Room coordinator: the protocol state machine.
//!
//! Validates each room event against registry state, mutates the registry and emits
//! the resulting messages through the transport.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::{
    event::{RoomEvent, RoomEventError, RoomEventHandler},
    room::RoomRepository,
    websockets::{ClientCommand, ConnectionManager},
};

pub use broadcast::MessageBroadcaster;

mod broadcast;
mod card_events;
mod room_events;

/// Sent with `errorJoiningRoom` when a join frame lacks a room or deck set
pub const INVALID_JOIN_MESSAGE: &str = "Invalid room or card set information.";

/// Sent with `errorJoiningRoom` when the deck set differs from the room's
pub const DECK_SET_MISMATCH_MESSAGE: &str = "This room was set up with a different card set.";

pub struct RoomCoordinator {
    repository: Box<dyn RoomRepository>,
    /// connection id -> room the connection is currently in
    current_rooms: HashMap<String, String>,
    broadcaster: MessageBroadcaster,
}

impl RoomCoordinator {
    pub fn new(
        repository: Box<dyn RoomRepository>,
        connection_manager: Arc<dyn ConnectionManager>,
    ) -> Self {
        Self {
            repository,
            current_rooms: HashMap::new(),
            broadcaster: MessageBroadcaster::new(connection_manager),
        }
    }

    /// Read-only view of the registry
    pub fn repository(&self) -> &dyn RoomRepository {
        self.repository.as_ref()
    }

    /// Room the connection is currently in, if any
    pub fn current_room_of(&self, connection_id: &str) -> Option<&str> {
        self.current_rooms.get(connection_id).map(String::as_str)
    }
}

#[async_trait]
impl RoomEventHandler for RoomCoordinator {
    async fn handle_room_event(&mut self, event: RoomEvent) -> Result<(), RoomEventError> {
        debug!(event_type = event.event_type(), "Handling room event");

        match event {
            RoomEvent::Command {
                connection_id,
                command,
            } => match command {
                ClientCommand::JoinRoom { room_id, deck_set } => {
                    self.handle_join(&connection_id, &room_id, &deck_set).await
                }
                ClientCommand::SelectCard { room_id, card_id } => {
                    self.handle_select_card(&connection_id, &room_id, &card_id)
                        .await
                }
                ClientCommand::DeselectCard { room_id, card_id } => {
                    self.handle_deselect_card(&connection_id, &room_id, &card_id)
                        .await
                }
                ClientCommand::ResetRoomCards { room_id } => {
                    self.handle_reset_room_cards(&connection_id, &room_id).await
                }
                ClientCommand::LeaveRoom { room_id } => {
                    self.handle_leave(&connection_id, &room_id).await
                }
            },
            RoomEvent::InvalidJoin { connection_id } => {
                self.reject_join(&connection_id, INVALID_JOIN_MESSAGE).await
            }
            RoomEvent::Disconnected { connection_id } => {
                self.handle_disconnect(&connection_id).await
            }
        }
    }

    fn handler_name(&self) -> &'static str {
        "RoomCoordinator"
    }
}
