use crate::websockets::ClientCommand;

/// Events delivered to the room coordinator
///
/// Every inbound frame and every terminal disconnect becomes exactly one event,
/// processed one at a time in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// A validated command sent by a connection
    Command {
        connection_id: String,
        command: ClientCommand,
    },

    /// A join frame that failed validation; the sender gets an error back
    InvalidJoin { connection_id: String },

    /// The connection is gone; delivered once, after which no other event for it arrives
    Disconnected { connection_id: String },
}

impl RoomEvent {
    pub fn connection_id(&self) -> &str {
        match self {
            RoomEvent::Command { connection_id, .. }
            | RoomEvent::InvalidJoin { connection_id }
            | RoomEvent::Disconnected { connection_id } => connection_id,
        }
    }

    /// Get a human-readable description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            RoomEvent::Command { command, .. } => match command {
                ClientCommand::JoinRoom { .. } => "join_room",
                ClientCommand::SelectCard { .. } => "select_card",
                ClientCommand::DeselectCard { .. } => "deselect_card",
                ClientCommand::ResetRoomCards { .. } => "reset_room_cards",
                ClientCommand::LeaveRoom { .. } => "leave_room",
            },
            RoomEvent::InvalidJoin { .. } => "invalid_join",
            RoomEvent::Disconnected { .. } => "disconnected",
        }
    }
}
