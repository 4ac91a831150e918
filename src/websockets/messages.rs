use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::room::{CardSelection, RoomModel};

/// Message types for WebSocket communication
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, AsRefStr, EnumIter)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum MessageType {
    // Client -> Server
    JoinRoom,
    SelectCard,
    DeselectCard,
    ResetRoomCards,
    LeaveRoom,

    // Server -> Client
    CurrentSelectedCards,
    UserCountUpdate,
    CardSelected,
    CardDeselected,
    RoomCardsReset,
    ErrorJoiningRoom,
    RoomFull,
    MaxCardsReached,
}

/// Metadata for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSocketMessageMeta {
    pub timestamp: DateTime<Utc>,
    pub connection_id: Option<String>,
}

/// Base structure for WebSocket messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSocketMessage {
    #[serde(rename = "type")]
    pub message_type: MessageType,
    #[serde(default)]
    pub payload: serde_json::Value,
    #[serde(default)]
    pub meta: Option<WebSocketMessageMeta>,
}

/// Server-to-Client message payloads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSnapshotPayload {
    pub session_id: String,
    pub deck_set: String,
    pub selections: Vec<CardSelection>,
    pub user_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCountPayload {
    pub user_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardPayload {
    pub card_id: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmptyPayload {}

/// Helper functions for creating messages
impl WebSocketMessage {
    pub fn new(message_type: MessageType, payload: serde_json::Value) -> Self {
        Self {
            message_type,
            payload,
            meta: Some(WebSocketMessageMeta {
                timestamp: Utc::now(),
                connection_id: None,
            }),
        }
    }

    fn with_payload<T: Serialize>(
        message_type: MessageType,
        payload: T,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(message_type, serde_json::to_value(payload)?))
    }

    /// Create a CURRENT_SELECTED_CARDS snapshot of a room
    pub fn room_snapshot(room: &RoomModel) -> Result<Self, serde_json::Error> {
        Self::with_payload(
            MessageType::CurrentSelectedCards,
            RoomSnapshotPayload {
                session_id: room.id.clone(),
                deck_set: room.deck_set().to_string(),
                selections: room.selections().to_vec(),
                user_count: room.participant_count(),
            },
        )
    }

    pub fn user_count_update(user_count: usize) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::UserCountUpdate, UserCountPayload { user_count })
    }

    pub fn card_selected(card_id: String, user_id: String) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::CardSelected, CardPayload { card_id, user_id })
    }

    pub fn card_deselected(card_id: String, user_id: String) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::CardDeselected, CardPayload { card_id, user_id })
    }

    pub fn room_cards_reset() -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::RoomCardsReset, EmptyPayload {})
    }

    pub fn error_joining_room(message: String) -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::ErrorJoiningRoom, ErrorPayload { message })
    }

    pub fn room_full() -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::RoomFull, EmptyPayload {})
    }

    pub fn max_cards_reached() -> Result<Self, serde_json::Error> {
        Self::with_payload(MessageType::MaxCardsReached, EmptyPayload {})
    }
}
