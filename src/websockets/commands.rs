//! Typed client commands.
//!
//! Raw frames are parsed into [`ClientCommand`] at the transport boundary so the
//! coordinator only ever sees well-formed requests.

use serde::Deserialize;
use thiserror::Error;

use super::messages::{MessageType, WebSocketMessage};

/// Errors produced while turning a frame into a command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid JSON frame: {0}")]
    InvalidFrame(String),

    #[error("Invalid payload for {message_type}: {reason}")]
    InvalidPayload {
        message_type: MessageType,
        reason: String,
    },

    #[error("Missing required field {field} for {message_type}")]
    MissingField {
        message_type: MessageType,
        field: &'static str,
    },

    #[error("{0} is not a client message")]
    NotAClientMessage(MessageType),
}

impl CommandError {
    /// Message type the failed frame declared, if it got that far
    pub fn message_type(&self) -> Option<MessageType> {
        match self {
            CommandError::InvalidFrame(_) => None,
            CommandError::InvalidPayload { message_type, .. }
            | CommandError::MissingField { message_type, .. } => Some(*message_type),
            CommandError::NotAClientMessage(message_type) => Some(*message_type),
        }
    }
}

/// A validated request from a connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    JoinRoom { room_id: String, deck_set: String },
    SelectCard { room_id: String, card_id: String },
    DeselectCard { room_id: String, card_id: String },
    ResetRoomCards { room_id: String },
    LeaveRoom { room_id: String },
}

impl ClientCommand {
    pub fn room_id(&self) -> &str {
        match self {
            ClientCommand::JoinRoom { room_id, .. }
            | ClientCommand::SelectCard { room_id, .. }
            | ClientCommand::DeselectCard { room_id, .. }
            | ClientCommand::ResetRoomCards { room_id }
            | ClientCommand::LeaveRoom { room_id } => room_id,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JoinRoomPayload {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    deck_set: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CardPayload {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    card_id: Option<String>,
}

/// `resetRoomCards` and `leaveRoom` carry the room id either bare or wrapped
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RoomRefPayload {
    Bare(String),
    #[serde(rename_all = "camelCase")]
    Wrapped {
        #[serde(default)]
        session_id: Option<String>,
    },
}

impl RoomRefPayload {
    fn into_room_id(self) -> Option<String> {
        match self {
            RoomRefPayload::Bare(room_id) => Some(room_id),
            RoomRefPayload::Wrapped { session_id } => session_id,
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    message_type: MessageType,
    payload: serde_json::Value,
) -> Result<T, CommandError> {
    // A frame without a payload is validated field by field like an empty object
    let payload = if payload.is_null() {
        serde_json::Value::Object(serde_json::Map::new())
    } else {
        payload
    };
    serde_json::from_value(payload).map_err(|e| CommandError::InvalidPayload {
        message_type,
        reason: e.to_string(),
    })
}

fn required(
    message_type: MessageType,
    field: &'static str,
    value: Option<String>,
) -> Result<String, CommandError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(CommandError::MissingField {
            message_type,
            field,
        }),
    }
}

impl TryFrom<WebSocketMessage> for ClientCommand {
    type Error = CommandError;

    fn try_from(message: WebSocketMessage) -> Result<Self, Self::Error> {
        let message_type = message.message_type;
        match message_type {
            MessageType::JoinRoom => {
                let payload: JoinRoomPayload = decode(message_type, message.payload)?;
                Ok(ClientCommand::JoinRoom {
                    room_id: required(message_type, "sessionId", payload.session_id)?,
                    deck_set: required(message_type, "deckSet", payload.deck_set)?,
                })
            }
            MessageType::SelectCard | MessageType::DeselectCard => {
                let payload: CardPayload = decode(message_type, message.payload)?;
                let room_id = required(message_type, "sessionId", payload.session_id)?;
                let card_id = required(message_type, "cardId", payload.card_id)?;
                if message_type == MessageType::SelectCard {
                    Ok(ClientCommand::SelectCard { room_id, card_id })
                } else {
                    Ok(ClientCommand::DeselectCard { room_id, card_id })
                }
            }
            MessageType::ResetRoomCards | MessageType::LeaveRoom => {
                let payload: RoomRefPayload = decode(message_type, message.payload)?;
                let room_id = required(message_type, "sessionId", payload.into_room_id())?;
                if message_type == MessageType::ResetRoomCards {
                    Ok(ClientCommand::ResetRoomCards { room_id })
                } else {
                    Ok(ClientCommand::LeaveRoom { room_id })
                }
            }
            other => Err(CommandError::NotAClientMessage(other)),
        }
    }
}

impl ClientCommand {
    /// Parse a raw text frame into a command
    pub fn parse(frame: &str) -> Result<Self, CommandError> {
        let message: WebSocketMessage =
            serde_json::from_str(frame).map_err(|e| CommandError::InvalidFrame(e.to_string()))?;
        Self::try_from(message)
    }
}
