use async_trait::async_trait;
use thiserror::Error;

use super::events::RoomEvent;

/// Errors that can occur when handling room events
#[derive(Debug, Error)]
pub enum RoomEventError {
    #[error("Failed to serialize message: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Trait for components that consume room events
///
/// Handlers take `&mut self`: the dispatcher owns its handler and awaits each event to
/// completion before taking the next, so state behind a handler is never touched concurrently.
#[async_trait]
pub trait RoomEventHandler: Send {
    async fn handle_room_event(&mut self, event: RoomEvent) -> Result<(), RoomEventError>;

    /// Get a human-readable name for this handler (for logging/debugging)
    fn handler_name(&self) -> &'static str;
}
