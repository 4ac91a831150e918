// Library crate for the card room server
// This file exposes the public API for integration tests

pub mod config;
pub mod coordinator;
pub mod event;
pub mod room;
pub mod routes;
pub mod shared;
pub mod websockets;

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use coordinator::RoomCoordinator;
pub use event::{EventBus, RoomEvent, RoomSubscription};
pub use room::{InMemoryRoomRepository, RoomModel, RoomRepository};
pub use shared::{AppError, AppState};
pub use websockets::{
    ClientCommand, ConnectionManager, InMemoryConnectionManager, MessageHandler, MessageType,
    WebSocketMessage, WebsocketReceiveHandler,
};
