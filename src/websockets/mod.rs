// Public API
pub use commands::{ClientCommand, CommandError};
pub use connection_manager::{ConnectionManager, InMemoryConnectionManager};
pub use handler::{websocket_handler, WebsocketReceiveHandler};
pub use messages::{MessageType, WebSocketMessage};
pub use socket::MessageHandler;

// Internal modules
mod commands;
mod connection_manager;
mod handler;
mod messages;
mod socket;
