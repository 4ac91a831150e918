use std::sync::Arc;
use thiserror::Error;

use crate::config::ConfigError;
use crate::event::EventBus;
use crate::websockets::ConnectionManager;

/// Shared application state handed to HTTP and WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub connection_manager: Arc<dyn ConnectionManager>,
    pub event_bus: EventBus,
}

impl AppState {
    pub fn new(connection_manager: Arc<dyn ConnectionManager>, event_bus: EventBus) -> Self {
        Self {
            connection_manager,
            event_bus,
        }
    }
}

/// Process-level errors surfaced from `main`
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid CORS origin: {0}")]
    InvalidOrigin(String),
}
