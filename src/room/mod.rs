// Public API - what other modules can use
pub use models::{
    CardSelection, DeselectOutcome, RoomModel, SelectOutcome, MAX_SELECTIONS, MAX_USERS_PER_ROOM,
};
pub use repository::{InMemoryRoomRepository, RoomRepository};

// Internal modules
pub mod models;
pub mod repository;
