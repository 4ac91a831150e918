use std::collections::HashMap;
use tracing::{debug, info, instrument};

use super::models::RoomModel;

/// Trait for room registry operations
///
/// The registry is owned by a single coordinator and only ever touched from one task,
/// so implementations need no internal locking.
pub trait RoomRepository: Send + Sync {
    /// Fetch a room, creating it bound to `deck_set` if it does not exist yet.
    /// Returns the room and whether it was just created. The deck set of an existing
    /// room is never changed.
    fn get_or_create(&mut self, room_id: &str, deck_set: &str) -> (&mut RoomModel, bool);

    fn get(&self, room_id: &str) -> Option<&RoomModel>;

    fn get_mut(&mut self, room_id: &str) -> Option<&mut RoomModel>;

    /// Remove the room iff it has no participants. Returns whether a room was removed.
    fn destroy_if_empty(&mut self, room_id: &str) -> bool;

    fn room_count(&self) -> usize;
}

/// In-memory implementation of RoomRepository
#[derive(Debug, Default)]
pub struct InMemoryRoomRepository {
    rooms: HashMap<String, RoomModel>,
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory registry
    pub fn new() -> Self {
        Self::default()
    }
}

impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self))]
    fn get_or_create(&mut self, room_id: &str, deck_set: &str) -> (&mut RoomModel, bool) {
        let mut created = false;
        let room = self.rooms.entry(room_id.to_string()).or_insert_with(|| {
            created = true;
            info!(room_id = %room_id, deck_set = %deck_set, "Room created");
            RoomModel::new(room_id.to_string(), deck_set.to_string())
        });
        (room, created)
    }

    fn get(&self, room_id: &str) -> Option<&RoomModel> {
        self.rooms.get(room_id)
    }

    fn get_mut(&mut self, room_id: &str) -> Option<&mut RoomModel> {
        self.rooms.get_mut(room_id)
    }

    #[instrument(skip(self))]
    fn destroy_if_empty(&mut self, room_id: &str) -> bool {
        match self.rooms.get(room_id) {
            Some(room) if room.is_empty() => {
                self.rooms.remove(room_id);
                info!(room_id = %room_id, "Room is empty, destroyed");
                true
            }
            Some(room) => {
                debug!(
                    room_id = %room_id,
                    participant_count = room.participant_count(),
                    "Room still has participants, keeping it"
                );
                false
            }
            None => {
                debug!(room_id = %room_id, "Room already gone");
                false
            }
        }
    }

    fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
