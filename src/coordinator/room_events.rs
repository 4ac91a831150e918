use tracing::{debug, info, instrument, warn};

use super::{RoomCoordinator, DECK_SET_MISMATCH_MESSAGE};
use crate::{event::RoomEventError, websockets::WebSocketMessage};

impl RoomCoordinator {
    /// Send `errorJoiningRoom` to the sender only
    pub(super) async fn reject_join(
        &self,
        connection_id: &str,
        reason: &str,
    ) -> Result<(), RoomEventError> {
        warn!(connection_id = %connection_id, reason = %reason, "Join rejected");
        let message = WebSocketMessage::error_joining_room(reason.to_string())?;
        self.broadcaster
            .send_to_connection(connection_id, &message)
            .await
    }

    #[instrument(skip(self))]
    pub(super) async fn handle_join(
        &mut self,
        connection_id: &str,
        room_id: &str,
        deck_set: &str,
    ) -> Result<(), RoomEventError> {
        if let Some(room) = self.repository.get(room_id) {
            if !room.accepts_deck_set(deck_set) {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    requested_deck_set = %deck_set,
                    room_deck_set = %room.deck_set(),
                    "Deck set mismatch"
                );
                return self
                    .reject_join(connection_id, DECK_SET_MISMATCH_MESSAGE)
                    .await;
            }

            if room.is_full() {
                info!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    "Room is full, join rejected"
                );
                let message = WebSocketMessage::room_full()?;
                return self
                    .broadcaster
                    .send_to_connection(connection_id, &message)
                    .await;
            }
        }

        // A connection lives in at most one room; switching rooms leaves the old one
        if let Some(previous) = self.current_rooms.get(connection_id).cloned() {
            if previous != room_id {
                debug!(
                    connection_id = %connection_id,
                    previous_room = %previous,
                    "Connection switching rooms, leaving previous room"
                );
                self.remove_from_room(connection_id, &previous).await?;
            }
        }

        let (snapshot, count_update, participants) = {
            let (room, created) = self.repository.get_or_create(room_id, deck_set);
            if created {
                debug!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    "First joiner set the deck"
                );
            }
            room.add_participant(connection_id.to_string());
            (
                WebSocketMessage::room_snapshot(room)?,
                WebSocketMessage::user_count_update(room.participant_count())?,
                room.participants().to_vec(),
            )
        };
        self.current_rooms
            .insert(connection_id.to_string(), room_id.to_string());

        info!(
            room_id = %room_id,
            connection_id = %connection_id,
            user_count = participants.len(),
            "Connection joined room"
        );

        self.broadcaster
            .send_to_connection(connection_id, &snapshot)
            .await?;
        self.broadcaster
            .broadcast_to_room(&participants, &count_update)
            .await
    }

    #[instrument(skip(self))]
    pub(super) async fn handle_leave(
        &mut self,
        connection_id: &str,
        room_id: &str,
    ) -> Result<(), RoomEventError> {
        self.remove_from_room(connection_id, room_id).await
    }

    #[instrument(skip(self))]
    pub(super) async fn handle_disconnect(
        &mut self,
        connection_id: &str,
    ) -> Result<(), RoomEventError> {
        match self.current_rooms.get(connection_id).cloned() {
            Some(room_id) => self.remove_from_room(connection_id, &room_id).await,
            None => {
                debug!(connection_id = %connection_id, "Disconnected outside of any room");
                Ok(())
            }
        }
    }

    /// Remove a participant, release its cards and destroy the room once empty
    async fn remove_from_room(
        &mut self,
        connection_id: &str,
        room_id: &str,
    ) -> Result<(), RoomEventError> {
        let (released, remaining) = {
            let Some(room) = self.repository.get_mut(room_id) else {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    "Leave for unknown room"
                );
                return Ok(());
            };
            if !room.remove_participant(connection_id) {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    "Leave from room the connection is not in"
                );
                return Ok(());
            }
            (room.release_cards_of(connection_id), room.participants().to_vec())
        };

        if self.current_room_of(connection_id) == Some(room_id) {
            self.current_rooms.remove(connection_id);
        }

        info!(
            room_id = %room_id,
            connection_id = %connection_id,
            released_cards = released.len(),
            remaining = remaining.len(),
            "Connection left room"
        );

        for card_id in released {
            let message =
                WebSocketMessage::card_deselected(card_id, connection_id.to_string())?;
            self.broadcaster
                .broadcast_to_room(&remaining, &message)
                .await?;
        }

        if remaining.is_empty() {
            if self.repository.destroy_if_empty(room_id) {
                info!(
                    room_id = %room_id,
                    open_rooms = self.repository.room_count(),
                    "Room destroyed"
                );
            }
            return Ok(());
        }

        let message = WebSocketMessage::user_count_update(remaining.len())?;
        self.broadcaster
            .broadcast_to_room(&remaining, &message)
            .await
    }
}
