use tracing::{debug, info, instrument, warn};

use super::RoomCoordinator;
use crate::{
    event::RoomEventError,
    room::{DeselectOutcome, SelectOutcome},
    websockets::WebSocketMessage,
};

impl RoomCoordinator {
    #[instrument(skip(self))]
    pub(super) async fn handle_select_card(
        &mut self,
        connection_id: &str,
        room_id: &str,
        card_id: &str,
    ) -> Result<(), RoomEventError> {
        let (outcome, participants) = {
            let Some(room) = self.repository.get_mut(room_id) else {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    "Select in unknown room"
                );
                return Ok(());
            };
            if !room.has_participant(connection_id) {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    "Select from non-participant"
                );
                return Ok(());
            }
            (
                room.select_card(card_id, connection_id),
                room.participants().to_vec(),
            )
        };

        match outcome {
            SelectOutcome::Added | SelectOutcome::Reassigned => {
                info!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    card_id = %card_id,
                    outcome = ?outcome,
                    "Card selected"
                );
                let message = WebSocketMessage::card_selected(
                    card_id.to_string(),
                    connection_id.to_string(),
                )?;
                self.broadcaster
                    .broadcast_to_room(&participants, &message)
                    .await
            }
            SelectOutcome::LimitReached => {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    card_id = %card_id,
                    "Selection limit reached"
                );
                let message = WebSocketMessage::max_cards_reached()?;
                self.broadcaster
                    .send_to_connection(connection_id, &message)
                    .await
            }
        }
    }

    #[instrument(skip(self))]
    pub(super) async fn handle_deselect_card(
        &mut self,
        connection_id: &str,
        room_id: &str,
        card_id: &str,
    ) -> Result<(), RoomEventError> {
        let (outcome, participants) = {
            let Some(room) = self.repository.get_mut(room_id) else {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    "Deselect in unknown room"
                );
                return Ok(());
            };
            if !room.has_participant(connection_id) {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    "Deselect from non-participant"
                );
                return Ok(());
            }
            (
                room.deselect_card(card_id, connection_id),
                room.participants().to_vec(),
            )
        };

        match outcome {
            DeselectOutcome::Removed => {
                info!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    card_id = %card_id,
                    "Card deselected"
                );
                let message = WebSocketMessage::card_deselected(
                    card_id.to_string(),
                    connection_id.to_string(),
                )?;
                self.broadcaster
                    .broadcast_to_room(&participants, &message)
                    .await
            }
            DeselectOutcome::NotSelected => {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    card_id = %card_id,
                    "Deselect of a card that is not selected"
                );
                Ok(())
            }
            DeselectOutcome::NotOwner { owner } => {
                warn!(
                    room_id = %room_id,
                    connection_id = %connection_id,
                    card_id = %card_id,
                    owner = %owner,
                    "Tried to deselect another participant's card"
                );
                Ok(())
            }
        }
    }

    /// Clear every selection in the room. Any connection may trigger it; there is no host role.
    #[instrument(skip(self))]
    pub(super) async fn handle_reset_room_cards(
        &mut self,
        connection_id: &str,
        room_id: &str,
    ) -> Result<(), RoomEventError> {
        let participants = {
            let Some(room) = self.repository.get_mut(room_id) else {
                warn!(room_id = %room_id, connection_id = %connection_id, "Reset for unknown room");
                return Ok(());
            };
            debug!(
                room_id = %room_id,
                cleared = room.selections().len(),
                "Clearing room selections"
            );
            room.clear_selections();
            room.participants().to_vec()
        };

        info!(room_id = %room_id, triggered_by = %connection_id, "Room cards reset");
        let message = WebSocketMessage::room_cards_reset()?;
        self.broadcaster
            .broadcast_to_room(&participants, &message)
            .await
    }
}
