use serde::{Deserialize, Serialize};

/// Maximum number of participants a single room accepts
pub const MAX_USERS_PER_ROOM: usize = 3;

/// Maximum number of distinct cards selected in a room at once
pub const MAX_SELECTIONS: usize = 10;

/// A card held by one connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSelection {
    pub card_id: String,
    pub user_id: String,
}

/// Outcome of trying to select a card in a room
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Card was not selected before and has been added
    Added,
    /// Card was already selected; owner is now the requester
    Reassigned,
    /// Room already holds the maximum number of distinct cards
    LimitReached,
}

/// Outcome of trying to deselect a card in a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeselectOutcome {
    Removed,
    NotSelected,
    /// Card is held by another connection
    NotOwner { owner: String },
}

/// In-memory state of a single room
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomModel {
    pub id: String,
    /// Deck set recorded by the first joiner, fixed for the room's lifetime
    deck_set: String,
    /// Connection ids in join order
    participants: Vec<String>,
    /// Selections in insertion order; at most MAX_SELECTIONS entries
    selections: Vec<CardSelection>,
}

impl RoomModel {
    /// Creates an empty room bound to the given deck set
    pub fn new(id: String, deck_set: String) -> Self {
        Self {
            id,
            deck_set,
            participants: vec![],
            selections: vec![],
        }
    }

    pub fn deck_set(&self) -> &str {
        &self.deck_set
    }

    /// Check whether the supplied deck set matches the one the room was created with
    pub fn accepts_deck_set(&self, deck_set: &str) -> bool {
        self.deck_set == deck_set
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Check if room is at capacity
    pub fn is_full(&self) -> bool {
        self.participants.len() >= MAX_USERS_PER_ROOM
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn has_participant(&self, connection_id: &str) -> bool {
        self.participants.iter().any(|p| p == connection_id)
    }

    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    /// Add a participant; a no-op if already present. Capacity is checked by the caller.
    pub fn add_participant(&mut self, connection_id: String) {
        if !self.has_participant(&connection_id) {
            self.participants.push(connection_id);
        }
    }

    /// Remove a participant, returning whether it was present
    pub fn remove_participant(&mut self, connection_id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p != connection_id);
        self.participants.len() != before
    }

    pub fn selections(&self) -> &[CardSelection] {
        &self.selections
    }

    pub fn selection_owner(&self, card_id: &str) -> Option<&str> {
        self.selections
            .iter()
            .find(|s| s.card_id == card_id)
            .map(|s| s.user_id.as_str())
    }

    /// Select a card for a connection.
    ///
    /// Re-selecting an already selected card always succeeds and moves ownership to the
    /// requester; the selection cap only applies when a new card key would be added.
    pub fn select_card(&mut self, card_id: &str, connection_id: &str) -> SelectOutcome {
        if let Some(existing) = self.selections.iter_mut().find(|s| s.card_id == card_id) {
            existing.user_id = connection_id.to_string();
            return SelectOutcome::Reassigned;
        }

        if self.selections.len() >= MAX_SELECTIONS {
            return SelectOutcome::LimitReached;
        }

        self.selections.push(CardSelection {
            card_id: card_id.to_string(),
            user_id: connection_id.to_string(),
        });
        SelectOutcome::Added
    }

    /// Deselect a card, only if the requester owns it
    pub fn deselect_card(&mut self, card_id: &str, connection_id: &str) -> DeselectOutcome {
        let Some(index) = self.selections.iter().position(|s| s.card_id == card_id) else {
            return DeselectOutcome::NotSelected;
        };

        if self.selections[index].user_id != connection_id {
            return DeselectOutcome::NotOwner {
                owner: self.selections[index].user_id.clone(),
            };
        }

        self.selections.remove(index);
        DeselectOutcome::Removed
    }

    /// Remove every selection owned by a connection, returning the released card ids in order
    pub fn release_cards_of(&mut self, connection_id: &str) -> Vec<String> {
        let mut released = Vec::new();
        self.selections.retain(|s| {
            if s.user_id == connection_id {
                released.push(s.card_id.clone());
                false
            } else {
                true
            }
        });
        released
    }

    pub fn clear_selections(&mut self) {
        self.selections.clear();
    }
}
