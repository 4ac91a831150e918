//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use cardroom::websockets::{MessageType, WebSocketMessage};

use super::setup::TestSetup;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct MessageAssertion<'a> {
    setup: &'a TestSetup,
    connections: Vec<&'a str>,
}

impl<'a> MessageAssertion<'a> {
    /// Create an assertion for specific connections
    pub fn for_connections(setup: &'a TestSetup, connections: Vec<&'a str>) -> Self {
        Self { setup, connections }
    }

    pub fn for_connection(setup: &'a TestSetup, connection: &'a str) -> Self {
        Self::for_connections(setup, vec![connection])
    }

    /// Assert that every connection's next message has the given type (consumes it)
    pub async fn received_message_type(self, expected_type: MessageType) -> MessageContent {
        let mut messages = vec![];

        for connection in &self.connections {
            let message = self
                .setup
                .mock_conn_manager
                .consume_message_for(connection)
                .await;
            assert!(
                message.is_some(),
                "{} should have received a {} message",
                connection,
                expected_type
            );

            let msg: WebSocketMessage = serde_json::from_str(&message.unwrap()).unwrap();
            assert_eq!(
                msg.message_type, expected_type,
                "{} received wrong message type",
                connection
            );
            messages.push(msg);
        }

        // Broadcasts carry the same payload to everyone
        let first_payload = &messages[0].payload;
        for (i, msg) in messages.iter().enumerate().skip(1) {
            assert_eq!(
                &msg.payload, first_payload,
                "{} payload differs from {}",
                self.connections[i], self.connections[0]
            );
        }

        MessageContent {
            payload: messages[0].payload.clone(),
        }
    }

    /// Assert that the connections have no unread messages
    pub async fn received_no_messages(self) {
        for connection in &self.connections {
            let messages = self
                .setup
                .mock_conn_manager
                .get_messages_for(connection)
                .await;
            assert!(
                messages.is_empty(),
                "{} should not have received any messages, got {:?}",
                connection,
                messages
            );
        }
    }

    /// Assert the full sequence of unread message types, in order (non-consuming)
    pub async fn received_message_sequence(self, expected_types: Vec<MessageType>) {
        for connection in &self.connections {
            let messages = self
                .setup
                .mock_conn_manager
                .get_messages_for(connection)
                .await;
            let actual: Vec<MessageType> = messages
                .iter()
                .map(|m| {
                    serde_json::from_str::<WebSocketMessage>(m)
                        .unwrap()
                        .message_type
                })
                .collect();
            assert_eq!(
                actual, expected_types,
                "{} received unexpected message sequence",
                connection
            );
        }
    }
}

// ============================================================================
// Message Content Assertions
// ============================================================================

pub struct MessageContent {
    pub payload: serde_json::Value,
}

impl MessageContent {
    pub fn with_card(self, expected_card: &str) -> Self {
        assert_eq!(self.payload["cardId"], expected_card);
        self
    }

    pub fn with_user(self, expected_user: &str) -> Self {
        assert_eq!(self.payload["userId"], expected_user);
        self
    }

    pub fn with_user_count(self, expected_count: usize) -> Self {
        assert_eq!(self.payload["userCount"], expected_count);
        self
    }

    pub fn with_session(self, expected_session: &str) -> Self {
        assert_eq!(self.payload["sessionId"], expected_session);
        self
    }

    pub fn with_deck_set(self, expected_deck_set: &str) -> Self {
        assert_eq!(self.payload["deckSet"], expected_deck_set);
        self
    }

    /// Assert snapshot selections as (card, user) pairs, in order
    pub fn with_selections(self, expected: Vec<(&str, &str)>) -> Self {
        let actual: Vec<(String, String)> = self.payload["selections"]
            .as_array()
            .expect("selections should be an array")
            .iter()
            .map(|s| {
                (
                    s["cardId"].as_str().unwrap().to_string(),
                    s["userId"].as_str().unwrap().to_string(),
                )
            })
            .collect();
        let expected: Vec<(String, String)> = expected
            .into_iter()
            .map(|(c, u)| (c.to_string(), u.to_string()))
            .collect();
        assert_eq!(actual, expected);
        self
    }

    pub fn with_message(self, expected_message: &str) -> Self {
        assert_eq!(self.payload["message"], expected_message);
        self
    }
}
