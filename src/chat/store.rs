use crate::common::{ChatMessage, MessageId};

use super::fixtures::FixtureMessage;

/// Ordered, append-only list of messages owned by one chat page.
#[derive(Debug, Clone, Default)]
pub struct MessageStore {
    messages: Vec<ChatMessage>,
}

impl MessageStore {
    /// Copies the fixture set into owned state, preserving order.
    pub fn initialize(fixtures: &[FixtureMessage]) -> Self {
        Self {
            messages: fixtures.iter().map(FixtureMessage::to_message).collect(),
        }
    }

    pub fn append(&mut self, message: ChatMessage) {
        log::debug!(
            "appending message {:?} from {} ({} total)",
            message.id,
            message.sender,
            self.messages.len() + 1
        );
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn last_id(&self) -> Option<MessageId> {
        self.messages.iter().map(|message| message.id).max()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[ChatMessage] {
        &self.messages
    }
}
