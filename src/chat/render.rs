//! Projection of the message list into display rows.

use crate::common::{ChatMessage, Classification, Rgb, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Start,
    End,
}

/// One visual bubble. Every optional decoration is resolved here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row<'a> {
    pub sender: &'a str,
    pub content: &'a str,
    pub timestamp: &'a str,
    pub alignment: Alignment,
    pub show_sender: bool,
    pub shape: Shape,
    pub accent: Rgb,
    pub role: Option<&'a str>,
    pub classification: Option<Classification>,
}

impl<'a> Row<'a> {
    pub fn project(message: &'a ChatMessage) -> Self {
        let decoration = &message.decoration;
        Self {
            sender: &message.sender,
            content: &message.content,
            timestamp: &message.timestamp,
            alignment: if message.is_own {
                Alignment::End
            } else {
                Alignment::Start
            },
            show_sender: !message.is_own,
            shape: decoration.shape.unwrap_or_default(),
            accent: decoration.color.unwrap_or(Rgb::TEAL),
            role: decoration.role.as_deref(),
            classification: decoration.classification,
        }
    }

    pub fn is_own(&self) -> bool {
        self.alignment == Alignment::End
    }
}

pub type Rows<'a> =
    std::iter::Map<std::slice::Iter<'a, ChatMessage>, fn(&'a ChatMessage) -> Row<'a>>;

/// Lazy, restartable (`Clone`) sequence of rows in insertion order.
pub fn rows<'a>(messages: &'a [ChatMessage]) -> Rows<'a> {
    messages
        .iter()
        .map(Row::project as fn(&'a ChatMessage) -> Row<'a>)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::fixtures::{ENTERPRISE_MESSAGES, FREE_MESSAGES};
    use crate::chat::store::MessageStore;

    #[test]
    fn rows_follow_insertion_order_and_ownership() {
        let store = MessageStore::initialize(FREE_MESSAGES);
        let alignments = rows(store.as_slice())
            .map(|row| row.alignment)
            .collect::<Vec<_>>();
        assert_eq!(alignments, [Alignment::Start, Alignment::End, Alignment::Start]);
    }

    #[test]
    fn missing_decoration_falls_back_to_defaults() {
        let store = MessageStore::initialize(FREE_MESSAGES);
        let row = rows(store.as_slice()).next().unwrap();
        assert_eq!(row.shape, Shape::Torus);
        assert_eq!(row.accent, Rgb::TEAL);
        assert_eq!(row.role, None);
        assert_eq!(row.classification, None);
        assert!(row.show_sender);
    }

    #[test]
    fn rows_can_be_restarted() {
        let store = MessageStore::initialize(ENTERPRISE_MESSAGES);
        let rows = rows(store.as_slice());
        let first = rows.clone().map(|r| r.content).collect::<Vec<_>>();
        let second = rows.map(|r| r.content).collect::<Vec<_>>();
        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn own_rows_hide_the_sender_header() {
        let store = MessageStore::initialize(ENTERPRISE_MESSAGES);
        let own = rows(store.as_slice()).find(Row::is_own).unwrap();
        assert!(!own.show_sender);
        assert_eq!(own.classification, Some(Classification::Confidential));
    }
}
