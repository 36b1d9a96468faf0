use crate::common::{ChatMessage, Decoration, MessageId};

use super::{ids::IdSource, store::MessageStore};

/// Display name on locally authored messages.
pub const OWN_SENDER: &str = "You";
/// Display timestamp on locally authored messages.
pub const NOW: &str = "Now";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposerState {
    Idle,
    Composing,
}

/// Holds the pending outbound text of one chat page.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    draft: String,
}

impl Composer {
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The text box edits the draft in place.
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn state(&self) -> ComposerState {
        if self.draft.is_empty() {
            ComposerState::Idle
        } else {
            ComposerState::Composing
        }
    }

    /// Whether `submit` would append anything.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Appends the draft as an own message and clears it. A blank draft is
    /// left untouched and nothing is appended.
    pub fn submit(
        &mut self,
        store: &mut MessageStore,
        ids: &mut IdSource,
        decoration: Decoration,
    ) -> Option<MessageId> {
        if !self.can_submit() {
            return None;
        }

        let id = ids.next_id();
        store.append(ChatMessage {
            id,
            sender: OWN_SENDER.to_string(),
            content: std::mem::take(&mut self.draft),
            timestamp: NOW.to_string(),
            is_own: true,
            decoration,
        });
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::fixtures::FREE_MESSAGES;

    fn seeded() -> (MessageStore, IdSource) {
        let store = MessageStore::initialize(FREE_MESSAGES);
        let ids = IdSource::after(store.last_id());
        (store, ids)
    }

    #[test]
    fn submit_appends_own_message_and_clears_draft() {
        let (mut store, mut ids) = seeded();
        let mut composer = Composer::default();
        composer.update_draft("hello");

        let id = composer.submit(&mut store, &mut ids, Decoration::default());

        assert_eq!(store.len(), 4);
        let last = store.last().unwrap();
        assert_eq!(Some(last.id), id);
        assert_eq!(last.content, "hello");
        assert_eq!(last.timestamp, NOW);
        assert!(last.is_own);
        assert_eq!(composer.draft(), "");
        assert_eq!(composer.state(), ComposerState::Idle);
    }

    #[test]
    fn blank_submit_is_a_total_no_op() {
        let (mut store, mut ids) = seeded();
        let mut composer = Composer::default();
        composer.update_draft("   ");

        assert_eq!(composer.submit(&mut store, &mut ids, Decoration::default()), None);
        assert_eq!(store.len(), 3);
        assert_eq!(composer.draft(), "   ");

        composer.update_draft("");
        assert_eq!(composer.submit(&mut store, &mut ids, Decoration::default()), None);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn each_submit_grows_by_one_in_call_order() {
        let (mut store, mut ids) = seeded();
        let mut composer = Composer::default();
        let texts = ["one", "two", "three", "four"];

        for (i, text) in texts.iter().enumerate() {
            composer.update_draft(*text);
            composer.submit(&mut store, &mut ids, Decoration::default());
            assert_eq!(store.len(), 3 + i + 1);
        }

        let tail = store.iter().skip(3).map(|m| m.content.as_str()).collect::<Vec<_>>();
        assert_eq!(tail, texts);
    }

    #[test]
    fn fixtures_keep_their_ownership_flags() {
        let (mut store, mut ids) = seeded();
        let mut composer = Composer::default();
        composer.update_draft("draft text");
        composer.submit(&mut store, &mut ids, Decoration::default());

        let flags = store.iter().map(|m| m.is_own).collect::<Vec<_>>();
        let expected = FREE_MESSAGES
            .iter()
            .map(|f| f.is_own)
            .chain(std::iter::once(true))
            .collect::<Vec<_>>();
        assert_eq!(flags, expected);
    }

    #[test]
    fn content_is_kept_as_typed() {
        let (mut store, mut ids) = seeded();
        let mut composer = Composer::default();
        composer.update_draft("  padded  ");
        composer.submit(&mut store, &mut ids, Decoration::default());
        assert_eq!(store.last().unwrap().content, "  padded  ");
    }
}
