use crate::common::{ChatNotice, Classification, MessageId};

use super::{
    composer::Composer, ids::IdSource, quota::DailyQuota, store::MessageStore, tier::Tier,
};

/// State of one chat page instance. Created from the tier's fixtures and
/// never shared with another page.
#[derive(Debug, Clone)]
pub struct ChatPage {
    pub tier: Tier,
    pub store: MessageStore,
    pub composer: Composer,
    pub quota: Option<DailyQuota>,
    pub active_channel: Option<&'static str>,
    /// Classification stamped on outgoing enterprise messages.
    pub security_level: Classification,
    /// Pro assistant panel toggle.
    pub show_assistant: bool,
    ids: IdSource,
}

impl ChatPage {
    pub fn new(tier: Tier, quota: DailyQuota) -> Self {
        let store = MessageStore::initialize(tier.fixtures());
        let ids = IdSource::after(store.last_id());
        log::info!(
            "opening {} chat with {} seeded messages",
            tier.title(),
            store.len()
        );

        Self {
            tier,
            store,
            composer: Composer::default(),
            quota: tier.has_daily_quota().then_some(quota),
            active_channel: tier.default_channel(),
            security_level: Classification::Classified,
            show_assistant: true,
            ids,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.quota.is_some_and(|quota| quota.is_exhausted())
    }

    /// Submits the composer draft. Returns `None` when the draft is blank.
    pub fn send(&mut self) -> Option<ChatNotice> {
        if !self.composer.can_submit() {
            return None;
        }

        if self.is_locked() {
            log::warn!("{} chat: daily message limit reached", self.tier.title());
            return Some(ChatNotice::QuotaReached);
        }

        let decoration = self.tier.outgoing_decoration(self.security_level);
        let id: MessageId = self
            .composer
            .submit(&mut self.store, &mut self.ids, decoration)?;

        if let Some(quota) = &mut self.quota {
            quota.record();
        }

        Some(ChatNotice::Sent(id))
    }

    pub fn select_channel(&mut self, id: &'static str) {
        self.active_channel = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::composer::ComposerState;

    #[test]
    fn free_page_counts_sent_messages() {
        let mut page = ChatPage::new(Tier::Free, DailyQuota::new(87, 100));
        page.composer.update_draft("hello");

        assert!(matches!(page.send(), Some(ChatNotice::Sent(_))));
        assert_eq!(page.store.len(), 4);
        assert_eq!(page.quota.map(|q| q.used()), Some(88));
    }

    #[test]
    fn exhausted_quota_keeps_draft_and_store() {
        let mut page = ChatPage::new(Tier::Free, DailyQuota::new(100, 100));
        page.composer.update_draft("one more");

        assert_eq!(page.send(), Some(ChatNotice::QuotaReached));
        assert_eq!(page.store.len(), 3);
        assert_eq!(page.composer.draft(), "one more");
    }

    #[test]
    fn quota_only_applies_to_free_tier() {
        let mut page = ChatPage::new(Tier::Pro, DailyQuota::new(100, 100));
        assert!(page.quota.is_none());
        page.composer.update_draft("unlimited");
        assert!(matches!(page.send(), Some(ChatNotice::Sent(_))));
    }

    #[test]
    fn blank_send_changes_nothing() {
        let mut page = ChatPage::new(Tier::Business, DailyQuota::new(0, 100));
        page.composer.update_draft("   ");
        assert_eq!(page.send(), None);
        assert_eq!(page.store.len(), 3);
        assert_eq!(page.composer.state(), ComposerState::Composing);
    }

    #[test]
    fn enterprise_messages_carry_security_level() {
        let mut page = ChatPage::new(Tier::Enterprise, DailyQuota::new(0, 100));
        page.security_level = Classification::TopSecret;
        page.composer.update_draft("status?");
        page.send();

        let last = page.store.last().unwrap();
        assert!(last.is_own);
        assert_eq!(last.decoration.classification, Some(Classification::TopSecret));
    }

    #[test]
    fn channel_selection_leaves_messages_alone() {
        let mut page = ChatPage::new(Tier::Business, DailyQuota::new(0, 100));
        assert_eq!(page.active_channel, Some("team-alpha"));
        page.select_channel("executives");
        assert_eq!(page.active_channel, Some("executives"));
        assert_eq!(page.store.len(), 3);
    }
}
