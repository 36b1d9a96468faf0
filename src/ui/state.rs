use std::collections::HashMap;

use crate::auth::{LoginForm, RegisterForm};
use crate::chat::{ChatPage, DailyQuota, Tier};

use super::components::dialogs::Dialogs;
use super::toast::Toasts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat(Tier),
    Login,
    Register,
}

/// Local state of the auth pages.
#[derive(Debug, Default)]
pub struct AuthState {
    pub login: LoginForm,
    pub register: RegisterForm,
    pub show_password: bool,
    pub show_confirm_password: bool,
    /// A simulated request is in flight; the submit buttons are disabled.
    pub pending: bool,
    /// Blocking alert shown when registration validation fails.
    pub alert: Option<String>,
}

/// One tier's page together with the dialogs opened on it.
#[derive(Debug)]
struct PageView {
    page: ChatPage,
    dialogs: Dialogs,
}

/// Local UI state.
pub struct AppState {
    pub screen: Screen,
    views: HashMap<Tier, PageView>,
    quota: DailyQuota,
    pub auth: AuthState,
    pub toasts: Toasts,
}

impl AppState {
    pub fn new(start: Tier, quota: DailyQuota, toasts: Toasts) -> Self {
        Self {
            screen: Screen::Chat(start),
            views: HashMap::new(),
            quota,
            auth: AuthState::default(),
            toasts,
        }
    }

    /// The page for `tier`, created from fixtures on first visit and kept
    /// for the rest of the session, together with its own dialogs and the
    /// shared toasts.
    pub fn split_mut(&mut self, tier: Tier) -> (&mut ChatPage, &mut Dialogs, &mut Toasts) {
        let quota = self.quota;
        let view = self.views.entry(tier).or_insert_with(|| PageView {
            page: ChatPage::new(tier, quota),
            dialogs: Dialogs::default(),
        });
        (&mut view.page, &mut view.dialogs, &mut self.toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new(
            Tier::Free,
            DailyQuota::new(87, 100),
            Toasts::new(std::time::Duration::from_secs(4)),
        )
    }

    #[test]
    fn pages_are_created_lazily_and_kept() {
        let mut state = state();
        assert!(!state.views.contains_key(&Tier::Pro));

        let page = state.split_mut(Tier::Pro).0;
        page.composer.update_draft("keep me");
        page.send();

        assert_eq!(
            state.views.get(&Tier::Pro).map(|v| v.page.store.len()),
            Some(4)
        );
        assert_eq!(state.split_mut(Tier::Pro).0.store.len(), 4);
    }

    #[test]
    fn split_reaches_the_same_page() {
        let mut state = state();
        let (page, dialogs, toasts) = state.split_mut(Tier::Free);
        page.composer.update_draft("hi");
        dialogs.search.open = true;
        toasts.push(crate::ui::toast::ToastKind::Info, "hello");

        assert_eq!(state.split_mut(Tier::Free).0.composer.draft(), "hi");
        assert!(state.split_mut(Tier::Free).1.search.open);
        assert!(!state.toasts.is_empty());
    }

    #[test]
    fn tiers_have_isolated_pages() {
        let mut state = state();
        state.split_mut(Tier::Business).0.composer.update_draft("only business");
        state.split_mut(Tier::Business).0.send();

        assert_eq!(state.split_mut(Tier::Enterprise).0.store.len(), 3);
        assert_eq!(state.split_mut(Tier::Business).0.store.len(), 4);
    }

    #[test]
    fn dialogs_do_not_follow_the_user_to_another_tier() {
        let mut state = state();
        let (_, dialogs, _) = state.split_mut(Tier::Business);
        dialogs.chat_options.target = Some("team-alpha");
        dialogs.emoji.open = true;
        dialogs.file_upload.open = true;

        let (_, dialogs, _) = state.split_mut(Tier::Enterprise);
        assert_eq!(dialogs.chat_options.target, None);
        assert!(!dialogs.emoji.open);
        assert!(!dialogs.file_upload.open);

        let (_, dialogs, _) = state.split_mut(Tier::Business);
        assert_eq!(dialogs.chat_options.target, Some("team-alpha"));
        assert!(dialogs.emoji.open);
    }

    #[test]
    fn chat_option_targets_belong_to_the_page_tier() {
        let mut state = state();
        for tier in Tier::ALL {
            let channel = tier.channels()[0].id;
            state.split_mut(tier).1.chat_options.target = Some(channel);
        }
        for tier in Tier::ALL {
            let (page, dialogs, _) = state.split_mut(tier);
            let target = dialogs.chat_options.target.unwrap();
            assert!(page.tier.channels().iter().any(|c| c.id == target));
        }
    }
}
