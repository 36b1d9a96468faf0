//! Settings, search, new chat, chat options, file upload and emoji picker.
//! Confirm actions only log and toast; none of them touch the message store.

use eframe::egui;

use crate::chat::{ChatPage, Tier, search};
use crate::config::{self, AppConfig};
use crate::ui::toast::{ToastKind, Toasts};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    Account,
    Notifications,
    Privacy,
    Appearance,
    Audio,
    Language,
}

impl SettingsTab {
    const ALL: [Self; 6] = [
        Self::Account,
        Self::Notifications,
        Self::Privacy,
        Self::Appearance,
        Self::Audio,
        Self::Language,
    ];

    const fn label(self) -> &'static str {
        match self {
            Self::Account => "Account",
            Self::Notifications => "Notifications",
            Self::Privacy => "Privacy",
            Self::Appearance => "Appearance",
            Self::Audio => "Audio",
            Self::Language => "Language",
        }
    }
}

#[derive(Debug)]
pub struct SettingsDialog {
    pub open: bool,
    tab: SettingsTab,
    desktop_notifications: bool,
    read_receipts: bool,
    sounds: bool,
    language: &'static str,
}

impl Default for SettingsDialog {
    fn default() -> Self {
        Self {
            open: false,
            tab: SettingsTab::default(),
            desktop_notifications: true,
            read_receipts: true,
            sounds: true,
            language: LANGUAGES[0],
        }
    }
}

const LANGUAGES: [&str; 4] = ["English", "Español", "Français", "Tiếng Việt"];

#[derive(Debug, Default)]
pub struct SearchDialog {
    pub open: bool,
    query: String,
}

#[derive(Debug, Clone, Copy)]
pub struct ChatTemplate {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CHAT_TEMPLATES: &[ChatTemplate] = &[
    ChatTemplate {
        id: "general",
        icon: "💬",
        title: "General Chat",
        description: "Start a conversation about anything",
    },
    ChatTemplate {
        id: "3d",
        icon: "🎨",
        title: "3D Modeling",
        description: "Get help with 3D design and modeling",
    },
    ChatTemplate {
        id: "coding",
        icon: "💻",
        title: "Programming",
        description: "Code assistance and debugging",
    },
    ChatTemplate {
        id: "creative",
        icon: "✍",
        title: "Creative Writing",
        description: "Story writing and creative content",
    },
];

#[derive(Debug, Default)]
pub struct NewChatDialog {
    pub open: bool,
    title: String,
    template: Option<&'static str>,
}

impl NewChatDialog {
    /// Creates nothing; returns the toast text and resets the form.
    pub fn create(&mut self) -> Option<String> {
        let template = CHAT_TEMPLATES
            .iter()
            .find(|t| Some(t.id) == self.template)?;
        let title = match self.title.trim() {
            "" => template.title.to_string(),
            title => title.to_string(),
        };
        *self = Self::default();
        Some(format!("New chat \"{title}\" created"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatOption {
    Rename,
    CopyLink,
    Export,
    Delete,
}

impl ChatOption {
    const ALL: [Self; 4] = [Self::Rename, Self::CopyLink, Self::Export, Self::Delete];

    const fn label(self) -> &'static str {
        match self {
            Self::Rename => "✏ Rename Chat",
            Self::CopyLink => "📋 Copy Chat Link",
            Self::Export => "⬇ Export Chat",
            Self::Delete => "🗑 Delete Chat",
        }
    }
}

#[derive(Debug, Default)]
pub struct ChatOptionsDialog {
    pub target: Option<&'static str>,
}

#[derive(Debug, Default)]
pub struct FileUploadDialog {
    pub open: bool,
    file_name: String,
}

pub const EMOJIS: &[&str] = &[
    "😀", "😂", "😍", "🤔", "😎", "😢", "👍", "👏", "🙏", "🔥", "🎉", "🚀", "💡", "✅", "❤", "🎨",
];

#[derive(Debug, Default)]
pub struct EmojiPicker {
    pub open: bool,
}

#[derive(Debug, Default)]
pub struct Dialogs {
    pub settings: SettingsDialog,
    pub search: SearchDialog,
    pub new_chat: NewChatDialog,
    pub chat_options: ChatOptionsDialog,
    pub file_upload: FileUploadDialog,
    pub emoji: EmojiPicker,
}

/// What the dialogs can reach besides their own state.
pub struct DialogContext<'a> {
    pub page: &'a mut ChatPage,
    pub toasts: &'a mut Toasts,
    pub config: &'a mut AppConfig,
    pub config_path: &'a str,
}

impl Dialogs {
    pub fn show(&mut self, ctx: &egui::Context, mut cx: DialogContext<'_>) {
        self.show_settings(ctx, &mut cx);
        self.show_search(ctx);
        self.show_new_chat(ctx, &mut cx);
        self.show_chat_options(ctx, &mut cx);
        self.show_file_upload(ctx, &mut cx);
        self.show_emoji(ctx, &mut cx);
    }

    fn show_settings(&mut self, ctx: &egui::Context, cx: &mut DialogContext<'_>) {
        let settings = &mut self.settings;
        let mut open = settings.open;
        let mut save = false;

        egui::Window::new("Settings")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(520.0)
            .show(ctx, |ui| {
                ui.label(
                    egui::RichText::new("Manage your account settings and preferences").weak(),
                );
                ui.separator();
                ui.horizontal_top(|ui| {
                    ui.vertical(|ui| {
                        for tab in SettingsTab::ALL {
                            ui.selectable_value(&mut settings.tab, tab, tab.label());
                        }
                    });
                    ui.separator();
                    ui.vertical(|ui| match settings.tab {
                        SettingsTab::Account => {
                            ui.label("Email");
                            ui.add_enabled(
                                false,
                                egui::TextEdit::singleline(&mut "user@email.com".to_string()),
                            );
                            ui.label(format!("Plan: {}", cx.page.tier.plan_label()));
                            ui.label("Open on startup");
                            egui::ComboBox::from_id_salt("startup-tier")
                                .selected_text(cx.config.default_tier.title())
                                .show_ui(ui, |ui| {
                                    for tier in Tier::ALL {
                                        ui.selectable_value(
                                            &mut cx.config.default_tier,
                                            tier,
                                            tier.title(),
                                        );
                                    }
                                });
                        }
                        SettingsTab::Notifications => {
                            ui.checkbox(&mut settings.desktop_notifications, "Desktop notifications");
                        }
                        SettingsTab::Privacy => {
                            ui.checkbox(&mut settings.read_receipts, "Send read receipts");
                        }
                        SettingsTab::Appearance => {
                            let mut dark_mode = ui.visuals().dark_mode;
                            if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
                                ui.ctx().set_visuals(if dark_mode {
                                    egui::Visuals::dark()
                                } else {
                                    egui::Visuals::light()
                                });
                            }
                        }
                        SettingsTab::Audio => {
                            ui.checkbox(&mut settings.sounds, "Message sounds");
                        }
                        SettingsTab::Language => {
                            for language in LANGUAGES {
                                ui.radio_value(&mut settings.language, language, language);
                            }
                        }
                    });
                });
                ui.separator();
                if ui.button("Save changes").clicked() {
                    save = true;
                }
            });

        if save {
            match config::save_config(cx.config_path, cx.config) {
                Ok(()) => {
                    log::info!("Settings saved to {}", cx.config_path);
                    cx.toasts.push(ToastKind::Success, "Settings saved");
                }
                Err(err) => {
                    log::warn!("Failed to save settings to {}: {err}", cx.config_path);
                    cx.toasts.push(ToastKind::Warning, "Could not save settings");
                }
            }
            open = false;
        }
        settings.open = open;
    }

    fn show_search(&mut self, ctx: &egui::Context) {
        let dialog = &mut self.search;
        egui::Window::new("Search Chats")
            .open(&mut dialog.open)
            .collapsible(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut dialog.query)
                        .hint_text("Search messages, chats, or topics...")
                        .desired_width(f32::INFINITY),
                );
                ui.separator();

                if dialog.query.is_empty() {
                    ui.label(egui::RichText::new("Start typing to search your chats").weak());
                    return;
                }

                let results = search::search(search::CHAT_HISTORY, &dialog.query);
                if results.is_empty() {
                    ui.label(egui::RichText::new("No matching chats").weak());
                }
                for entry in results {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.strong(entry.title);
                        ui.label(entry.preview);
                        ui.label(egui::RichText::new(entry.time).small().weak());
                    });
                }
            });
    }

    fn show_new_chat(&mut self, ctx: &egui::Context, cx: &mut DialogContext<'_>) {
        let dialog = &mut self.new_chat;
        let mut open = dialog.open;
        let mut create = false;

        egui::Window::new("Create New Chat")
            .open(&mut open)
            .collapsible(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                ui.label("Chat Title (Optional)");
                ui.add(
                    egui::TextEdit::singleline(&mut dialog.title)
                        .hint_text("Enter a title for your chat..."),
                );
                ui.label("Choose a Template");
                egui::Grid::new("chat-templates")
                    .num_columns(2)
                    .show(ui, |ui| {
                        for (i, template) in CHAT_TEMPLATES.iter().enumerate() {
                            let selected = dialog.template == Some(template.id);
                            let label = format!(
                                "{} {}\n{}",
                                template.icon, template.title, template.description
                            );
                            if ui.selectable_label(selected, label).clicked() {
                                dialog.template = Some(template.id);
                            }
                            if i % 2 == 1 {
                                ui.end_row();
                            }
                        }
                    });
                ui.separator();
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(dialog.template.is_some(), egui::Button::new("Create Chat"))
                        .clicked()
                    {
                        create = true;
                    }
                });
            });

        if create {
            if let Some(text) = dialog.create() {
                log::info!("{text}");
                cx.toasts.push(ToastKind::Success, text);
            }
            open = false;
        }
        dialog.open = open;
    }

    fn show_chat_options(&mut self, ctx: &egui::Context, cx: &mut DialogContext<'_>) {
        let Some(target) = self.chat_options.target else {
            return;
        };

        let mut open = true;
        let mut chosen = None;
        egui::Window::new("Chat Options")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Manage this conversation").weak());
                for option in ChatOption::ALL {
                    let mut text = egui::RichText::new(option.label());
                    if option == ChatOption::Delete {
                        text = text.color(ui.visuals().error_fg_color);
                    }
                    if ui.button(text).clicked() {
                        chosen = Some(option);
                    }
                }
            });

        if let Some(option) = chosen {
            let text = match option {
                ChatOption::Rename => format!("Rename chat {target}"),
                ChatOption::CopyLink => {
                    ctx.copy_text(format!("chatflow://chat/{target}"));
                    format!("Link to {target} copied")
                }
                ChatOption::Export => match serde_json::to_string_pretty(cx.page.store.as_slice()) {
                    Ok(json) => {
                        log::info!("Exported chat {target}:\n{json}");
                        let own = cx.page.store.iter().filter(|m| m.is_own).count();
                        format!("Exported {} messages ({own} sent by you)", cx.page.store.len())
                    }
                    Err(err) => {
                        log::warn!("Failed to export chat {target}: {err}");
                        "Export failed".to_string()
                    }
                },
                ChatOption::Delete => format!("Delete chat {target}"),
            };
            log::info!("{text}");
            cx.toasts.push(ToastKind::Info, text);
            open = false;
        }

        if !open {
            self.chat_options.target = None;
        }
    }

    fn show_file_upload(&mut self, ctx: &egui::Context, cx: &mut DialogContext<'_>) {
        let dialog = &mut self.file_upload;
        let mut open = dialog.open;
        let mut attach = false;

        egui::Window::new("Upload File")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("Share images, documents and 3D models").weak());
                ui.add(egui::TextEdit::singleline(&mut dialog.file_name).hint_text("model.glb"));
                let ready = !dialog.file_name.trim().is_empty();
                if ui.add_enabled(ready, egui::Button::new("Attach")).clicked() {
                    attach = true;
                }
            });

        if attach {
            let name = std::mem::take(&mut dialog.file_name);
            log::info!("File attached: {}", name.trim());
            cx.toasts
                .push(ToastKind::Success, format!("{} attached", name.trim()));
            open = false;
        }
        dialog.open = open;
    }

    fn show_emoji(&mut self, ctx: &egui::Context, cx: &mut DialogContext<'_>) {
        let mut open = self.emoji.open;
        let mut picked = None;

        egui::Window::new("Emoji")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("emoji-grid").show(ui, |ui| {
                    for (i, emoji) in EMOJIS.iter().enumerate() {
                        if ui.button(*emoji).clicked() {
                            picked = Some(*emoji);
                        }
                        if i % 8 == 7 {
                            ui.end_row();
                        }
                    }
                });
            });

        if let Some(emoji) = picked {
            let draft = format!("{}{emoji}", cx.page.composer.draft());
            cx.page.composer.update_draft(draft);
            open = false;
        }
        self.emoji.open = open;
    }
}
