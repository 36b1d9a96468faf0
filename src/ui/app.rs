use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::chat::Tier;
use crate::common::{AuthCommand, AuthEvent, ChatNotice};
use crate::config::AppConfig;

use super::components::{
    auth_forms, chat_area,
    dialogs::DialogContext,
    input_bar,
    sidebar::{self, SidebarActions},
};
use super::state::{AppState, Screen};
use super::toast::{ToastKind, Toasts};

pub struct ChatApp {
    state: AppState,
    config: AppConfig,
    config_path: String,
    command_sender: mpsc::Sender<AuthCommand>,
    event_receiver: mpsc::Receiver<AuthEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        config_path: String,
        start: Tier,
        command_sender: mpsc::Sender<AuthCommand>,
        event_receiver: mpsc::Receiver<AuthEvent>,
    ) -> Self {
        let toasts = Toasts::new(config.toast_lifetime());
        Self {
            state: AppState::new(start, config.quota(), toasts),
            config,
            config_path,
            command_sender,
            event_receiver,
        }
    }

    fn handle_auth_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                AuthEvent::Completed { summary } => {
                    self.state.auth.pending = false;
                    self.state.toasts.push(ToastKind::Success, summary);
                }
            }
        }
    }

    fn send_command(&mut self, command: AuthCommand) {
        match self.command_sender.try_send(command) {
            Ok(()) => self.state.auth.pending = true,
            Err(err) => {
                log::warn!("Failed to send command to auth worker: {err}");
                self.state
                    .toasts
                    .push(ToastKind::Warning, "Service unavailable, try again");
            }
        }
    }

    fn show_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.strong("ChatFlow");
                ui.separator();
                for tier in Tier::ALL {
                    ui.selectable_value(&mut self.state.screen, Screen::Chat(tier), tier.title());
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.selectable_value(&mut self.state.screen, Screen::Register, "Sign Up");
                    ui.selectable_value(&mut self.state.screen, Screen::Login, "Sign In");
                });
            });
        });
    }

    fn show_chat(&mut self, ctx: &egui::Context, tier: Tier) {
        let (page, dialogs, toasts) = self.state.split_mut(tier);

        let mut actions = SidebarActions::default();
        egui::SidePanel::left("chat_sidebar")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    actions = sidebar::render(ui, page);
                });
            });

        let mut notice = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("ChatFlow {}", tier.title()));
                if let Some(channel) = page
                    .active_channel
                    .and_then(|id| tier.channels().iter().find(|c| c.id == id))
                {
                    ui.label(egui::RichText::new(channel.name).weak());
                }
            });
            ui.separator();

            let locked = page.is_locked();
            egui::TopBottomPanel::bottom(egui::Id::new("composer").with(tier))
                .show_inside(ui, |ui| {
                    if locked {
                        ui.colored_label(
                            ui.visuals().warn_fg_color,
                            "Daily message limit reached! Upgrade to Pro for unlimited messaging.",
                        );
                    }
                    let input = input_bar::render(ui, &mut page.composer, !locked);
                    if input.send {
                        notice = page.send();
                    }
                    dialogs.emoji.open |= input.open_emoji;
                    dialogs.file_upload.open |= input.open_upload;
                });

            if page.store.is_empty() {
                ui.label(egui::RichText::new("No messages yet").weak());
            } else {
                chat_area::render(ui, page.store.as_slice());
            }
        });

        match notice {
            Some(ChatNotice::Sent(id)) => {
                if let Some(message) = page.store.last() {
                    log::debug!(
                        "{} chat: sent {id:?} ({} chars)",
                        tier.title(),
                        message.content.chars().count()
                    );
                }
            }
            Some(ChatNotice::QuotaReached) => {
                toasts.push(ToastKind::Warning, "Daily message limit reached");
            }
            None => {}
        }

        dialogs.search.open |= actions.open_search;
        dialogs.settings.open |= actions.open_settings;
        dialogs.new_chat.open |= actions.open_new_chat;
        if actions.options_for.is_some() {
            dialogs.chat_options.target = actions.options_for;
        }

        dialogs.show(
            ctx,
            DialogContext {
                page,
                toasts,
                config: &mut self.config,
                config_path: &self.config_path,
            },
        );
    }

    fn show_auth(&mut self, ctx: &egui::Context, screen: Screen) {
        let mut command = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                command = match screen {
                    Screen::Register => auth_forms::render_register(ui, &mut self.state.auth),
                    _ => auth_forms::render_login(ui, &mut self.state.auth),
                };
            });
        });

        if let Some(command) = command {
            self.send_command(command);
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.state.auth.alert.clone() else {
            return;
        };

        let response = egui::Modal::new(egui::Id::new("alert")).show(ctx, |ui| {
            ui.set_width(260.0);
            ui.heading("Alert");
            ui.label(message);
            ui.separator();
            ui.button("OK").clicked()
        });

        if response.inner || response.should_close() {
            self.state.auth.alert = None;
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // 1. Drain worker events
        self.handle_auth_events();

        // 2. Draw the current screen
        self.show_navigation(ctx);

        match self.state.screen {
            Screen::Chat(tier) => self.show_chat(ctx, tier),
            screen @ (Screen::Login | Screen::Register) => self.show_auth(ctx, screen),
        }

        // 3. Overlays
        self.show_alert(ctx);
        self.state.toasts.show(ctx);

        // Keep polling while a request is in flight or toasts are fading
        if self.state.auth.pending || !self.state.toasts.is_empty() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
