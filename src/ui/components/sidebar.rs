use eframe::egui;

use crate::chat::{ChatPage, Tier, fixtures::PRO_SUGGESTIONS};
use crate::common::{ChannelEntry, Classification};

use super::chat_area::classification_badge;

#[derive(Default)]
pub struct SidebarActions {
    pub open_search: bool,
    pub open_settings: bool,
    pub open_new_chat: bool,
    pub options_for: Option<&'static str>,
}

pub fn render(ui: &mut egui::Ui, page: &mut ChatPage) -> SidebarActions {
    let mut actions = SidebarActions::default();
    let tier = page.tier;

    ui.heading("ChatFlow");
    ui.label(egui::RichText::new(tier.plan_label()).small().color(tier.accent()));
    ui.separator();

    if let Some(quota) = page.quota.filter(|quota| quota.is_approaching()) {
        let warning = egui::Color32::from_rgb(0xfb, 0x92, 0x3c);
        ui.horizontal(|ui| {
            ui.colored_label(warning, "Daily Messages");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.colored_label(warning, format!("{}/{}", quota.used(), quota.limit()));
            });
        });
        ui.add(egui::ProgressBar::new(quota.fraction()).fill(warning));
        ui.label(egui::RichText::new("⚠ Approaching daily limit").small().color(warning));
        ui.separator();
    }

    if ui.button("🔍 Search").clicked() {
        actions.open_search = true;
    }
    if ui.button("⚙ Settings").clicked() {
        actions.open_settings = true;
    }
    if tier == Tier::Free {
        ui.add_enabled(false, egui::Button::new("🔒 Premium Features"));
    }

    ui.separator();
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("Recent Chats").weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.small_button("+").on_hover_text("New chat").clicked() {
                actions.open_new_chat = true;
            }
        });
    });

    for channel in tier.channels() {
        let selected = page.active_channel == Some(channel.id);
        ui.horizontal(|ui| {
            channel_marker(ui, channel);
            if ui.selectable_label(selected, channel.name).clicked() {
                page.select_channel(channel.id);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("⋯").clicked() {
                    actions.options_for = Some(channel.id);
                }
                if channel.unread > 0 {
                    ui.label(egui::RichText::new(channel.unread.to_string()).strong());
                }
            });
        });
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(channel.last_message).small().weak());
            ui.label(egui::RichText::new(channel.time).small().weak());
            if let Some(members) = channel.members {
                ui.label(egui::RichText::new(format!("{members} members")).small().weak());
            }
        });
    }

    match tier {
        Tier::Pro => assistant_panel(ui, page),
        Tier::Enterprise => security_selector(ui, page),
        Tier::Free | Tier::Business => {}
    }

    actions
}

fn channel_marker(ui: &mut egui::Ui, channel: &ChannelEntry) {
    if let Some(priority) = channel.priority {
        ui.colored_label(priority.color(), "●");
    } else if let Some(classification) = channel.classification {
        classification_badge(ui, classification);
    } else if let Some(online) = channel.online {
        let color = if online {
            egui::Color32::GREEN
        } else {
            egui::Color32::GRAY
        };
        ui.colored_label(color, if online { "●" } else { "○" });
    }
}

fn assistant_panel(ui: &mut egui::Ui, page: &mut ChatPage) {
    ui.separator();
    ui.checkbox(&mut page.show_assistant, "AI Assistant");
    if !page.show_assistant {
        return;
    }

    ui.label(egui::RichText::new("Suggestions").weak());
    ui.horizontal_wrapped(|ui| {
        for (icon, text) in PRO_SUGGESTIONS {
            if ui.button(format!("{icon} {text}")).clicked() {
                page.composer.update_draft(*text);
            }
        }
    });
}

fn security_selector(ui: &mut egui::Ui, page: &mut ChatPage) {
    ui.separator();
    ui.label(egui::RichText::new("Security level").weak());
    egui::ComboBox::from_id_salt("security-level")
        .selected_text(page.security_level.label())
        .show_ui(ui, |ui| {
            for level in Classification::ALL {
                ui.selectable_value(&mut page.security_level, level, level.label());
            }
        });
}
