use eframe::egui;

use crate::chat::composer::{Composer, ComposerState};

#[derive(Default)]
pub struct InputActions {
    pub send: bool,
    pub open_emoji: bool,
    pub open_upload: bool,
}

pub fn render(ui: &mut egui::Ui, composer: &mut Composer, enabled: bool) -> InputActions {
    let mut actions = InputActions::default();

    ui.add_enabled_ui(enabled, |ui| {
        ui.horizontal(|ui| {
            if ui.button("📎").on_hover_text("Attach a file").clicked() {
                actions.open_upload = true;
            }

            let width = (ui.available_width() - 120.0).max(120.0);
            let response = ui.add(
                egui::TextEdit::singleline(composer.draft_mut())
                    .hint_text("Type your message...")
                    .desired_width(width),
            );

            if composer.state() == ComposerState::Composing {
                let count = composer.draft().chars().count();
                ui.label(egui::RichText::new(count.to_string()).small().weak());
            }

            if ui.button("😊").on_hover_text("Emoji").clicked() {
                actions.open_emoji = true;
            }

            let send = ui.add_enabled(composer.can_submit(), egui::Button::new("Send"));
            if send.clicked() {
                actions.send = true;
            }

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                actions.send = true;
                response.request_focus();
            }
        });
    });

    actions
}
