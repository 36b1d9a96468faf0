use eframe::egui;

use crate::auth::register::RegisterError;
use crate::auth::{Provider, RegisterForm, Strength};
use crate::common::AuthCommand;
use crate::ui::state::AuthState;

const FORM_WIDTH: f32 = 320.0;

pub fn render_login(ui: &mut egui::Ui, auth: &mut AuthState) -> Option<AuthCommand> {
    let mut command = None;

    card(ui, "Welcome back", "Sign in to continue to ChatKang", |ui| {
        let form = &mut auth.login;
        ui.label("Email");
        ui.add(
            egui::TextEdit::singleline(&mut form.email)
                .hint_text("you@example.com")
                .desired_width(FORM_WIDTH),
        );
        ui.label("Password");
        password_field(ui, &mut form.password, &mut auth.show_password);
        ui.checkbox(&mut form.remember_me, "Remember me");

        ui.add_space(8.0);
        if submit_button(ui, "Sign In", auth.pending) {
            command = Some(AuthCommand::Login(auth.login.clone()));
        }
        if let Some(provider) = social_buttons(ui, auth.pending) {
            command = Some(AuthCommand::Social {
                provider,
                signup: false,
            });
        }
    });

    command
}

pub fn render_register(ui: &mut egui::Ui, auth: &mut AuthState) -> Option<AuthCommand> {
    let mut command = None;

    card(ui, "Join ChatKang", "Create your account to get started", |ui| {
        let form = &mut auth.register;
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.first_name)
                    .hint_text("First name")
                    .desired_width(FORM_WIDTH * 0.5 - 4.0),
            );
            ui.add(
                egui::TextEdit::singleline(&mut form.last_name)
                    .hint_text("Last name")
                    .desired_width(FORM_WIDTH * 0.5 - 4.0),
            );
        });
        ui.label("Email");
        ui.add(
            egui::TextEdit::singleline(&mut form.email)
                .hint_text("you@example.com")
                .desired_width(FORM_WIDTH),
        );

        ui.label("Password");
        password_field(ui, &mut form.password, &mut auth.show_password);
        if !form.password.is_empty() {
            strength_meter(ui, form);
        }

        ui.label("Confirm password");
        password_field(ui, &mut form.confirm_password, &mut auth.show_confirm_password);
        if !form.confirm_password.is_empty() && form.password == form.confirm_password {
            ui.colored_label(egui::Color32::LIGHT_GREEN, "✔ Passwords match");
        }

        ui.checkbox(&mut form.agree_to_terms, "I agree to the Terms of Service");
        ui.checkbox(&mut form.subscribe_newsletter, "Send me product updates");

        ui.add_space(8.0);
        if submit_button(ui, "Create Account", auth.pending) {
            command = submit_register(auth);
        }
        if let Some(provider) = social_buttons(ui, auth.pending) {
            command = Some(AuthCommand::Social {
                provider,
                signup: true,
            });
        }
    });

    command
}

/// The command sent for a register click. A form that fails validation
/// never reaches the worker.
pub fn register_submission(form: &RegisterForm) -> Result<AuthCommand, RegisterError> {
    form.validate()?;
    Ok(AuthCommand::Register(form.clone()))
}

/// Handles a register click: the command to send, or an alert and nothing.
fn submit_register(auth: &mut AuthState) -> Option<AuthCommand> {
    match register_submission(&auth.register) {
        Ok(command) => Some(command),
        Err(err) => {
            log::warn!("Registration blocked: {err}");
            auth.alert = Some(err.to_string());
            None
        }
    }
}

fn card(ui: &mut egui::Ui, title: &str, subtitle: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        egui::Frame::group(ui.style())
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_max_width(FORM_WIDTH);
                ui.heading(title);
                ui.label(egui::RichText::new(subtitle).weak());
                ui.separator();
                ui.with_layout(egui::Layout::top_down(egui::Align::Min), body);
            });
    });
}

fn password_field(ui: &mut egui::Ui, value: &mut String, show: &mut bool) {
    ui.horizontal(|ui| {
        ui.add(
            egui::TextEdit::singleline(value)
                .password(!*show)
                .desired_width(FORM_WIDTH - 32.0),
        );
        if ui.small_button("👁").clicked() {
            *show = !*show;
        }
    });
}

fn strength_meter(ui: &mut egui::Ui, form: &RegisterForm) {
    let strength = form.strength();
    let color = match strength {
        Strength::Weak => egui::Color32::from_rgb(0xef, 0x44, 0x44),
        Strength::Medium => egui::Color32::from_rgb(0xea, 0xb3, 0x08),
        Strength::Strong => egui::Color32::from_rgb(0x22, 0xc5, 0x5e),
    };
    let score = crate::auth::register::password_strength(&form.password);
    ui.add(
        egui::ProgressBar::new(f32::from(score) / 5.0)
            .fill(color)
            .desired_width(FORM_WIDTH)
            .text(strength.label()),
    );
}

fn submit_button(ui: &mut egui::Ui, label: &str, pending: bool) -> bool {
    let text = if pending { "Please wait..." } else { label };
    ui.add_enabled(
        !pending,
        egui::Button::new(text).min_size(egui::vec2(FORM_WIDTH, 28.0)),
    )
    .clicked()
}

fn social_buttons(ui: &mut egui::Ui, pending: bool) -> Option<Provider> {
    let mut picked = None;
    ui.separator();
    ui.horizontal(|ui| {
        for provider in Provider::ALL {
            if ui
                .add_enabled(!pending, egui::Button::new(provider.name()))
                .clicked()
            {
                picked = Some(provider);
            }
        }
    });
    picked
}
