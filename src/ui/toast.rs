use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use eframe::egui;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
}

impl ToastKind {
    fn color(self) -> egui::Color32 {
        match self {
            Self::Info => egui::Color32::from_rgb(0x06, 0xb6, 0xd4),
            Self::Success => egui::Color32::from_rgb(0x14, 0xb8, 0xa6),
            Self::Warning => egui::Color32::from_rgb(0xf9, 0x73, 0x16),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Fire-and-forget notifications stacked in the corner of the window.
#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    lifetime: Duration,
}

impl Toasts {
    const MAX_VISIBLE: usize = 5;

    pub fn new(lifetime: std::time::Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            lifetime: Duration::from_std(lifetime).unwrap_or_else(|_| Duration::seconds(4)),
        }
    }

    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) {
        self.push_at(kind, text, Utc::now());
    }

    fn push_at(&mut self, kind: ToastKind, text: impl Into<String>, now: DateTime<Utc>) {
        self.queue.push_back(Toast {
            id: Uuid::new_v4(),
            kind,
            text: text.into(),
            created_at: now,
        });
        while self.queue.len() > Self::MAX_VISIBLE {
            self.queue.pop_front();
        }
    }

    pub fn expire(&mut self, now: DateTime<Utc>) {
        let lifetime = self.lifetime;
        self.queue
            .retain(|toast| now.signed_duration_since(toast.created_at) < lifetime);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.queue.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        self.expire(Utc::now());
        if self.is_empty() {
            return;
        }

        egui::Area::new(egui::Id::new("toasts"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-12.0, -12.0))
            .interactable(false)
            .show(ctx, |ui| {
                for toast in self.iter() {
                    ui.push_id(toast.id, |ui| {
                        egui::Frame::popup(ui.style())
                            .stroke((1.0, toast.kind.color()))
                            .show(ui, |ui| {
                                ui.set_max_width(280.0);
                                ui.colored_label(toast.kind.color(), &toast.text);
                            });
                    });
                    ui.add_space(4.0);
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_expire_after_lifetime() {
        let mut toasts = Toasts::new(std::time::Duration::from_secs(4));
        let start = Utc::now();
        toasts.push_at(ToastKind::Info, "first", start);
        toasts.push_at(ToastKind::Success, "second", start + Duration::seconds(3));

        toasts.expire(start + Duration::seconds(5));
        let left = toasts.iter().map(|t| t.text.as_str()).collect::<Vec<_>>();
        assert_eq!(left, ["second"]);

        toasts.expire(start + Duration::seconds(8));
        assert!(toasts.is_empty());
    }

    #[test]
    fn only_the_newest_toasts_are_kept() {
        let mut toasts = Toasts::new(std::time::Duration::from_secs(4));
        let now = Utc::now();
        for i in 0..8 {
            toasts.push_at(ToastKind::Info, format!("toast {i}"), now);
        }
        let texts = toasts.iter().map(|t| t.text.clone()).collect::<Vec<_>>();
        assert_eq!(texts.len(), Toasts::MAX_VISIBLE);
        assert_eq!(texts.first().map(String::as_str), Some("toast 3"));
    }

    #[test]
    fn toast_ids_are_unique() {
        let mut toasts = Toasts::new(std::time::Duration::from_secs(4));
        toasts.push(ToastKind::Warning, "a");
        toasts.push(ToastKind::Warning, "b");
        let ids = toasts.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_ne!(ids[0], ids[1]);
    }
}
