use eframe::egui;

use crate::chat::render::{self, Alignment, Row};
use crate::common::{ChatMessage, Shape};

const GLYPH_SIZE: f32 = 18.0;

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for row in render::rows(messages) {
                let layout = match row.alignment {
                    Alignment::Start => egui::Layout::left_to_right(egui::Align::TOP),
                    Alignment::End => egui::Layout::right_to_left(egui::Align::TOP),
                };
                ui.with_layout(layout, |ui| {
                    shape_glyph(ui, row.shape, row.accent.into());
                    bubble(ui, &row);
                });
                ui.add_space(6.0);
            }
        });
}

fn bubble(ui: &mut egui::Ui, row: &Row<'_>) {
    let accent: egui::Color32 = row.accent.into();
    let fill = if row.is_own() {
        accent.gamma_multiply(0.45)
    } else {
        ui.visuals().faint_bg_color
    };

    ui.vertical(|ui| {
        egui::Frame::new()
            .fill(fill)
            .stroke((1.0, accent.gamma_multiply(0.6)))
            .corner_radius(10.0)
            .inner_margin(egui::Margin::symmetric(10, 6))
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.7);
                if row.show_sender {
                    ui.horizontal(|ui| {
                        ui.strong(row.sender);
                        if let Some(role) = row.role {
                            ui.label(egui::RichText::new(role).small().weak());
                        }
                        if let Some(classification) = row.classification {
                            classification_badge(ui, classification);
                        }
                    });
                } else if let Some(classification) = row.classification {
                    classification_badge(ui, classification);
                }
                ui.label(row.content);
            });
        ui.label(egui::RichText::new(row.timestamp).small().weak());
    });
}

pub fn classification_badge(ui: &mut egui::Ui, classification: crate::common::Classification) {
    let color: egui::Color32 = classification.badge_color().into();
    ui.label(
        egui::RichText::new(classification.label().to_uppercase())
            .small()
            .color(color),
    );
}

/// Flat stand-in for the decorative 3D preview next to each bubble.
fn shape_glyph(ui: &mut egui::Ui, shape: Shape, color: egui::Color32) {
    let (rect, response) =
        ui.allocate_exact_size(egui::Vec2::splat(GLYPH_SIZE), egui::Sense::hover());
    let painter = ui.painter();
    let c = rect.center();
    let r = rect.width() * 0.45;
    let stroke = egui::Stroke::new(1.0, color);

    let polygon = |sides: usize, phase: f32| {
        (0..sides)
            .map(|i| {
                let angle = phase + std::f32::consts::TAU * i as f32 / sides as f32;
                c + egui::vec2(angle.cos(), angle.sin()) * r
            })
            .collect::<Vec<_>>()
    };

    match shape {
        Shape::Torus => {
            painter.circle_stroke(c, r * 0.8, egui::Stroke::new(3.0, color));
        }
        Shape::Sphere => {
            painter.circle_filled(c, r, color);
        }
        Shape::Box | Shape::Cylinder => {
            let corner = if shape == Shape::Cylinder { r * 0.5 } else { 0.0 };
            painter.rect_filled(rect.shrink(2.0), corner, color);
        }
        Shape::Tetrahedron | Shape::Cone => {
            let phase = -std::f32::consts::FRAC_PI_2;
            painter.add(egui::Shape::convex_polygon(polygon(3, phase), color, stroke));
        }
        Shape::Octahedron => {
            painter.add(egui::Shape::convex_polygon(polygon(4, 0.0), color, stroke));
        }
        Shape::Dodecahedron => {
            let phase = -std::f32::consts::FRAC_PI_2;
            painter.add(egui::Shape::convex_polygon(polygon(5, phase), color, stroke));
        }
        Shape::Icosahedron => {
            painter.add(egui::Shape::convex_polygon(polygon(6, 0.0), color, stroke));
        }
    }

    response.on_hover_text(shape.label());
}
