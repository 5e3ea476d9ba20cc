use super::EguiApp;
use super::style;
use crate::egui_app::view_model::{self, PanelTone};
use eframe::egui::{self, RichText};

impl EguiApp {
    /// Render the outcome of the last submission, if any.
    pub(super) fn render_result(&mut self, ui: &mut egui::Ui) {
        let Some(view) = view_model::result_view(self.controller.form().result()) else {
            return;
        };
        let colors = style::tone_colors(view.tone);
        ui.add_space(24.0);
        egui::Frame::new()
            .fill(colors.fill)
            .stroke(egui::Stroke::new(1.0, colors.stroke))
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(20))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(tone_icon(view.tone)).size(22.0).color(colors.text));
                    ui.add_space(8.0);
                    ui.vertical(|ui| {
                        if let Some(title) = view.title {
                            ui.label(RichText::new(title).size(18.0).strong());
                            ui.label(
                                RichText::new(&view.detail).color(style::palette().text_muted),
                            );
                        } else {
                            ui.label(RichText::new(&view.detail).color(colors.text));
                        }
                    });
                });
            });
    }
}

fn tone_icon(tone: PanelTone) -> &'static str {
    match tone {
        PanelTone::Success => "✔",
        PanelTone::Caution => "⚠",
        PanelTone::Error => "⊗",
    }
}
