//! egui renderer for the health form.

mod form_panel;
mod result_panel;
pub mod style;

use crate::config::{AppSettings, ConfigError};
use crate::egui_app::controller::FormController;
use crate::messages;
use eframe::egui::{self, RichText};

/// Smallest window that still fits two input columns.
pub const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(560.0, 480.0);
const CONTENT_MAX_WIDTH: f32 = 896.0;

/// Renders the form using the shared controller state.
pub struct EguiApp {
    controller: FormController,
    visuals_set: bool,
}

impl EguiApp {
    /// Create the app from loaded settings.
    pub fn new(settings: &AppSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            controller: FormController::new(settings)?,
            visuals_set: false,
        })
    }

    /// Let the prediction worker wake the UI when its result arrives.
    pub fn with_repaint_context(mut self, ctx: &egui::Context) -> Self {
        self.controller.set_repaint_context(ctx.clone());
        self
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::light();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(16.0);
            ui.label(
                RichText::new(messages::HEADING)
                    .size(32.0)
                    .strong()
                    .color(palette.heading),
            );
            ui.label(RichText::new(messages::SUBTITLE).color(palette.text_muted));
            ui.add_space(24.0);
        });
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_jobs();

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
                    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
                    ui.horizontal(|ui| {
                        ui.add_space(margin);
                        ui.vertical(|ui| {
                            ui.set_width(width);
                            self.render_header(ui);
                            self.render_form(ui);
                            self.render_result(ui);
                            ui.add_space(24.0);
                        });
                    });
                });
        });
    }
}
