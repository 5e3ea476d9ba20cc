use super::EguiApp;
use super::style;
use crate::egui_app::view_model;
use crate::features::{FEATURES, FeatureDescriptor};
use crate::form::HealthForm;
use crate::messages;
use eframe::egui::{self, RichText};

/// User actions collected while drawing; applied after the frame's widgets.
#[derive(Debug, Default)]
pub(super) struct FormActions {
    pub edits: Vec<(&'static str, String)>,
    pub submit: bool,
    pub cancel: bool,
}

impl EguiApp {
    /// Render one input per feature in two columns, then the submit control.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        let palette = style::palette();
        let mut actions = FormActions::default();
        egui::Frame::new()
            .fill(palette.bg_card)
            .stroke(egui::Stroke::new(1.0, palette.panel_outline))
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                let form = self.controller.form();
                for pair in FEATURES.chunks(2) {
                    ui.columns(2, |columns| {
                        for (column, feature) in columns.iter_mut().zip(pair) {
                            render_field(column, form, feature, &mut actions);
                        }
                    });
                    ui.add_space(12.0);
                }
                render_submit(ui, form.is_loading(), &mut actions);
            });
        self.apply_form_actions(actions);
    }

    fn apply_form_actions(&mut self, actions: FormActions) {
        for (name, raw) in actions.edits {
            if let Err(err) = self.controller.field_changed(name, &raw) {
                tracing::warn!("Ignoring edit: {err}");
            }
        }
        if actions.cancel {
            self.controller.cancel_prediction();
        } else if actions.submit && !self.controller.form().is_loading() {
            let _ = self.controller.submit();
        }
    }
}

fn render_field(
    ui: &mut egui::Ui,
    form: &HealthForm,
    feature: &'static FeatureDescriptor,
    actions: &mut FormActions,
) {
    let palette = style::palette();
    let error = form.error(feature.name);
    ui.label(RichText::new(view_model::field_label(feature)).strong());

    let mut text = form.raw_text(feature.name).to_string();
    let response = egui::Frame::new()
        .stroke(style::input_border(error.is_some()))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(2))
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut text)
                    .id_salt(feature.name)
                    .hint_text("0")
                    .frame(false)
                    .desired_width(f32::INFINITY),
            )
        })
        .inner;
    if response.changed() {
        actions.edits.push((feature.name, text));
    }
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        actions.submit = true;
    }

    ui.label(
        RichText::new(feature.description)
            .small()
            .color(palette.text_muted),
    );
    if let Some(message) = error {
        ui.label(RichText::new(message).small().color(palette.error));
    }
}

/// Draw the submit button, plus a cancel link while a prediction runs.
fn render_submit(ui: &mut egui::Ui, loading: bool, actions: &mut FormActions) {
    let palette = style::palette();
    let label = if loading {
        messages::SUBMIT_BUSY
    } else {
        messages::SUBMIT
    };
    ui.add_space(8.0);
    let clicked = ui
        .add_enabled_ui(!loading, |ui| {
            ui.horizontal(|ui| {
                if loading {
                    ui.add(egui::Spinner::new().size(18.0));
                }
                let button = egui::Button::new(
                    RichText::new(label).strong().color(egui::Color32::WHITE),
                )
                .fill(palette.accent)
                .min_size(egui::vec2(ui.available_width(), 40.0));
                ui.add(button).clicked()
            })
            .inner
        })
        .inner;
    actions.submit |= clicked && !loading;
    if loading {
        ui.vertical_centered(|ui| {
            if ui
                .link(RichText::new(messages::CANCEL).color(palette.text_muted))
                .clicked()
            {
                actions.cancel = true;
            }
        });
    }
}
