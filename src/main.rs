#![deny(missing_docs)]

//! Entry point for the Vitalis health prediction form.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use vitalis::egui_app::ui::{EguiApp, MIN_VIEWPORT_SIZE};
use vitalis::{config, logging, messages};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = config::load_or_default();
    let log_settings = settings
        .as_ref()
        .map(|settings| settings.logging.clone())
        .unwrap_or_default();
    if let Err(err) = logging::init(&log_settings) {
        eprintln!("Logging disabled: {err}");
    }
    match &settings {
        Ok(settings) => tracing::info!(
            endpoint = %settings.prediction.endpoint,
            require_all_fields = settings.form.require_all_fields,
            "Settings loaded"
        ),
        Err(err) => tracing::error!(error = %err, "Settings unavailable"),
    }

    let viewport = egui::ViewportBuilder::default()
        .with_min_inner_size(MIN_VIEWPORT_SIZE)
        .with_inner_size([960.0, 900.0])
        .with_title(messages::APP_TITLE);
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        messages::APP_TITLE,
        native_options,
        Box::new(move |cc| {
            let app = settings
                .map_err(|err| format!("Failed to load config: {err}"))
                .and_then(|settings| {
                    EguiApp::new(&settings).map_err(|err| format!("Invalid config: {err}"))
                });
            let app: Box<dyn eframe::App> = match app {
                Ok(app) => Box::new(app.with_repaint_context(&cc.egui_ctx)),
                Err(message) => {
                    tracing::error!("{message}");
                    Box::new(LaunchError { message })
                }
            };
            Ok(app)
        }),
    )?;
    Ok(())
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(messages::LAUNCH_FAILED);
                ui.label(&self.message);
            });
        });
    }
}
