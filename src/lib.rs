//! Library exports for the app binary and integration tests.
/// Per-user config and log directories.
pub mod app_dirs;
/// Settings file.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// The fixed list of collected measurements.
pub mod features;
/// Form state and the submit gate.
pub mod form;
/// HTTP agent helpers.
pub mod http_client;
/// Tracing setup.
pub mod logging;
/// User-facing text.
pub mod messages;
/// Prediction service client.
pub mod prediction;
/// Input parsing and range checks.
pub mod validation;
