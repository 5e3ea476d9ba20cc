/// Form controller and background prediction jobs.
pub mod controller;
/// egui rendering.
pub mod ui;
/// Formatting helpers shared by the renderer and tests.
pub mod view_model;
