//! Remote prediction service contract.

pub mod api;

pub use api::{PredictError, PredictionRequest, PredictionResponse, predict};
