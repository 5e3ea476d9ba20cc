use crate::prediction::PredictionResponse;

/// Outcome of the most recent submit attempt.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultState {
    /// Nothing submitted yet.
    #[default]
    Empty,
    Prediction(PredictionResponse),
    /// User-facing error text.
    Error(String),
}

impl ResultState {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn prediction(&self) -> Option<PredictionResponse> {
        match self {
            Self::Prediction(response) => Some(*response),
            _ => None,
        }
    }
}
