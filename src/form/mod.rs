//! Form, error and result state for the health input form.
//!
//! Everything here is UI-agnostic: the egui layer reads this state to render
//! and forwards edits and submit clicks back as method calls.

mod result;

use std::collections::BTreeMap;

pub use result::ResultState;

use crate::features::{self, FEATURES};
use crate::messages;
use crate::prediction::{PredictError, PredictionRequest, PredictionResponse};
use crate::validation;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

/// Why a submit request did not start a prediction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A prediction is already in flight.
    Busy,
    /// At least one field shows a validation message.
    InvalidFields(Vec<&'static str>),
    /// Required fields were left blank; they now carry a message.
    MissingFields(Vec<&'static str>),
}

#[derive(Clone, Debug)]
pub struct HealthForm {
    raw: BTreeMap<&'static str, String>,
    values: BTreeMap<&'static str, f64>,
    errors: BTreeMap<&'static str, Option<&'static str>>,
    result: ResultState,
    loading: bool,
    require_all_fields: bool,
}

impl Default for HealthForm {
    fn default() -> Self {
        Self::new(true)
    }
}

impl HealthForm {
    /// Create an empty form.
    ///
    /// With `require_all_fields`, a submit with blank inputs is refused and
    /// the blank inputs are flagged. Without it, blank inputs are simply left
    /// out of the request.
    pub fn new(require_all_fields: bool) -> Self {
        Self {
            raw: BTreeMap::new(),
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            result: ResultState::Empty,
            loading: false,
            require_all_fields,
        }
    }

    /// Apply an edit to one input: parse, validate, then store value and message.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        let feature =
            features::find(name).ok_or_else(|| FormError::UnknownField(name.to_string()))?;
        let value = validation::parse_raw(raw);
        let error = validation::validate(feature.name, value);
        self.raw.insert(feature.name, raw.to_string());
        self.values.insert(feature.name, value);
        self.errors.insert(feature.name, error);
        Ok(())
    }

    /// Text currently shown in the input, empty if never edited.
    pub fn raw_text(&self, name: &str) -> &str {
        self.raw.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Current validation message for `name`; untouched fields have none.
    pub fn error(&self, name: &str) -> Option<&'static str> {
        self.errors.get(name).copied().flatten()
    }

    /// Names of fields currently showing a message, in display order.
    pub fn fields_with_errors(&self) -> Vec<&'static str> {
        FEATURES
            .iter()
            .map(|feature| feature.name)
            .filter(|name| self.error(name).is_some())
            .collect()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.values().any(Option::is_some)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> &ResultState {
        &self.result
    }

    /// Build the request body from every entered value.
    pub fn request(&self) -> PredictionRequest {
        PredictionRequest {
            values: self
                .values
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        }
    }

    /// Run the submit gate and, if it passes, mark the form as loading.
    ///
    /// Fields that already show a message block the submit without touching
    /// any state. Blank required fields are flagged and also block it.
    pub fn begin_submit(&mut self) -> Result<PredictionRequest, SubmitBlocked> {
        if self.loading {
            return Err(SubmitBlocked::Busy);
        }
        if self.has_errors() {
            return Err(SubmitBlocked::InvalidFields(self.fields_with_errors()));
        }
        if self.require_all_fields {
            let missing: Vec<&'static str> = FEATURES
                .iter()
                .map(|feature| feature.name)
                .filter(|name| self.raw_text(name).trim().is_empty())
                .collect();
            if !missing.is_empty() {
                for &name in &missing {
                    self.errors.insert(name, Some(messages::FIELD_REQUIRED));
                }
                return Err(SubmitBlocked::MissingFields(missing));
            }
        }
        self.loading = true;
        Ok(self.request())
    }

    /// Store the outcome of the in-flight prediction and clear the loading flag.
    pub fn complete_submit(&mut self, outcome: Result<PredictionResponse, PredictError>) {
        self.result = match outcome {
            Ok(response) => ResultState::Prediction(response),
            Err(err) => ResultState::Error(err.user_message()),
        };
        self.loading = false;
    }

    /// Drop the in-flight submission without a result; the previous result stays.
    pub fn abandon_submit(&mut self) {
        self.loading = false;
    }
}
