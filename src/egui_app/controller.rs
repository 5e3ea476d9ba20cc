//! Bridges the health form to the egui renderer and the prediction worker.

mod jobs;

use crate::config::{AppSettings, ConfigError};
use crate::form::{FormError, HealthForm, SubmitBlocked};
use crate::http_client;
use jobs::{ControllerJobs, JobMessage, PredictionJob};

/// Owns form state and the in-flight prediction request.
///
/// Dropping the controller cancels any pending request; its result is
/// discarded instead of being applied.
pub struct FormController {
    form: HealthForm,
    endpoint: String,
    agent: ureq::Agent,
    jobs: ControllerJobs,
}

impl FormController {
    /// Build a controller from loaded settings.
    pub fn new(settings: &AppSettings) -> Result<Self, ConfigError> {
        let endpoint = settings.prediction.endpoint_url()?;
        Ok(Self {
            form: HealthForm::new(settings.form.require_all_fields),
            endpoint: endpoint.to_string(),
            agent: http_client::agent(settings.prediction.timeouts()),
            jobs: ControllerJobs::new(),
        })
    }

    pub fn form(&self) -> &HealthForm {
        &self.form
    }

    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.jobs.set_repaint_context(ctx);
    }

    /// Forward an input edit to the form.
    pub fn field_changed(&mut self, name: &str, raw: &str) -> Result<(), FormError> {
        self.form.set_field(name, raw)?;
        if let Some(message) = self.form.error(name) {
            tracing::debug!(field = name, error = message, "Field invalid");
        }
        Ok(())
    }

    /// Run the submit gate and start the request in the background.
    pub fn submit(&mut self) -> Result<(), SubmitBlocked> {
        let request = match self.form.begin_submit() {
            Ok(request) => request,
            Err(blocked) => {
                tracing::info!(reason = ?blocked, "Submit blocked");
                return Err(blocked);
            }
        };
        let fields = request.values.len();
        let payload = serde_json::to_string(&request).unwrap_or_default();
        let request_id = self.jobs.begin_prediction(
            self.agent.clone(),
            PredictionJob {
                endpoint: self.endpoint.clone(),
                request,
            },
        );
        tracing::info!(
            request_id,
            endpoint = %self.endpoint,
            fields,
            %payload,
            "Prediction request sent"
        );
        Ok(())
    }

    /// Abandon the in-flight prediction. Its result, if it still arrives, is
    /// discarded and the form leaves the loading state.
    pub fn cancel_prediction(&mut self) {
        if self.jobs.cancel_in_flight() {
            self.form.abandon_submit();
        }
    }

    pub fn is_prediction_in_progress(&self) -> bool {
        self.jobs.prediction_in_progress()
    }

    /// Apply finished background work. Returns true if the form changed.
    pub fn poll_jobs(&mut self) -> bool {
        let mut changed = false;
        while let Ok(message) = self.jobs.try_recv_message() {
            match message {
                JobMessage::PredictionFinished(message) => {
                    let request_id = message.request_id;
                    if !self.jobs.finish_prediction(request_id) {
                        tracing::debug!(request_id, "Ignoring stale prediction");
                        continue;
                    }
                    match &message.result {
                        Ok(response) => tracing::info!(
                            request_id,
                            prediction = response.prediction,
                            confidence = response.confidence,
                            "Prediction received"
                        ),
                        Err(err) => tracing::warn!(request_id, error = %err, "Prediction failed"),
                    }
                    self.form.complete_submit(message.result);
                    changed = true;
                }
            }
        }
        changed
    }
}
