//! Client for the remote prediction endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{http_client, messages};

/// Endpoint used when no config overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

const MAX_RESPONSE_BYTES: usize = 64 * 1024;

/// Request body: feature name to value, for every field the user entered.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionRequest {
    pub values: BTreeMap<String, f64>,
}

/// Successful classification returned by the service.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PredictionResponse {
    /// `1` for a positive result, `0` otherwise.
    pub prediction: i64,
    /// Fraction in `[0, 1]`.
    pub confidence: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    /// The service answered with a non-2xx status.
    #[error("Server error: {0}")]
    Server(String),
    /// No response was obtained (refused, DNS failure, timeout).
    #[error("HTTP error: {0}")]
    Transport(String),
    /// A 2xx response whose body is not a prediction.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl PredictError {
    /// Text shown in the result panel.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(detail) => format!("{}{detail}", messages::SERVER_ERROR_PREFIX),
            Self::Transport(_) => messages::CONNECTION_FAILED.to_string(),
            Self::InvalidResponse(detail) => {
                format!("{}{detail}", messages::INVALID_RESPONSE_PREFIX)
            }
        }
    }
}

/// Issue one prediction request and wait for the answer.
pub fn predict(
    agent: &ureq::Agent,
    endpoint: &str,
    request: &PredictionRequest,
) -> Result<PredictionResponse, PredictError> {
    let req = agent
        .post(endpoint)
        .set("Accept", "application/json")
        .set("Content-Type", "application/json");

    let response = match req.send_json(request) {
        Ok(response) => response,
        Err(ureq::Error::Status(code, response)) => {
            let status_text = response.status_text().to_string();
            let body = http_client::read_text(response, MAX_RESPONSE_BYTES).unwrap_or_default();
            return Err(PredictError::Server(server_error_detail(
                code,
                &status_text,
                &body,
            )));
        }
        Err(ureq::Error::Transport(err)) => {
            return Err(PredictError::Transport(err.to_string()));
        }
    };

    let body = http_client::read_text(response, MAX_RESPONSE_BYTES)
        .map_err(|err| PredictError::InvalidResponse(err.to_string()))?;
    parse_prediction_response(&body)
}

#[derive(Deserialize)]
struct ErrorBodyWire {
    error: Option<String>,
}

/// Prefer the body's `error` field, then the status text.
fn server_error_detail(code: u16, status_text: &str, body: &str) -> String {
    let from_body = serde_json::from_str::<ErrorBodyWire>(body.trim())
        .ok()
        .and_then(|wire| wire.error)
        .filter(|error| !error.is_empty());
    if let Some(error) = from_body {
        return error;
    }
    if status_text.trim().is_empty() {
        format!("HTTP {code}")
    } else {
        status_text.to_string()
    }
}

fn parse_prediction_response(body: &str) -> Result<PredictionResponse, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::InvalidResponse(
            "Empty response body".to_string(),
        ));
    }
    serde_json::from_str(trimmed)
        .map_err(|err| PredictError::InvalidResponse(format!("{err}: {trimmed}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_as_flat_object() {
        let mut request = PredictionRequest::default();
        request.values.insert("BMI".to_string(), 22.0);
        request.values.insert("Fat (%)".to_string(), 30.5);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({ "BMI": 22.0, "Fat (%)": 30.5 }));
    }

    #[test]
    fn parses_prediction_body() {
        let parsed = parse_prediction_response(r#"{ "prediction": 1, "confidence": 0.87 }"#).unwrap();
        assert_eq!(
            parsed,
            PredictionResponse {
                prediction: 1,
                confidence: 0.87
            }
        );
    }

    #[test]
    fn rejects_body_without_confidence() {
        let err = parse_prediction_response(r#"{ "prediction": 0 }"#).unwrap_err();
        assert!(matches!(err, PredictError::InvalidResponse(_)));
        assert!(err.user_message().starts_with(messages::INVALID_RESPONSE_PREFIX));
    }

    #[test]
    fn rejects_empty_body() {
        let err = parse_prediction_response("  ").unwrap_err();
        assert!(err.to_string().contains("Empty response body"));
    }

    #[test]
    fn server_detail_prefers_error_field() {
        let detail = server_error_detail(500, "INTERNAL SERVER ERROR", r#"{"error":"model unavailable"}"#);
        assert_eq!(detail, "model unavailable");
    }

    #[test]
    fn server_detail_falls_back_to_status_text() {
        assert_eq!(server_error_detail(503, "Service Unavailable", "<html>"), "Service Unavailable");
        assert_eq!(server_error_detail(500, "Internal Server Error", r#"{"error":""}"#), "Internal Server Error");
        assert_eq!(server_error_detail(502, "", ""), "HTTP 502");
    }

    #[test]
    fn user_messages_match_panel_text() {
        assert_eq!(
            PredictError::Server("model unavailable".into()).user_message(),
            "Server error: model unavailable"
        );
        assert_eq!(
            PredictError::Transport("connection refused".into()).user_message(),
            messages::CONNECTION_FAILED
        );
    }
}
