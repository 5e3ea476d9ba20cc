//! Pure formatting helpers that turn form state into renderable text.

use crate::features::FeatureDescriptor;
use crate::form::ResultState;
use crate::messages;

/// Styling family of the result panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelTone {
    Success,
    Caution,
    Error,
}

/// Everything the result panel shows.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub tone: PanelTone,
    /// Bold first line; absent for errors.
    pub title: Option<&'static str>,
    pub detail: String,
}

/// Label text for an input: the feature name plus its unit in parentheses.
pub fn field_label(feature: &FeatureDescriptor) -> String {
    format!("{} ({})", feature.name, feature.unit)
}

/// Format a confidence fraction as a percentage with one decimal, e.g. `87.0%`.
pub fn confidence_percent(confidence: f64) -> String {
    let percent = confidence * 100.0;
    // Exact halves (x.x5 is exact only when 4x is an odd integer) round away
    // from zero; every other value already formats to the nearest tenth.
    let quarters = percent * 4.0;
    let percent = if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (percent * 10.0).round() / 10.0
    } else {
        percent
    };
    format!("{percent:.1}%")
}

pub fn prediction_tone(prediction: i64) -> PanelTone {
    if prediction == 1 {
        PanelTone::Success
    } else {
        PanelTone::Caution
    }
}

pub fn prediction_title(prediction: i64) -> &'static str {
    if prediction == 1 {
        messages::RESULT_POSITIVE
    } else {
        messages::RESULT_NEGATIVE
    }
}

/// Build the result panel contents, or `None` before the first submission.
pub fn result_view(result: &ResultState) -> Option<ResultView> {
    match result {
        ResultState::Empty => None,
        ResultState::Error(message) => Some(ResultView {
            tone: PanelTone::Error,
            title: None,
            detail: message.clone(),
        }),
        ResultState::Prediction(response) => Some(ResultView {
            tone: prediction_tone(response.prediction),
            title: Some(prediction_title(response.prediction)),
            detail: format!(
                "{}{}",
                messages::CONFIDENCE_PREFIX,
                confidence_percent(response.confidence)
            ),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features;
    use crate::prediction::PredictionResponse;

    #[test]
    fn confidence_uses_one_decimal() {
        assert_eq!(confidence_percent(0.87), "87.0%");
        assert_eq!(confidence_percent(0.5), "50.0%");
        assert_eq!(confidence_percent(1.0), "100.0%");
        assert_eq!(confidence_percent(0.1234), "12.3%");
    }

    #[test]
    fn confidence_halves_round_up() {
        assert_eq!(confidence_percent(0.7225), "72.3%");
        assert_eq!(confidence_percent(0.5225), "52.3%");
        assert_eq!(confidence_percent(0.6025), "60.3%");
        assert_eq!(confidence_percent(0.7425), "74.3%");
        assert_eq!(confidence_percent(0.7275), "72.8%");
        assert_eq!(confidence_percent(0.7224), "72.2%");
    }

    #[test]
    fn positive_prediction_renders_success_panel() {
        let view = result_view(&ResultState::Prediction(PredictionResponse {
            prediction: 1,
            confidence: 0.87,
        }))
        .unwrap();
        assert_eq!(view.tone, PanelTone::Success);
        assert_eq!(view.title, Some(messages::RESULT_POSITIVE));
        assert_eq!(view.detail, "Confidence level: 87.0%");
    }

    #[test]
    fn anything_but_one_is_negative() {
        for prediction in [0, 2, -1] {
            assert_eq!(prediction_tone(prediction), PanelTone::Caution);
            assert_eq!(prediction_title(prediction), messages::RESULT_NEGATIVE);
        }
    }

    #[test]
    fn error_result_renders_message_only() {
        let view = result_view(&ResultState::Error("Server error: boom".into())).unwrap();
        assert_eq!(view.tone, PanelTone::Error);
        assert_eq!(view.title, None);
        assert_eq!(view.detail, "Server error: boom");
        assert!(result_view(&ResultState::Empty).is_none());
    }

    #[test]
    fn label_includes_unit() {
        let bmi = features::find(features::BMI).unwrap();
        assert_eq!(field_label(bmi), "BMI (kg/m²)");
    }
}
