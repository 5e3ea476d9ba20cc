//! User-facing text, one language.

pub const APP_TITLE: &str = "Vitalis";
pub const HEADING: &str = "🧪 Health Analysis";
pub const SUBTITLE: &str = "Enter your data to get a health prediction";

pub const NEGATIVE_VALUE: &str = "value cannot be negative";
pub const BMI_OUT_OF_RANGE: &str = "must be between 10 and 50";
pub const PERCENT_OVER_100: &str = "percentage cannot exceed 100%";
pub const FIELD_REQUIRED: &str = "this field is required";

pub const SUBMIT: &str = "Get prediction";
pub const SUBMIT_BUSY: &str = "Prediction in progress...";
pub const CANCEL: &str = "Cancel";

pub const RESULT_POSITIVE: &str = "Positive result";
pub const RESULT_NEGATIVE: &str = "Negative result";
pub const CONFIDENCE_PREFIX: &str = "Confidence level: ";

pub const SERVER_ERROR_PREFIX: &str = "Server error: ";
pub const CONNECTION_FAILED: &str =
    "Could not connect to the server. Check that the prediction service is running.";
pub const INVALID_RESPONSE_PREFIX: &str = "Invalid response from server: ";

pub const LAUNCH_FAILED: &str = "Failed to start UI";
