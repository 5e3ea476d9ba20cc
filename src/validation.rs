//! Raw input parsing and per-field range checks.

use crate::features;
use crate::messages;

/// Parse the whole input as a number, falling back to `0.0`.
///
/// Surrounding whitespace is ignored. Anything that is not a complete number
/// (`"22kg"`, `"7e"`, `"abc"`), and values that overflow to infinity, read as
/// `0.0` and are then validated like any other value.
pub fn parse_raw(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        // `+ 0.0` folds negative zero into zero.
        Ok(value) if value.is_finite() => value + 0.0,
        _ => 0.0,
    }
}

/// Check `value` against the rules for `field`; the first failing rule wins.
pub fn validate(field: &str, value: f64) -> Option<&'static str> {
    if value < 0.0 {
        return Some(messages::NEGATIVE_VALUE);
    }
    match field {
        features::BMI if !(10.0..=50.0).contains(&value) => Some(messages::BMI_OUT_OF_RANGE),
        features::FAT_PERCENT | features::CARBOHYDRATES_PERCENT if value > 100.0 => {
            Some(messages::PERCENT_OVER_100)
        }
        _ => None,
    }
}
