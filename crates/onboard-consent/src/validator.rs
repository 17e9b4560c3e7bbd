//! # Constraint Validator
//!
//! Compares a user-entered duration or frequency against a template
//! maximum. The violation message is phrased in the unit the user is typing
//! in, not the template's native unit.

use onboard_core::{convert_duration, duration_to_string, to_days, Duration};

/// Check `input` against `max`, returning a message when it is exceeded.
///
/// There is nothing to check when either side is absent or has no numeric
/// value, or when either side is coterminous with the loan tenure. Reaching
/// the maximum exactly is allowed.
pub fn validate_duration(input: Option<&Duration>, max: Option<&Duration>) -> Option<String> {
    let (input, max) = (input?, max?);
    if max.unit.is_tenure() || input.unit.is_tenure() {
        return None;
    }
    let input_days = to_days(input.value()?, input.unit);
    let max_days = to_days(max.value()?, max.unit);
    if input_days <= max_days {
        return None;
    }
    let limit = convert_duration(max, input.unit);
    Some(format!("Maximum allowed is {}", duration_to_string(Some(&limit))))
}
