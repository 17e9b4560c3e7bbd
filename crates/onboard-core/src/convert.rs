//! # Unit Converter
//!
//! Converts durations through a canonical day count using fixed
//! approximations: one month is [`DAYS_PER_MONTH`] days, one year is
//! [`DAYS_PER_YEAR`] days.
//!
//! ## Round-trip drift
//!
//! [`convert_duration`] floors its result, so a round trip
//! `a -> b -> a` can lose up to one unit of `b` plus one unit of `a`
//! (expressed in days) and never gains. `1 Year -> Day` is exactly
//! `365 Day`; `1 Year -> Month` is `12 Month` (365 / 30 floored), and
//! `12 Month -> Year` is `0 Year` (360 / 365 floored).

use crate::duration::{Duration, DurationUnit};

/// Days in a month for conversion purposes.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Days in a year for conversion purposes.
pub const DAYS_PER_YEAR: f64 = 365.0;

fn days_per_unit(unit: DurationUnit) -> f64 {
    match unit {
        DurationUnit::Day => 1.0,
        DurationUnit::Month => DAYS_PER_MONTH,
        DurationUnit::Year => DAYS_PER_YEAR,
        // Not a fixed span; values pass through as if already days.
        DurationUnit::Tenure => 1.0,
    }
}

/// Express `value` of `unit` as a day count. No rounding.
pub fn to_days(value: f64, unit: DurationUnit) -> f64 {
    value * days_per_unit(unit)
}

/// Express a day count in `unit`. No rounding.
pub fn from_days(days: f64, unit: DurationUnit) -> f64 {
    days / days_per_unit(unit)
}

/// Convert a duration into `target`, flooring the result to an integer.
///
/// An empty or non-numeric number yields an empty duration in `target`
/// rather than an error.
pub fn convert_duration(duration: &Duration, target: DurationUnit) -> Duration {
    match duration.value() {
        Some(value) => {
            let converted = from_days(to_days(value, duration.unit), target);
            Duration::new(format_floor(converted), target)
        }
        None => Duration::empty(target),
    }
}

/// Render `value` floored to an integer, without a trailing `.0` or a
/// negative zero.
pub(crate) fn format_floor(value: f64) -> String {
    let floored = value.floor();
    if floored == 0.0 {
        "0".to_string()
    } else {
        format!("{floored}")
    }
}
