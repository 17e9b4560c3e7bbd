//! # Catalog String Parsing
//!
//! Template catalogs express limits as prose: `"90 Days"`,
//! `"Coterminous with loan tenure"`, `"4 times per Month"`, `"NA"`. These
//! functions turn that prose into [`Duration`] values and back.
//!
//! Parsing never fails loudly. `"NA"`, empty and unrecognized strings all
//! yield `None`, which callers treat as "no constraint".

use std::sync::OnceLock;

use regex::Regex;

use crate::duration::{Duration, DurationUnit};

const COTERMINOUS_LABEL: &str = "Coterminous with loan tenure";

const PERIOD_PATTERN: &str = r"^\s*(\d+(?:\.\d+)?)\s*([A-Za-z]+)\s*$";
const FREQUENCY_PATTERN: &str = r"(?i)^\s*(\d+(?:\.\d+)?)\s*times?\s+per\s+([a-z]+)\s*$";

fn period_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(PERIOD_PATTERN).expect("Invalid period regex"))
}

fn frequency_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(FREQUENCY_PATTERN).expect("Invalid frequency regex"))
}

fn is_not_applicable(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case("na")
}

/// Parse a frequency such as `"4 times per Month"` into `{4, Month}`.
pub fn parse_frequency_string(s: &str) -> Option<Duration> {
    if is_not_applicable(s) {
        return None;
    }
    let caps = frequency_pattern().captures(s)?;
    let unit = DurationUnit::parse_calendar(caps.get(2)?.as_str())?;
    Some(Duration::new(caps.get(1)?.as_str(), unit))
}

/// Parse a period such as `"90 Days"` into `{90, Day}`.
///
/// Any string mentioning "coterminous" maps to `{0, tenure}` regardless of
/// the rest of its text.
pub fn parse_period_string(s: &str) -> Option<Duration> {
    if is_not_applicable(s) {
        return None;
    }
    if s.to_lowercase().contains("coterminous") {
        return Some(Duration::new("0", DurationUnit::Tenure));
    }
    let caps = period_pattern().captures(s)?;
    let unit = DurationUnit::parse_calendar(caps.get(2)?.as_str())?;
    Some(Duration::new(caps.get(1)?.as_str(), unit))
}

/// Render a duration for display.
///
/// `tenure` renders as "Coterminous with loan tenure"; otherwise
/// `"<number> <unit>"`, pluralized unless the number is 1. Absent durations
/// and empty numbers render as an empty string.
pub fn duration_to_string(duration: Option<&Duration>) -> String {
    let Some(duration) = duration else {
        return String::new();
    };
    if duration.unit.is_tenure() {
        return COTERMINOUS_LABEL.to_string();
    }
    if duration.is_empty() {
        return String::new();
    }
    let number = duration.number.trim();
    let plural = if duration.value() == Some(1.0) { "" } else { "s" };
    format!("{number} {}{plural}", duration.unit)
}
