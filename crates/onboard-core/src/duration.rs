//! # Duration Model
//!
//! A [`Duration`] is a `(number, unit)` pair as held by a form field: the
//! number is decimal text exactly as entered, the unit is one of
//! [`DurationUnit`]. The `tenure` unit means "coterminous with the loan
//! tenure" and is not a fixed time span.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Unit of a [`Duration`].
///
/// Serializes as `"Day"`, `"Month"`, `"Year"` and `"tenure"`. Parsing is
/// case-insensitive and accepts plural forms (`"days"`, `"MONTHS"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DurationUnit {
    #[default]
    Day,
    Month,
    Year,
    /// Coterminous with an external loan tenure.
    #[serde(rename = "tenure")]
    Tenure,
}

impl DurationUnit {
    /// The three fixed-length calendar units, in ascending length.
    pub fn calendar() -> &'static [DurationUnit] {
        &[Self::Day, Self::Month, Self::Year]
    }

    /// Canonical label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Month => "Month",
            Self::Year => "Year",
            Self::Tenure => "tenure",
        }
    }

    /// Whether this is the `tenure` sentinel.
    pub fn is_tenure(&self) -> bool {
        matches!(self, Self::Tenure)
    }

    /// Parse a calendar unit only. Used for catalog strings, where `tenure`
    /// is expressed through the "coterminous" phrase rather than a unit word.
    pub(crate) fn parse_calendar(s: &str) -> Option<Self> {
        match s.parse::<Self>() {
            Ok(Self::Tenure) | Err(_) => None,
            Ok(unit) => Some(unit),
        }
    }
}

impl FromStr for DurationUnit {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        match lower.as_str() {
            "day" | "days" => Ok(Self::Day),
            "month" | "months" => Ok(Self::Month),
            "year" | "years" => Ok(Self::Year),
            "tenure" => Ok(Self::Tenure),
            _ => Err(CoreError::UnknownDurationUnit(s.to_string())),
        }
    }
}

impl TryFrom<String> for DurationUnit {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A quantity of time as entered in a form field.
///
/// `number` may be empty, meaning "not yet entered".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Duration {
    /// Decimal text, possibly empty.
    #[serde(default)]
    pub number: String,
    /// Unit of `number`.
    #[serde(default)]
    pub unit: DurationUnit,
}

impl Duration {
    /// Create a duration from its text and unit.
    pub fn new(number: impl Into<String>, unit: DurationUnit) -> Self {
        Self {
            number: number.into(),
            unit,
        }
    }

    /// A not-yet-entered duration in the given unit.
    pub fn empty(unit: DurationUnit) -> Self {
        Self {
            number: String::new(),
            unit,
        }
    }

    /// The numeric value of `number`, or `None` when it is empty,
    /// non-numeric, or not finite.
    pub fn value(&self) -> Option<f64> {
        let text = self.number.trim();
        if text.is_empty() {
            return None;
        }
        text.parse::<f64>().ok().filter(|v| v.is_finite())
    }

    /// Whether no number has been entered.
    pub fn is_empty(&self) -> bool {
        self.number.trim().is_empty()
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::parse::duration_to_string(Some(self)))
    }
}
