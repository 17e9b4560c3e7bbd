//! # Fetch Type
//!
//! Whether financial information is pulled once or repeatedly. Catalogs and
//! forms spell this differently (`"ONE-TIME"`, `"Onetime"`, `"PERIODIC"`),
//! so parsing ignores case and separators.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Data fetch cadence of a consent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum FetchType {
    /// Data is fetched a single time.
    #[default]
    Onetime,
    /// Data is fetched repeatedly at the consent's frequency.
    Periodic,
}

impl FetchType {
    /// Canonical label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Onetime => "Onetime",
            Self::Periodic => "Periodic",
        }
    }
}

impl FromStr for FetchType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squashed: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match squashed.as_str() {
            "onetime" | "once" => Ok(Self::Onetime),
            "periodic" | "recurring" => Ok(Self::Periodic),
            _ => Err(CoreError::UnknownFetchType(s.to_string())),
        }
    }
}

impl TryFrom<String> for FetchType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::fmt::Display for FetchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
