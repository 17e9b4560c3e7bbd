//! # Consent Parameter Entries
//!
//! One row of the consent-parameters list as the user fills it in, and the
//! advisory error set kept alongside it.

use serde::{Deserialize, Serialize};

use onboard_core::{Duration, FetchType};

use crate::catalog::ConsentTemplate;

/// The four duration-valued fields of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DurationField {
    ConsentValidity,
    Frequency,
    FiDataRange,
    DataLife,
}

impl DurationField {
    pub fn all() -> &'static [DurationField] {
        &[
            Self::ConsentValidity,
            Self::Frequency,
            Self::FiDataRange,
            Self::DataLife,
        ]
    }

    /// Name of this field's slot in a [`ValidationErrorSet`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConsentValidity => "consentValidity",
            Self::Frequency => "frequency",
            Self::FiDataRange => "fiDataRange",
            Self::DataLife => "dataLife",
        }
    }

    /// The template's maximum for this field, if it declares a parseable one.
    pub fn limit(&self, template: &ConsentTemplate) -> Option<Duration> {
        match self {
            Self::ConsentValidity => template.consent_validity_limit(),
            Self::Frequency => template.frequency_limit(),
            Self::FiDataRange => template.fi_data_range_limit(),
            Self::DataLife => template.data_life_limit(),
        }
    }
}

impl std::fmt::Display for DurationField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A consent-parameter row with the user's in-progress selections.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsentParamEntry {
    pub usecase_category: String,
    pub purpose_code: String,
    pub purpose_text: String,
    pub consent_validity_period: Duration,
    pub fetch_type: FetchType,
    pub consent_type: Vec<String>,
    pub fi_types: Vec<String>,
    pub data_fetch_frequency: Duration,
    pub fi_data_range: Duration,
    pub data_life: Duration,
}

impl ConsentParamEntry {
    pub fn duration(&self, field: DurationField) -> &Duration {
        match field {
            DurationField::ConsentValidity => &self.consent_validity_period,
            DurationField::Frequency => &self.data_fetch_frequency,
            DurationField::FiDataRange => &self.fi_data_range,
            DurationField::DataLife => &self.data_life,
        }
    }

    pub fn duration_mut(&mut self, field: DurationField) -> &mut Duration {
        match field {
            DurationField::ConsentValidity => &mut self.consent_validity_period,
            DurationField::Frequency => &mut self.data_fetch_frequency,
            DurationField::FiDataRange => &mut self.fi_data_range,
            DurationField::DataLife => &mut self.data_life,
        }
    }

    /// The FI type used to narrow template resolution: the first selected.
    pub fn primary_fi_type(&self) -> Option<&str> {
        self.fi_types.first().map(String::as_str)
    }
}

/// Advisory validation messages for one entry, one optional slot per field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationErrorSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_validity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_data_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_life: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fi_types: Option<String>,
}

impl ValidationErrorSet {
    /// Whether no slot holds a message.
    pub fn is_empty(&self) -> bool {
        self.messages().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn duration(&self, field: DurationField) -> Option<&str> {
        match field {
            DurationField::ConsentValidity => self.consent_validity.as_deref(),
            DurationField::Frequency => self.frequency.as_deref(),
            DurationField::FiDataRange => self.fi_data_range.as_deref(),
            DurationField::DataLife => self.data_life.as_deref(),
        }
    }

    /// Replace a duration field's slot, leaving every other slot untouched.
    pub fn set_duration(&mut self, field: DurationField, message: Option<String>) {
        let slot = match field {
            DurationField::ConsentValidity => &mut self.consent_validity,
            DurationField::Frequency => &mut self.frequency,
            DurationField::FiDataRange => &mut self.fi_data_range,
            DurationField::DataLife => &mut self.data_life,
        };
        *slot = message;
    }

    /// Populated slots as `(slot name, message)`, in field order.
    pub fn messages(&self) -> Vec<(&'static str, &str)> {
        [
            ("consentValidity", &self.consent_validity),
            ("frequency", &self.frequency),
            ("fiDataRange", &self.fi_data_range),
            ("dataLife", &self.data_life),
            ("consentType", &self.consent_type),
            ("fiTypes", &self.fi_types),
        ]
        .into_iter()
        .filter_map(|(name, slot)| slot.as_deref().map(|m| (name, m)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::DurationUnit;

    #[test]
    fn new_entry_defaults() {
        let entry = ConsentParamEntry::default();
        assert_eq!(entry.fetch_type, FetchType::Onetime);
        assert_eq!(entry.consent_validity_period, Duration::empty(DurationUnit::Day));
        assert!(entry.consent_type.is_empty());
        assert!(entry.primary_fi_type().is_none());
    }

    #[test]
    fn entry_uses_camel_case_form_names() {
        let entry: ConsentParamEntry = serde_json::from_str(
            r#"{
                "usecaseCategory": "Lending",
                "purposeCode": "103",
                "fetchType": "Periodic",
                "fiTypes": ["Deposit"],
                "dataFetchFrequency": {"number": "4", "unit": "Month"}
            }"#,
        )
        .unwrap();
        assert_eq!(entry.usecase_category, "Lending");
        assert_eq!(entry.fetch_type, FetchType::Periodic);
        assert_eq!(entry.primary_fi_type(), Some("Deposit"));
        assert_eq!(
            entry.duration(DurationField::Frequency),
            &Duration::new("4", DurationUnit::Month)
        );
        assert!(entry.data_life.is_empty());
    }

    #[test]
    fn duration_mut_targets_the_right_field() {
        let mut entry = ConsentParamEntry::default();
        *entry.duration_mut(DurationField::DataLife) = Duration::new("1", DurationUnit::Year);
        assert_eq!(entry.data_life.number, "1");
        assert!(entry.fi_data_range.is_empty());
    }

    #[test]
    fn set_duration_touches_one_slot() {
        let mut errors = ValidationErrorSet {
            fi_types: Some("bad fi".to_string()),
            ..ValidationErrorSet::default()
        };
        errors.set_duration(DurationField::FiDataRange, Some("too long".to_string()));
        assert_eq!(errors.duration(DurationField::FiDataRange), Some("too long"));
        assert_eq!(errors.fi_types.as_deref(), Some("bad fi"));
        errors.set_duration(DurationField::FiDataRange, None);
        assert_eq!(errors.messages(), vec![("fiTypes", "bad fi")]);
    }

    #[test]
    fn empty_error_set_serializes_to_empty_object() {
        let errors = ValidationErrorSet::default();
        assert!(errors.is_empty());
        assert_eq!(serde_json::to_value(&errors).unwrap(), serde_json::json!({}));
    }
}
