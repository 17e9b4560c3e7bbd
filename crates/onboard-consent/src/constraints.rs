//! Derived constraints: what the form layer renders for one entry.

use serde::{Deserialize, Serialize};

use onboard_core::{convert_duration, Duration, FetchType};

use crate::catalog::ConsentTemplate;
use crate::entry::{ConsentParamEntry, DurationField};

/// Limits and allowed values for an entry under its resolved template.
///
/// Maxima are expressed in the unit the entry currently uses for the same
/// field, so they can be shown next to the input. Coterminous maxima are
/// passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedConstraints {
    pub allowed_fi_types: Vec<String>,
    pub allowed_consent_types: Vec<String>,
    pub required_fetch_type: Option<FetchType>,
    pub max_consent_validity: Option<Duration>,
    pub max_frequency: Option<Duration>,
    pub max_fi_data_range: Option<Duration>,
    pub max_data_life: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_purpose_text: Option<String>,
}

impl DerivedConstraints {
    /// Derive constraints for `entry`; no template means no constraints.
    pub fn derive(template: Option<&ConsentTemplate>, entry: &ConsentParamEntry) -> Self {
        let Some(template) = template else {
            return Self::default();
        };
        let max_in_entry_unit = |field: DurationField| {
            let max = field.limit(template)?;
            let unit = entry.duration(field).unit;
            if max.unit.is_tenure() || unit.is_tenure() {
                Some(max)
            } else {
                Some(convert_duration(&max, unit))
            }
        };
        Self {
            allowed_fi_types: template.fi_types.clone(),
            allowed_consent_types: template.consent_type.clone(),
            required_fetch_type: template.required_fetch_type(),
            max_consent_validity: max_in_entry_unit(DurationField::ConsentValidity),
            max_frequency: max_in_entry_unit(DurationField::Frequency),
            max_fi_data_range: max_in_entry_unit(DurationField::FiDataRange),
            max_data_life: max_in_entry_unit(DurationField::DataLife),
            suggested_purpose_text: Some(template.purpose_text.clone()).filter(|t| !t.is_empty()),
        }
    }

    /// Constraints with maxima in the template's own units.
    pub fn native(template: Option<&ConsentTemplate>) -> Self {
        let Some(template) = template else {
            return Self::default();
        };
        Self {
            max_consent_validity: template.consent_validity_limit(),
            max_frequency: template.frequency_limit(),
            max_fi_data_range: template.fi_data_range_limit(),
            max_data_life: template.data_life_limit(),
            ..Self::derive(Some(template), &ConsentParamEntry::default())
        }
    }

    pub fn max(&self, field: DurationField) -> Option<&Duration> {
        match field {
            DurationField::ConsentValidity => self.max_consent_validity.as_ref(),
            DurationField::Frequency => self.max_frequency.as_ref(),
            DurationField::FiDataRange => self.max_fi_data_range.as_ref(),
            DurationField::DataLife => self.max_data_life.as_ref(),
        }
    }
}
