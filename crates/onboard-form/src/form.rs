//! # Onboarding Form Document
//!
//! The answers collected across the wizard: free-form fields grouped by
//! section, plus the list of consent-parameter rows. This is exactly the
//! document that gets exported.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use onboard_consent::{
    apply_edit, recompute, resolve_for_entry, revalidate, ConsentParamEntry, EntryEdit,
    Recomputed, TemplateCatalog,
};

use crate::error::FormResult;

/// Field values keyed by field id.
pub type Section = IndexMap<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingForm {
    pub regulator: String,
    pub sections: IndexMap<String, Section>,
    pub consent_params: Vec<ConsentParamEntry>,
}

/// Whether a field value counts as answered.
fn is_answered(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

impl OnboardingForm {
    pub fn new(regulator: impl Into<String>) -> Self {
        Self {
            regulator: regulator.into(),
            ..Self::default()
        }
    }

    /// Load a previously saved or exported form from JSON or YAML.
    pub fn load(path: &Path) -> FormResult<Self> {
        let form: Self = onboard_consent::load_typed(path)?;
        tracing::debug!(
            path = %path.display(),
            sections = form.sections.len(),
            consent_params = form.consent_params.len(),
            "loaded onboarding form"
        );
        Ok(form)
    }

    pub fn set_field(&mut self, section: &str, id: &str, value: Value) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(id.to_string(), value);
    }

    /// Look a field up by id in any section.
    pub fn field(&self, id: &str) -> Option<&Value> {
        self.sections.values().find_map(|s| s.get(id))
    }

    pub fn is_answered(&self, id: &str) -> bool {
        self.field(id).is_some_and(is_answered)
    }

    /// Append an empty consent-parameter row and return its index.
    pub fn add_consent_param(&mut self) -> usize {
        self.consent_params.push(ConsentParamEntry::default());
        self.consent_params.len() - 1
    }

    pub fn remove_consent_param(&mut self, index: usize) -> Option<ConsentParamEntry> {
        (index < self.consent_params.len()).then(|| self.consent_params.remove(index))
    }

    /// Apply one edit to a consent-parameter row, storing the corrected row.
    ///
    /// The stored row is first re-validated as it stands; anything that pass
    /// prunes is reported ahead of the edit's own notifications.
    ///
    /// Returns `None` when there is no row at `index`.
    pub fn edit_consent_param(
        &mut self,
        catalog: &TemplateCatalog,
        index: usize,
        edit: EntryEdit,
    ) -> Option<Recomputed> {
        let entry = self.consent_params.get(index)?;
        let mut stored = revalidate(catalog, &self.regulator, entry);
        let mut notifications = std::mem::take(&mut stored.notifications);
        let mut result = apply_edit(catalog, &self.regulator, &stored.into_state(), edit);
        notifications.append(&mut result.notifications);
        result.notifications = notifications;
        self.consent_params[index] = result.entry.clone();
        Some(result)
    }

    /// Switch regulator and fully re-validate every consent-parameter row.
    pub fn set_regulator(
        &mut self,
        catalog: &TemplateCatalog,
        regulator: impl Into<String>,
    ) -> Vec<Recomputed> {
        let previous_regulator = std::mem::replace(&mut self.regulator, regulator.into());
        let results: Vec<Recomputed> = self
            .consent_params
            .iter()
            .map(|entry| {
                let previous = resolve_for_entry(catalog, &previous_regulator, entry);
                recompute(catalog, &self.regulator, entry, previous)
            })
            .collect();
        for (entry, result) in self.consent_params.iter_mut().zip(&results) {
            *entry = result.entry.clone();
        }
        tracing::info!(
            from = %previous_regulator,
            to = %self.regulator,
            entries = results.len(),
            "regulator changed"
        );
        results
    }

    /// Clear every answer, keeping the regulator.
    pub fn reset(&mut self) {
        self.sections.clear();
        self.consent_params.clear();
    }
}
