//! # Advisory Review
//!
//! Summarizes what is still wrong with a form before export: required
//! fields left unanswered and consent-parameter rows that violate their
//! template. The review never changes the form and never blocks export on
//! its own; callers decide what to do with an invalid report.

use serde::Serialize;

use onboard_consent::{revalidate, ConsentParamEntry, TemplateCatalog};

use crate::fields::FieldCatalog;
use crate::form::OnboardingForm;

/// Result of reviewing a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewReport {
    /// Whether the form has no errors. Warnings do not count.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ReviewReport {
    fn default() -> Self {
        Self::ok()
    }
}

impl ReviewReport {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Add an error. Marks the report invalid.
    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn merge(&mut self, other: ReviewReport) {
        if !other.is_valid {
            self.is_valid = false;
        }
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Required fields without an answer, one error each.
pub fn review_required_fields(form: &OnboardingForm, fields: &FieldCatalog) -> ReviewReport {
    let mut report = ReviewReport::ok();
    for field in fields.required_fields() {
        if !form.is_answered(&field.id) {
            report.add_error(format!("missing required field: {}", field.display_name()));
        }
    }
    report
}

/// Re-validate one consent-parameter row as it stands.
pub fn review_consent_param(
    catalog: &TemplateCatalog,
    regulator: &str,
    index: usize,
    entry: &ConsentParamEntry,
) -> ReviewReport {
    let mut report = ReviewReport::ok();
    let result = revalidate(catalog, regulator, entry);
    if result.template.is_none() {
        report.add_warning(format!(
            "consentParams[{index}]: no consent template for purpose code {:?} under {regulator}",
            entry.purpose_code
        ));
    }
    for (slot, message) in result.errors.messages() {
        report.add_error(format!("consentParams[{index}].{slot}: {message}"));
    }
    for notification in &result.notifications {
        report.add_warning(format!("consentParams[{index}]: {notification}"));
    }
    report
}

/// Review a whole form.
pub fn review_form(
    form: &OnboardingForm,
    fields: &FieldCatalog,
    catalog: &TemplateCatalog,
) -> ReviewReport {
    let mut report = review_required_fields(form, fields);
    if form.regulator.is_empty() {
        report.add_warning("no regulator selected".to_string());
    }
    if form.consent_params.is_empty() {
        report.add_warning("no consent parameters entered".to_string());
    }
    for (index, entry) in form.consent_params.iter().enumerate() {
        report.merge(review_consent_param(catalog, &form.regulator, index, entry));
    }
    tracing::info!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "form reviewed"
    );
    report
}
