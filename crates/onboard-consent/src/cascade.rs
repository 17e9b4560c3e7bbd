//! # Cascading Re-validation
//!
//! Every edit to a consent entry is followed by one synchronous pass of
//! resolve, correct and validate. The pass is a pure function of the
//! catalog, the regulator, the entry and the previously resolved template;
//! [`ConsentEditor`] only keeps that state between edits and forwards
//! notifications.
//!
//! ## Edit semantics
//!
//! | Edit | Effect |
//! |---|---|
//! | usecase category | clears purpose code, FI types, consent types and all errors |
//! | purpose code | clears FI types, consent types and all errors; fills an empty purpose text |
//! | purpose text | stored only |
//! | FI types, fetch type, consent types, regulator | full [`recompute`] |
//! | a duration | template corrections; that duration's error slot alone is re-validated |
//!
//! The template corrections force the template's fetch type, convert
//! duration units when the template changed, prune consent types the
//! template no longer allows (with a [`Notification`]) and flag FI types it
//! no longer allows. A full recompute applies them and re-validates all
//! four durations. Consent types are pruned but FI types are only flagged.

use serde::{Deserialize, Serialize};

use onboard_core::{convert_duration, Duration, FetchType};

use crate::catalog::{ConsentTemplate, TemplateCatalog};
use crate::constraints::DerivedConstraints;
use crate::entry::{ConsentParamEntry, DurationField, ValidationErrorSet};
use crate::resolver::{filtered_template, TemplateQuery};
use crate::validator::validate_duration;

/// A user-visible side effect of re-validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    /// Selected consent types were removed because the template does not
    /// allow them.
    ConsentTypesPruned {
        removed: Vec<String>,
        kept: Vec<String>,
    },
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConsentTypesPruned { removed, .. } => write!(
                f,
                "Removed consent types not allowed for this purpose: {}",
                removed.join(", ")
            ),
        }
    }
}

/// Receiver of [`Notification`]s, e.g. a toast in the form layer.
pub trait Notifier {
    fn notify(&mut self, notification: &Notification);
}

impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: &Notification) {
        self.push(notification.clone());
    }
}

/// Notifier that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) {
        tracing::info!(%notification, "consent entry notification");
    }
}

/// A single user edit to an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEdit {
    UsecaseCategory(String),
    PurposeCode(String),
    PurposeText(String),
    FiTypes(Vec<String>),
    FetchType(FetchType),
    ConsentType(Vec<String>),
    Duration(DurationField, Duration),
}

/// An entry together with what the last pass resolved for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryState {
    pub entry: ConsentParamEntry,
    pub template: Option<ConsentTemplate>,
    pub errors: ValidationErrorSet,
}

/// Output of one re-validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recomputed {
    /// The entry after forced and corrective changes.
    pub entry: ConsentParamEntry,
    pub template: Option<ConsentTemplate>,
    pub constraints: DerivedConstraints,
    pub errors: ValidationErrorSet,
    pub notifications: Vec<Notification>,
}

impl Recomputed {
    fn new(
        entry: ConsentParamEntry,
        template: Option<ConsentTemplate>,
        errors: ValidationErrorSet,
        notifications: Vec<Notification>,
    ) -> Self {
        let constraints = DerivedConstraints::derive(template.as_ref(), &entry);
        Self {
            entry,
            template,
            constraints,
            errors,
            notifications,
        }
    }

    pub fn into_state(self) -> EntryState {
        EntryState {
            entry: self.entry,
            template: self.template,
            errors: self.errors,
        }
    }
}

/// Resolve the template for an entry's current selections.
pub fn resolve_for_entry<'c>(
    catalog: &'c TemplateCatalog,
    regulator: &str,
    entry: &ConsentParamEntry,
) -> Option<&'c ConsentTemplate> {
    let query = TemplateQuery::new(regulator, &entry.purpose_code, &entry.usecase_category)
        .with_fi_type(entry.primary_fi_type())
        .with_fetch_type(Some(entry.fetch_type))
        .with_consent_types(Some(entry.consent_type.as_slice()));
    filtered_template(catalog, &query)
}

fn validate_field(
    entry: &ConsentParamEntry,
    template: Option<&ConsentTemplate>,
    field: DurationField,
) -> Option<String> {
    let max = template.and_then(|t| field.limit(t));
    validate_duration(Some(entry.duration(field)), max.as_ref())
}

/// Convert each duration whose unit differs from its limit's unit.
fn align_units(entry: &mut ConsentParamEntry, template: &ConsentTemplate) {
    for &field in DurationField::all() {
        let Some(limit) = field.limit(template) else {
            continue;
        };
        let current = entry.duration(field);
        if limit.unit.is_tenure() || current.unit.is_tenure() || current.unit == limit.unit {
            continue;
        }
        let converted = convert_duration(current, limit.unit);
        tracing::debug!(
            field = %field,
            from = %current.unit,
            to = %limit.unit,
            "converted duration to template unit"
        );
        *entry.duration_mut(field) = converted;
    }
}

/// Drop consent types the template does not allow.
///
/// A template with no consent types declared allows everything.
fn prune_consent_types(
    entry: &mut ConsentParamEntry,
    template: &ConsentTemplate,
    errors: &mut ValidationErrorSet,
) -> Option<Notification> {
    if template.consent_type.is_empty() {
        return None;
    }
    let (kept, removed): (Vec<String>, Vec<String>) = entry
        .consent_type
        .drain(..)
        .partition(|c| template.allows_consent_type(c));
    entry.consent_type = kept;
    if removed.is_empty() {
        return None;
    }
    if entry.consent_type.is_empty() {
        errors.consent_type = Some(format!(
            "None of the selected consent types are allowed; allowed: {}",
            template.consent_type.join(", ")
        ));
    }
    Some(Notification::ConsentTypesPruned {
        removed,
        kept: entry.consent_type.clone(),
    })
}

/// Flag, without removing, FI types the template does not allow.
fn flag_fi_types(
    entry: &ConsentParamEntry,
    template: &ConsentTemplate,
    errors: &mut ValidationErrorSet,
) {
    if template.fi_types.is_empty() {
        return;
    }
    let disallowed: Vec<&str> = entry
        .fi_types
        .iter()
        .filter(|f| !template.allows_fi_type(f))
        .map(String::as_str)
        .collect();
    if !disallowed.is_empty() {
        errors.fi_types = Some(format!(
            "FI types not allowed for this purpose: {}",
            disallowed.join(", ")
        ));
    }
}

/// Apply what `template` imposes on the entry and refresh the consentType
/// and fiTypes error slots.
fn apply_template(
    entry: &mut ConsentParamEntry,
    template: &ConsentTemplate,
    previous: Option<&ConsentTemplate>,
    errors: &mut ValidationErrorSet,
) -> Option<Notification> {
    if let Some(fetch_type) = template.required_fetch_type() {
        entry.fetch_type = fetch_type;
    }
    if previous != Some(template) {
        align_units(entry, template);
    }
    errors.consent_type = None;
    errors.fi_types = None;
    let notification = prune_consent_types(entry, template, errors);
    flag_fi_types(entry, template, errors);
    notification
}

/// Full re-validation pass over an entry.
///
/// `previous` is the template resolved by the last pass; duration units are
/// converted only when the newly resolved template differs from it.
pub fn recompute(
    catalog: &TemplateCatalog,
    regulator: &str,
    entry: &ConsentParamEntry,
    previous: Option<&ConsentTemplate>,
) -> Recomputed {
    let mut entry = entry.clone();
    let template = resolve_for_entry(catalog, regulator, &entry).cloned();
    let mut errors = ValidationErrorSet::default();
    let mut notifications = Vec::new();

    if let Some(template) = &template {
        notifications.extend(apply_template(&mut entry, template, previous, &mut errors));
    }
    for &field in DurationField::all() {
        errors.set_duration(field, validate_field(&entry, template.as_ref(), field));
    }

    Recomputed::new(entry, template, errors, notifications)
}

/// Re-validate an entry as it stands, without unit conversion.
///
/// Used for entries loaded from a document, where the stored units are the
/// user's own choice rather than stale template units.
pub fn revalidate(
    catalog: &TemplateCatalog,
    regulator: &str,
    entry: &ConsentParamEntry,
) -> Recomputed {
    let current = resolve_for_entry(catalog, regulator, entry);
    recompute(catalog, regulator, entry, current)
}

/// Apply one edit to `state` and re-validate according to the edit's kind.
pub fn apply_edit(
    catalog: &TemplateCatalog,
    regulator: &str,
    state: &EntryState,
    edit: EntryEdit,
) -> Recomputed {
    let mut entry = state.entry.clone();
    match edit {
        EntryEdit::UsecaseCategory(category) => {
            entry.usecase_category = category;
            entry.purpose_code.clear();
            entry.fi_types.clear();
            entry.consent_type.clear();
            let template = resolve_for_entry(catalog, regulator, &entry).cloned();
            Recomputed::new(entry, template, ValidationErrorSet::default(), Vec::new())
        }
        EntryEdit::PurposeCode(code) => {
            entry.purpose_code = code;
            entry.fi_types.clear();
            entry.consent_type.clear();
            let template = resolve_for_entry(catalog, regulator, &entry).cloned();
            if entry.purpose_text.is_empty() {
                if let Some(t) = &template {
                    entry.purpose_text = t.purpose_text.clone();
                }
            }
            Recomputed::new(entry, template, ValidationErrorSet::default(), Vec::new())
        }
        EntryEdit::PurposeText(text) => {
            entry.purpose_text = text;
            Recomputed::new(entry, state.template.clone(), state.errors.clone(), Vec::new())
        }
        EntryEdit::FiTypes(fi_types) => {
            entry.fi_types = fi_types;
            recompute(catalog, regulator, &entry, state.template.as_ref())
        }
        EntryEdit::FetchType(fetch_type) => {
            entry.fetch_type = fetch_type;
            recompute(catalog, regulator, &entry, state.template.as_ref())
        }
        EntryEdit::ConsentType(consent_types) => {
            entry.consent_type = consent_types;
            recompute(catalog, regulator, &entry, state.template.as_ref())
        }
        EntryEdit::Duration(field, value) => {
            *entry.duration_mut(field) = value;
            let template = resolve_for_entry(catalog, regulator, &entry).cloned();
            let mut errors = state.errors.clone();
            let mut notifications = Vec::new();
            if let Some(t) = &template {
                let previous = state.template.as_ref();
                notifications.extend(apply_template(&mut entry, t, previous, &mut errors));
            }
            errors.set_duration(field, validate_field(&entry, template.as_ref(), field));
            Recomputed::new(entry, template, errors, notifications)
        }
    }
}

/// Owns one entry while the user edits it.
pub struct ConsentEditor<'c, N: Notifier> {
    catalog: &'c TemplateCatalog,
    regulator: String,
    state: EntryState,
    constraints: DerivedConstraints,
    notifier: N,
}

impl<'c, N: Notifier> ConsentEditor<'c, N> {
    /// Start editing a fresh, empty entry.
    pub fn new(catalog: &'c TemplateCatalog, regulator: impl Into<String>, notifier: N) -> Self {
        Self {
            catalog,
            regulator: regulator.into(),
            state: EntryState::default(),
            constraints: DerivedConstraints::default(),
            notifier,
        }
    }

    /// Start editing an existing entry. The entry is re-validated as it
    /// stands; its units are kept.
    pub fn with_entry(
        catalog: &'c TemplateCatalog,
        regulator: impl Into<String>,
        entry: ConsentParamEntry,
        notifier: N,
    ) -> Self {
        let mut editor = Self::new(catalog, regulator, notifier);
        let result = revalidate(editor.catalog, &editor.regulator, &entry);
        editor.commit(result);
        editor
    }

    /// Apply an edit and return the constraints now in force.
    pub fn apply(&mut self, edit: EntryEdit) -> &DerivedConstraints {
        let result = apply_edit(self.catalog, &self.regulator, &self.state, edit);
        self.commit(result);
        &self.constraints
    }

    /// Switch regulator and fully re-validate.
    pub fn set_regulator(&mut self, regulator: impl Into<String>) -> &DerivedConstraints {
        self.regulator = regulator.into();
        let result = recompute(
            self.catalog,
            &self.regulator,
            &self.state.entry,
            self.state.template.as_ref(),
        );
        self.commit(result);
        &self.constraints
    }

    fn commit(&mut self, result: Recomputed) {
        for notification in &result.notifications {
            tracing::debug!(regulator = %self.regulator, %notification, "notifying");
            self.notifier.notify(notification);
        }
        self.constraints = result.constraints.clone();
        self.state = result.into_state();
    }

    pub fn regulator(&self) -> &str {
        &self.regulator
    }

    pub fn entry(&self) -> &ConsentParamEntry {
        &self.state.entry
    }

    pub fn template(&self) -> Option<&ConsentTemplate> {
        self.state.template.as_ref()
    }

    pub fn errors(&self) -> &ValidationErrorSet {
        &self.state.errors
    }

    pub fn constraints(&self) -> &DerivedConstraints {
        &self.constraints
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Finish editing, returning the entry and its error set.
    pub fn into_parts(self) -> (ConsentParamEntry, ValidationErrorSet, N) {
        (self.state.entry, self.state.errors, self.notifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::DurationUnit;

    fn catalog() -> TemplateCatalog {
        TemplateCatalog::from_json_str(
            r#"{
                "RBI": {
                    "103": [
                        {"usecaseCategory": "Lending", "purposeText": "Loan underwriting",
                         "maxConsentValidity": "1 Year", "maxFrequency": "4 times per Month",
                         "maxFiDataRange": "2 Years", "maxDataLife": "Coterminous with loan tenure",
                         "fiTypes": ["Deposit", "Term-Deposit"],
                         "consentType": ["Profile", "Summary", "Transactions"]},
                        {"usecaseCategory": "Lending", "purposeText": "GST lending",
                         "maxConsentValidity": "30 Days", "maxFrequency": "NA",
                         "maxFiDataRange": "12 Months", "maxDataLife": "30 Days",
                         "fetchType": "ONE-TIME",
                         "fiTypes": ["GST"], "consentType": ["Profile"]}
                    ]
                },
                "All": {
                    "101": {"usecaseCategory": "Wealth", "purposeText": "Wealth view",
                            "maxConsentValidity": "90 Days", "fetchType": "PERIODIC"}
                }
            }"#,
        )
        .unwrap()
    }

    fn populated(c: &TemplateCatalog) -> ConsentEditor<'_, Vec<Notification>> {
        let mut editor = ConsentEditor::new(c, "RBI", Vec::new());
        editor.apply(EntryEdit::UsecaseCategory("Lending".to_string()));
        editor.apply(EntryEdit::PurposeCode("103".to_string()));
        editor.apply(EntryEdit::FiTypes(vec!["Deposit".to_string()]));
        editor.apply(EntryEdit::ConsentType(vec![
            "Profile".to_string(),
            "Transactions".to_string(),
        ]));
        editor
    }

    #[test]
    fn purpose_code_suggests_text() {
        let c = catalog();
        let editor = populated(&c);
        assert_eq!(editor.entry().purpose_text, "Loan underwriting");
        assert_eq!(
            editor.constraints().allowed_fi_types,
            vec!["Deposit".to_string(), "Term-Deposit".to_string()]
        );
    }

    #[test]
    fn purpose_code_keeps_typed_text() {
        let c = catalog();
        let mut editor = ConsentEditor::new(&c, "RBI", Vec::new());
        editor.apply(EntryEdit::UsecaseCategory("Lending".to_string()));
        editor.apply(EntryEdit::PurposeText("Working capital".to_string()));
        editor.apply(EntryEdit::PurposeCode("103".to_string()));
        assert_eq!(editor.entry().purpose_text, "Working capital");
        assert_eq!(
            editor.constraints().suggested_purpose_text.as_deref(),
            Some("Loan underwriting")
        );
    }

    #[test]
    fn category_change_clears_downstream() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::Duration(
            DurationField::ConsentValidity,
            Duration::new("500", DurationUnit::Day),
        ));
        assert!(!editor.errors().is_empty());

        editor.apply(EntryEdit::UsecaseCategory("Wealth".to_string()));
        let entry = editor.entry();
        assert_eq!(entry.purpose_code, "");
        assert!(entry.fi_types.is_empty());
        assert!(entry.consent_type.is_empty());
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn purpose_change_clears_selections_and_errors() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::FiTypes(vec!["Insurance".to_string()]));
        assert!(editor.errors().fi_types.is_some());

        editor.apply(EntryEdit::PurposeCode("101".to_string()));
        assert!(editor.entry().fi_types.is_empty());
        assert!(editor.entry().consent_type.is_empty());
        assert!(editor.errors().is_empty());
    }

    #[test]
    fn consent_types_pruned_once_with_notification() {
        let c = catalog();
        let mut editor = populated(&c);
        assert!(editor.notifier().is_empty());

        editor.apply(EntryEdit::FiTypes(vec!["GST".to_string()]));
        assert_eq!(editor.entry().consent_type, vec!["Profile".to_string()]);
        assert_eq!(editor.notifier().len(), 1);
        assert_eq!(
            editor.notifier()[0],
            Notification::ConsentTypesPruned {
                removed: vec!["Transactions".to_string()],
                kept: vec!["Profile".to_string()],
            }
        );
        assert!(editor.errors().consent_type.is_none());
    }

    #[test]
    fn pruning_everything_sets_consent_type_error() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::ConsentType(vec!["Transactions".to_string()]));
        editor.apply(EntryEdit::FiTypes(vec!["GST".to_string()]));
        assert!(editor.entry().consent_type.is_empty());
        assert!(editor.errors().consent_type.as_deref().unwrap().contains("Profile"));
    }

    #[test]
    fn disallowed_fi_types_are_flagged_not_stripped() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::FiTypes(vec!["Deposit".to_string(), "GST".to_string()]));
        assert_eq!(editor.entry().fi_types.len(), 2);
        assert!(editor.errors().fi_types.as_deref().unwrap().contains("GST"));
    }

    #[test]
    fn template_fetch_type_is_forced() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::FetchType(FetchType::Periodic));
        assert_eq!(editor.entry().fetch_type, FetchType::Periodic);

        editor.apply(EntryEdit::FiTypes(vec!["GST".to_string()]));
        assert_eq!(editor.entry().fetch_type, FetchType::Onetime);
        assert_eq!(editor.constraints().required_fetch_type, Some(FetchType::Onetime));
    }

    #[test]
    fn units_follow_template_change() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::Duration(
            DurationField::FiDataRange,
            Duration::new("1", DurationUnit::Year),
        ));
        editor.apply(EntryEdit::FiTypes(vec!["GST".to_string()]));
        assert_eq!(
            editor.entry().fi_data_range,
            Duration::new("12", DurationUnit::Month)
        );
    }

    #[test]
    fn units_stay_when_template_unchanged() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::Duration(
            DurationField::ConsentValidity,
            Duration::new("6", DurationUnit::Month),
        ));
        editor.apply(EntryEdit::FiTypes(vec!["Term-Deposit".to_string()]));
        assert_eq!(
            editor.entry().consent_validity_period,
            Duration::new("6", DurationUnit::Month)
        );
        assert!(editor.errors().consent_validity.is_none());
    }

    #[test]
    fn duration_edit_updates_only_its_slot() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::FiTypes(vec!["Deposit".to_string(), "Insurance".to_string()]));
        assert!(editor.errors().fi_types.is_some());

        editor.apply(EntryEdit::Duration(
            DurationField::ConsentValidity,
            Duration::new("2", DurationUnit::Year),
        ));
        assert_eq!(
            editor.errors().consent_validity.as_deref(),
            Some("Maximum allowed is 1 Year")
        );
        assert!(editor.errors().fi_types.is_some());

        editor.apply(EntryEdit::Duration(
            DurationField::ConsentValidity,
            Duration::new("300", DurationUnit::Day),
        ));
        assert!(editor.errors().consent_validity.is_none());
        assert!(editor.errors().fi_types.is_some());
    }

    #[test]
    fn duration_edit_forces_template_fetch_type() {
        let c = catalog();
        let mut editor = ConsentEditor::new(&c, "RBI", Vec::new());
        editor.apply(EntryEdit::UsecaseCategory("Wealth".to_string()));
        editor.apply(EntryEdit::PurposeCode("101".to_string()));
        assert_eq!(editor.entry().fetch_type, FetchType::Onetime);

        editor.apply(EntryEdit::Duration(
            DurationField::ConsentValidity,
            Duration::new("30", DurationUnit::Day),
        ));
        assert_eq!(editor.constraints().required_fetch_type, Some(FetchType::Periodic));
        assert_eq!(editor.entry().fetch_type, FetchType::Periodic);
        assert!(editor.errors().consent_validity.is_none());
    }

    #[test]
    fn duration_edit_prunes_consent_types_and_keeps_other_slots() {
        let c = catalog();
        let entry = ConsentParamEntry {
            usecase_category: "Lending".to_string(),
            purpose_code: "103".to_string(),
            fi_types: vec!["GST".to_string()],
            consent_type: vec!["Profile".to_string(), "Transactions".to_string()],
            ..ConsentParamEntry::default()
        };
        let template = resolve_for_entry(&c, "RBI", &entry).cloned();
        assert_eq!(template.as_ref().unwrap().purpose_text, "GST lending");
        let state = EntryState {
            entry,
            template,
            errors: ValidationErrorSet {
                frequency: Some("Maximum allowed is 1 Month".to_string()),
                ..ValidationErrorSet::default()
            },
        };

        let result = apply_edit(
            &c,
            "RBI",
            &state,
            EntryEdit::Duration(
                DurationField::ConsentValidity,
                Duration::new("10", DurationUnit::Day),
            ),
        );
        assert_eq!(result.entry.consent_type, vec!["Profile".to_string()]);
        assert_eq!(
            result.notifications,
            vec![Notification::ConsentTypesPruned {
                removed: vec!["Transactions".to_string()],
                kept: vec!["Profile".to_string()],
            }]
        );
        assert!(result.errors.consent_validity.is_none());
        assert!(result.errors.consent_type.is_none());
        assert_eq!(
            result.errors.frequency.as_deref(),
            Some("Maximum allowed is 1 Month")
        );
    }

    #[test]
    fn frequency_validated_against_template() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::Duration(
            DurationField::Frequency,
            Duration::new("5", DurationUnit::Month),
        ));
        assert_eq!(
            editor.errors().frequency.as_deref(),
            Some("Maximum allowed is 4 Months")
        );
    }

    #[test]
    fn coterminous_data_life_is_unconstrained() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::Duration(
            DurationField::DataLife,
            Duration::new("50", DurationUnit::Year),
        ));
        assert!(editor.errors().data_life.is_none());
    }

    #[test]
    fn regulator_change_uses_wildcard() {
        let c = catalog();
        let mut editor = ConsentEditor::new(&c, "RBI", Vec::new());
        editor.apply(EntryEdit::UsecaseCategory("Wealth".to_string()));
        editor.apply(EntryEdit::PurposeCode("101".to_string()));
        assert_eq!(editor.template().unwrap().purpose_text, "Wealth view");
        editor.set_regulator("SEBI");
        assert_eq!(editor.regulator(), "SEBI");
        assert_eq!(editor.entry().fetch_type, FetchType::Periodic);
    }

    #[test]
    fn with_entry_keeps_units() {
        let c = catalog();
        let entry = ConsentParamEntry {
            usecase_category: "Lending".to_string(),
            purpose_code: "103".to_string(),
            fi_types: vec!["Deposit".to_string()],
            consent_validity_period: Duration::new("400", DurationUnit::Day),
            ..ConsentParamEntry::default()
        };
        let editor = ConsentEditor::with_entry(&c, "RBI", entry, Vec::new());
        assert_eq!(editor.entry().consent_validity_period.unit, DurationUnit::Day);
        assert_eq!(
            editor.errors().consent_validity.as_deref(),
            Some("Maximum allowed is 365 Days")
        );
    }

    #[test]
    fn purpose_text_edit_keeps_errors() {
        let c = catalog();
        let mut editor = populated(&c);
        editor.apply(EntryEdit::FiTypes(vec!["Insurance".to_string()]));
        editor.apply(EntryEdit::PurposeText("Custom text".to_string()));
        assert_eq!(editor.entry().purpose_text, "Custom text");
        assert!(editor.errors().fi_types.is_some());
    }

    #[test]
    fn recompute_is_pure() {
        let c = catalog();
        let entry = populated(&c).entry().clone();
        let a = recompute(&c, "RBI", &entry, None);
        let b = recompute(&c, "RBI", &entry, None);
        assert_eq!(a, b);
    }

    #[test]
    fn log_notifier_still_prunes() {
        let c = catalog();
        let entry = ConsentParamEntry {
            usecase_category: "Lending".to_string(),
            purpose_code: "103".to_string(),
            fi_types: vec!["GST".to_string()],
            consent_type: vec!["Profile".to_string(), "Summary".to_string()],
            ..ConsentParamEntry::default()
        };
        let mut editor = ConsentEditor::new(&c, "RBI", LogNotifier);
        editor.apply(EntryEdit::UsecaseCategory(entry.usecase_category.clone()));
        editor.apply(EntryEdit::PurposeCode(entry.purpose_code.clone()));
        editor.apply(EntryEdit::FiTypes(entry.fi_types.clone()));
        editor.apply(EntryEdit::ConsentType(entry.consent_type));
        assert_eq!(editor.entry().consent_type, vec!["Profile".to_string()]);
    }

    #[test]
    fn notification_serializes_with_kind_tag() {
        let n = Notification::ConsentTypesPruned {
            removed: vec!["Summary".to_string()],
            kept: vec![],
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "consent_types_pruned");
        assert_eq!(
            n.to_string(),
            "Removed consent types not allowed for this purpose: Summary"
        );
    }

    #[test]
    fn into_parts_returns_state() {
        let c = catalog();
        let (entry, errors, notes) = populated(&c).into_parts();
        assert_eq!(entry.purpose_code, "103");
        assert!(errors.is_empty());
        assert!(notes.is_empty());
    }
}
