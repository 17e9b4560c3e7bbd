//! # Consent Template Catalog
//!
//! The catalog is the regulator-supplied reference configuration that
//! constrains what a consent request may specify. Its JSON shape is
//!
//! ```text
//! { "<regulator>" | "All": { "<purpose code>": <template> | [<template>, ...] } }
//! ```
//!
//! where list-valued purpose codes hold FI-type-specific variants sharing a
//! usecase category. The array-or-object ambiguity ends here: every purpose
//! code is loaded into a [`TemplateEntry`], and everything downstream works
//! on that one shape.
//!
//! ## Data Model
//!
//! - [`ConsentTemplate`]: one permissible consent configuration.
//! - [`TemplateEntry`]: a single template or an ordered list of variants.
//! - [`ConsentTemplateMap`]: purpose code to entry, in document order.
//! - [`TemplateCatalog`]: regulator (or [`ALL_REGULATORS`]) to map, in
//!   document order. Immutable once loaded.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use onboard_core::{parse_frequency_string, parse_period_string, Duration, FetchType};

use crate::error::CatalogResult;

/// Wildcard regulator key whose templates apply to every regulator.
pub const ALL_REGULATORS: &str = "All";

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One permissible consent configuration for a purpose code.
///
/// Limits are kept as the catalog's prose (`"90 Days"`, `"NA"`) and parsed
/// on demand; a limit that does not parse is no limit at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConsentTemplate {
    /// Groups purpose codes, e.g. "Lending".
    #[serde(deserialize_with = "null_as_default")]
    pub usecase_category: String,
    /// Suggested descriptive text for the purpose.
    #[serde(deserialize_with = "null_as_default")]
    pub purpose_text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_consent_validity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_fi_data_range: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_data_life: String,
    #[serde(deserialize_with = "null_as_default")]
    pub max_frequency: String,
    /// `"ONE-TIME"` or a periodic marker; absent means the user chooses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetch_type: Option<String>,
    /// Allowed financial-information types.
    #[serde(deserialize_with = "null_as_default")]
    pub fi_types: Vec<String>,
    /// Allowed consent categories.
    #[serde(deserialize_with = "null_as_default")]
    pub consent_type: Vec<String>,
}

impl ConsentTemplate {
    /// Whether this template belongs to `category`.
    pub fn matches_category(&self, category: &str) -> bool {
        self.usecase_category == category
    }

    /// Whether `fi_type` is among the allowed FI types.
    pub fn allows_fi_type(&self, fi_type: &str) -> bool {
        self.fi_types.iter().any(|t| t == fi_type)
    }

    /// Whether `consent_type` is among the allowed consent types.
    pub fn allows_consent_type(&self, consent_type: &str) -> bool {
        self.consent_type.iter().any(|t| t == consent_type)
    }

    /// Whether any of `selected` is an allowed consent type.
    pub fn intersects_consent_types(&self, selected: &[String]) -> bool {
        selected.iter().any(|s| self.allows_consent_type(s))
    }

    /// The fetch type this template forces, if it declares a recognizable one.
    pub fn required_fetch_type(&self) -> Option<FetchType> {
        self.fetch_type.as_deref()?.parse().ok()
    }

    pub fn consent_validity_limit(&self) -> Option<Duration> {
        parse_period_string(&self.max_consent_validity)
    }

    pub fn frequency_limit(&self) -> Option<Duration> {
        parse_frequency_string(&self.max_frequency)
    }

    pub fn fi_data_range_limit(&self) -> Option<Duration> {
        parse_period_string(&self.max_fi_data_range)
    }

    pub fn data_life_limit(&self) -> Option<Duration> {
        parse_period_string(&self.max_data_life)
    }
}

/// A purpose code's catalog value: one template or several variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateEntry {
    /// FI-type-specific variants, in catalog order.
    List(Vec<ConsentTemplate>),
    /// A single template for the purpose code.
    Single(ConsentTemplate),
}

impl TemplateEntry {
    /// All templates of this entry as a slice, in catalog order.
    pub fn templates(&self) -> &[ConsentTemplate] {
        match self {
            Self::List(list) => list,
            Self::Single(template) => std::slice::from_ref(template),
        }
    }

    /// Whether any template of this entry belongs to `category`.
    pub fn has_category(&self, category: &str) -> bool {
        self.templates().iter().any(|t| t.matches_category(category))
    }
}

/// Purpose code to template entry, in document order.
pub type ConsentTemplateMap = IndexMap<String, TemplateEntry>;

/// The full template catalog, keyed by regulator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateCatalog {
    regulators: IndexMap<String, ConsentTemplateMap>,
}

impl TemplateCatalog {
    /// Build a catalog from regulator maps.
    pub fn new(regulators: IndexMap<String, ConsentTemplateMap>) -> Self {
        Self { regulators }
    }

    /// Parse a catalog from JSON text.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Regulator keys in document order, including [`ALL_REGULATORS`] if present.
    pub fn regulators(&self) -> impl Iterator<Item = &str> {
        self.regulators.keys().map(String::as_str)
    }

    /// The purpose-code map declared directly under `regulator`.
    pub fn templates_for(&self, regulator: &str) -> Option<&ConsentTemplateMap> {
        self.regulators.get(regulator)
    }

    /// The entry for `purpose_code` declared directly under `regulator`.
    pub fn entry(&self, regulator: &str, purpose_code: &str) -> Option<&TemplateEntry> {
        self.templates_for(regulator)?.get(purpose_code)
    }

    /// Maps to consult for `regulator`: its own first, then the wildcard.
    pub fn scan_order<'a>(
        &'a self,
        regulator: &str,
    ) -> impl Iterator<Item = &'a ConsentTemplateMap> + 'a {
        let own = self.regulators.get(regulator);
        let wildcard = if regulator == ALL_REGULATORS {
            None
        } else {
            self.regulators.get(ALL_REGULATORS)
        };
        own.into_iter().chain(wildcard)
    }

    /// Total number of templates across all regulators and purpose codes.
    pub fn template_count(&self) -> usize {
        self.regulators
            .values()
            .flat_map(|map| map.values())
            .map(|entry| entry.templates().len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.regulators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard_core::DurationUnit;

    const CATALOG: &str = r#"{
        "RBI": {
            "103": [
                {"usecaseCategory": "Lending", "fiTypes": ["Deposit"], "consentType": ["Profile"]},
                {"usecaseCategory": "Lending", "fiTypes": ["GST"], "consentType": ["Summary"]}
            ],
            "101": {"usecaseCategory": "Wealth", "maxConsentValidity": "1 Year"}
        },
        "All": {
            "103": {"usecaseCategory": "Lending", "maxDataLife": null}
        }
    }"#;

    #[test]
    fn list_and_single_entries_load_into_one_shape() {
        let catalog = TemplateCatalog::from_json_str(CATALOG).unwrap();
        let list = catalog.entry("RBI", "103").unwrap();
        assert!(matches!(list, TemplateEntry::List(v) if v.len() == 2));
        let single = catalog.entry("RBI", "101").unwrap();
        assert!(matches!(single, TemplateEntry::Single(_)));
        assert_eq!(single.templates().len(), 1);
        assert_eq!(catalog.template_count(), 4);
    }

    #[test]
    fn null_fields_default() {
        let catalog = TemplateCatalog::from_json_str(CATALOG).unwrap();
        let t = &catalog.entry("All", "103").unwrap().templates()[0];
        assert_eq!(t.max_data_life, "");
        assert!(t.data_life_limit().is_none());
        assert!(t.fi_types.is_empty());
    }

    #[test]
    fn regulators_keep_document_order() {
        let catalog = TemplateCatalog::from_json_str(CATALOG).unwrap();
        let keys: Vec<&str> = catalog.regulators().collect();
        assert_eq!(keys, vec!["RBI", "All"]);
    }

    #[test]
    fn scan_order_is_regulator_then_wildcard() {
        let catalog = TemplateCatalog::from_json_str(CATALOG).unwrap();
        assert_eq!(catalog.scan_order("RBI").count(), 2);
        assert_eq!(catalog.scan_order("SEBI").count(), 1);
        assert_eq!(catalog.scan_order(ALL_REGULATORS).count(), 1);
    }

    #[test]
    fn limits_parse_on_demand() {
        let t = ConsentTemplate {
            max_consent_validity: "90 Days".to_string(),
            max_frequency: "4 times per Month".to_string(),
            max_fi_data_range: "NA".to_string(),
            max_data_life: "Coterminous with loan tenure".to_string(),
            fetch_type: Some("PERIODIC".to_string()),
            ..ConsentTemplate::default()
        };
        assert_eq!(
            t.consent_validity_limit(),
            Some(Duration::new("90", DurationUnit::Day))
        );
        assert_eq!(
            t.frequency_limit(),
            Some(Duration::new("4", DurationUnit::Month))
        );
        assert_eq!(t.fi_data_range_limit(), None);
        assert_eq!(t.data_life_limit().unwrap().unit, DurationUnit::Tenure);
        assert_eq!(t.required_fetch_type(), Some(FetchType::Periodic));
    }

    #[test]
    fn unrecognized_fetch_type_is_unconstrained() {
        let t = ConsentTemplate {
            fetch_type: Some("whenever".to_string()),
            ..ConsentTemplate::default()
        };
        assert_eq!(t.required_fetch_type(), None);
    }

    #[test]
    fn consent_type_intersection() {
        let t = ConsentTemplate {
            consent_type: vec!["Profile".to_string(), "Summary".to_string()],
            ..ConsentTemplate::default()
        };
        assert!(t.intersects_consent_types(&["Transactions".to_string(), "Summary".to_string()]));
        assert!(!t.intersects_consent_types(&["Transactions".to_string()]));
        assert!(!t.intersects_consent_types(&[]));
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(TemplateCatalog::from_json_str(r#"{"RBI": 7}"#).is_err());
    }
}
