//! # Template Resolver
//!
//! Selects the single template whose constraints apply to a consent entry.
//! Specificity grows with what the user has chosen so far, so there is
//! always some template to show limits from once a purpose code is picked.
//!
//! ## Resolution order
//!
//! For the regulator's own entry, then the wildcard entry, first hit wins:
//!
//! 1. List entry with FI type, fetch type and consent types all known:
//!    category, FI type and fetch type match and the consent types
//!    intersect.
//! 2. List entry with FI type known: category and FI type match.
//! 3. List entry: category matches.
//! 4. Single entry: category matches.
//!
//! A rule that finds nothing falls through to the next one.

use onboard_core::FetchType;

use crate::catalog::{ConsentTemplate, TemplateCatalog, TemplateEntry};

/// What is known about an entry when resolving its template.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateQuery<'a> {
    pub regulator: &'a str,
    pub purpose_code: &'a str,
    pub usecase_category: &'a str,
    pub fi_type: Option<&'a str>,
    pub fetch_type: Option<FetchType>,
    pub consent_types: Option<&'a [String]>,
}

impl<'a> TemplateQuery<'a> {
    pub fn new(regulator: &'a str, purpose_code: &'a str, usecase_category: &'a str) -> Self {
        Self {
            regulator,
            purpose_code,
            usecase_category,
            ..Self::default()
        }
    }

    /// Narrow by FI type. Empty text counts as not supplied.
    pub fn with_fi_type(mut self, fi_type: Option<&'a str>) -> Self {
        self.fi_type = fi_type.filter(|s| !s.is_empty());
        self
    }

    pub fn with_fetch_type(mut self, fetch_type: Option<FetchType>) -> Self {
        self.fetch_type = fetch_type;
        self
    }

    /// Narrow by consent types. An empty selection counts as not supplied.
    pub fn with_consent_types(mut self, consent_types: Option<&'a [String]>) -> Self {
        self.consent_types = consent_types.filter(|s| !s.is_empty());
        self
    }
}

/// Resolve the best-matching template for `query`, or `None`.
pub fn filtered_template<'c>(
    catalog: &'c TemplateCatalog,
    query: &TemplateQuery<'_>,
) -> Option<&'c ConsentTemplate> {
    if query.purpose_code.is_empty() {
        return None;
    }
    let found = catalog
        .scan_order(query.regulator)
        .filter_map(|map| map.get(query.purpose_code))
        .find_map(|entry| match_entry(entry, query));

    match found {
        Some(template) => tracing::debug!(
            regulator = query.regulator,
            purpose_code = query.purpose_code,
            usecase_category = query.usecase_category,
            fi_types = ?template.fi_types,
            "resolved consent template"
        ),
        None => tracing::debug!(
            regulator = query.regulator,
            purpose_code = query.purpose_code,
            usecase_category = query.usecase_category,
            "no consent template matches"
        ),
    }
    found
}

fn match_entry<'c>(
    entry: &'c TemplateEntry,
    query: &TemplateQuery<'_>,
) -> Option<&'c ConsentTemplate> {
    let category = query.usecase_category;
    match entry {
        TemplateEntry::Single(template) => Some(template).filter(|t| t.matches_category(category)),
        TemplateEntry::List(list) => {
            let exact = match (query.fi_type, query.fetch_type, query.consent_types) {
                (Some(fi_type), Some(fetch_type), Some(consent_types)) => list.iter().find(|t| {
                    t.matches_category(category)
                        && t.allows_fi_type(fi_type)
                        && t.required_fetch_type() == Some(fetch_type)
                        && t.intersects_consent_types(consent_types)
                }),
                _ => None,
            };
            exact
                .or_else(|| {
                    let fi_type = query.fi_type?;
                    list.iter()
                        .find(|t| t.matches_category(category) && t.allows_fi_type(fi_type))
                })
                .or_else(|| list.iter().find(|t| t.matches_category(category)))
        }
    }
}
