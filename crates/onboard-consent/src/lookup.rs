//! # Catalog Lookup
//!
//! Drop-down vocabularies derived from the catalog: which usecase
//! categories a regulator offers, and which purpose codes sit under a
//! category. Both scan the regulator's own templates first and then the
//! [`ALL_REGULATORS`](crate::catalog::ALL_REGULATORS) wildcard, keeping
//! first-seen order.

use indexmap::IndexSet;

use crate::catalog::TemplateCatalog;

/// Usecase categories declared under `regulator` or the wildcard.
pub fn usecase_categories(catalog: &TemplateCatalog, regulator: &str) -> IndexSet<String> {
    catalog
        .scan_order(regulator)
        .flat_map(|map| map.values())
        .flat_map(|entry| entry.templates())
        .map(|template| template.usecase_category.clone())
        .filter(|category| !category.is_empty())
        .collect()
}

/// Purpose codes with at least one template in `category`, deduplicated.
pub fn purpose_codes(catalog: &TemplateCatalog, regulator: &str, category: &str) -> Vec<String> {
    let codes: IndexSet<&str> = catalog
        .scan_order(regulator)
        .flat_map(|map| map.iter())
        .filter(|(_, entry)| entry.has_category(category))
        .map(|(code, _)| code.as_str())
        .collect();
    codes.into_iter().map(str::to_string).collect()
}
