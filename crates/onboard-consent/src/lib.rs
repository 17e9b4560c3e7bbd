//! # onboard-consent: Consent-Template Engine
//!
//! Turns a regulator's consent-template catalog into constraints on the
//! consent-parameter rows an FIU or TSP fills in during onboarding:
//!
//! - **Catalog** (`catalog.rs`, `parser.rs`): the regulator → purpose code →
//!   template(s) document, loaded from JSON or YAML.
//!
//! - **Lookup** (`lookup.rs`): usecase categories and purpose codes to offer
//!   in selection lists.
//!
//! - **Resolver** (`resolver.rs`): the single best-matching template for
//!   what the user has chosen so far.
//!
//! - **Validator** (`validator.rs`): duration and frequency limits, with
//!   messages phrased in the user's unit.
//!
//! - **Cascade** (`cascade.rs`): the resolve/correct/validate pass run after
//!   every edit, and [`ConsentEditor`] which drives it.
//!
//! ## Crate Policy
//!
//! - Depends only on `onboard-core` internally.
//! - Validation is advisory. Nothing here refuses an edit; errors are
//!   reported in a [`ValidationErrorSet`] next to the entry.
//! - Every re-validation pass is a pure function of its inputs.

pub mod cascade;
pub mod catalog;
pub mod constraints;
pub mod entry;
pub mod error;
pub mod lookup;
pub mod parser;
pub mod resolver;
pub mod validator;

pub use cascade::{
    apply_edit, recompute, resolve_for_entry, revalidate, ConsentEditor, EntryEdit, EntryState,
    LogNotifier, Notification, Notifier, Recomputed,
};
pub use catalog::{
    ConsentTemplate, ConsentTemplateMap, TemplateCatalog, TemplateEntry, ALL_REGULATORS,
};
pub use constraints::DerivedConstraints;
pub use entry::{ConsentParamEntry, DurationField, ValidationErrorSet};
pub use error::{CatalogError, CatalogResult};
pub use lookup::{purpose_codes, usecase_categories};
pub use parser::{load_catalog, load_json_typed, load_typed, load_yaml_typed};
pub use resolver::{filtered_template, TemplateQuery};
pub use validator::validate_duration;
