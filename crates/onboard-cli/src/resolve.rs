//! # Resolve Subcommand
//!
//! Shows which template applies to a selection and the limits it implies,
//! as JSON.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use onboard_consent::{
    filtered_template, ConsentTemplate, DerivedConstraints, TemplateCatalog, TemplateQuery,
};
use onboard_core::FetchType;

use crate::config::OnboardConfig;

/// Arguments for the `onboard resolve` subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[arg(long)]
    pub regulator: Option<String>,

    /// Usecase category, e.g. `Lending`.
    #[arg(long)]
    pub category: String,

    /// Purpose code, e.g. `103`.
    #[arg(long)]
    pub purpose: String,

    #[arg(long)]
    pub fi_type: Option<String>,

    /// `Onetime` or `Periodic`; separators and case are ignored.
    #[arg(long)]
    pub fetch_type: Option<FetchType>,

    /// Selected consent type. Repeat for several.
    #[arg(long = "consent-type", value_name = "TYPE")]
    pub consent_types: Vec<String>,
}

/// What `onboard resolve` prints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution<'c> {
    pub regulator: String,
    pub template: Option<&'c ConsentTemplate>,
    pub constraints: DerivedConstraints,
}

/// Resolve a selection against `catalog`.
pub fn resolve_selection<'c>(
    args: &ResolveArgs,
    catalog: &'c TemplateCatalog,
    config: &OnboardConfig,
) -> Resolution<'c> {
    let regulator = config.regulator(args.regulator.as_deref());
    let query = TemplateQuery::new(regulator, &args.purpose, &args.category)
        .with_fi_type(args.fi_type.as_deref())
        .with_fetch_type(args.fetch_type)
        .with_consent_types(Some(args.consent_types.as_slice()));
    let template = filtered_template(catalog, &query);
    Resolution {
        regulator: regulator.to_string(),
        template,
        constraints: DerivedConstraints::native(template),
    }
}

/// Execute the resolve subcommand.
///
/// Returns exit code 0, or 1 when no template matches.
pub fn run_resolve(args: &ResolveArgs, config: &OnboardConfig) -> Result<u8> {
    let catalog = crate::load_catalog(config)?;
    let resolution = resolve_selection(args, &catalog, config);
    crate::print_json(&resolution)?;
    Ok(if resolution.template.is_some() { 0 } else { 1 })
}
