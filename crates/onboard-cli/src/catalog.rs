//! # Catalog Subcommand
//!
//! Lists what the consent-template catalog offers: regulators, usecase
//! categories for a regulator, and purpose codes for a category. Wildcard
//! (`All`) templates are included in every regulator's lists.

use anyhow::Result;
use clap::{Args, Subcommand};

use onboard_consent::{purpose_codes, usecase_categories, TemplateCatalog};

use crate::config::OnboardConfig;

/// Arguments for the `onboard catalog` subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommand {
    /// List regulator keys, including the wildcard.
    Regulators,

    /// List usecase categories available to a regulator.
    Categories {
        #[arg(long)]
        regulator: Option<String>,
    },

    /// List purpose codes for a usecase category.
    Purposes {
        #[arg(long)]
        regulator: Option<String>,

        #[arg(long)]
        category: String,
    },
}

/// The lines `onboard catalog` prints, one item per line.
pub fn catalog_lines(
    command: &CatalogCommand,
    catalog: &TemplateCatalog,
    config: &OnboardConfig,
) -> Vec<String> {
    match command {
        CatalogCommand::Regulators => catalog.regulators().map(str::to_string).collect(),
        CatalogCommand::Categories { regulator } => {
            usecase_categories(catalog, config.regulator(regulator.as_deref()))
                .into_iter()
                .collect()
        }
        CatalogCommand::Purposes {
            regulator,
            category,
        } => purpose_codes(catalog, config.regulator(regulator.as_deref()), category),
    }
}

/// Execute the catalog subcommand.
///
/// Returns exit code 0, or 1 when the listing is empty.
pub fn run_catalog(args: &CatalogArgs, config: &OnboardConfig) -> Result<u8> {
    let catalog = crate::load_catalog(config)?;
    let lines = catalog_lines(&args.command, &catalog, config);
    for line in &lines {
        println!("{line}");
    }
    if lines.is_empty() {
        tracing::warn!("nothing found in catalog");
        return Ok(1);
    }
    Ok(0)
}
