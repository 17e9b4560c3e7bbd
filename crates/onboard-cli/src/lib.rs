//! # onboard-cli: Command-Line Interface for FIU/TSP Onboarding
//!
//! Provides the `onboard` binary over the consent engine and form layer.
//!
//! ## Subcommands
//!
//! - `onboard catalog`: list regulators, usecase categories or purpose codes.
//! - `onboard resolve`: show the template and limits for a selection.
//! - `onboard check`: re-validate consent-parameter entries from a file.
//! - `onboard convert`: convert a duration between units.
//! - `onboard export`: review a form and write it as indented JSON.
//!
//! ```bash
//! onboard catalog purposes --regulator RBI --category Lending
//! onboard resolve --regulator RBI --category Lending --purpose 103 --fi-type DEPOSIT
//! onboard check entries.json --regulator RBI
//! onboard export form.json --strict
//! ```
//!
//! Every handler returns an exit code: 0 on success, 1 when the input has
//! findings. Operational errors propagate as `anyhow::Error`.

pub mod catalog;
pub mod check;
pub mod config;
pub mod convert;
pub mod export;
pub mod resolve;

use anyhow::{Context, Result};

use onboard_consent::TemplateCatalog;

use crate::config::OnboardConfig;

/// Load the configured consent-template catalog.
pub fn load_catalog(config: &OnboardConfig) -> Result<TemplateCatalog> {
    onboard_consent::load_catalog(&config.catalog_path).with_context(|| {
        format!(
            "failed to load consent template catalog from {}",
            config.catalog_path.display()
        )
    })
}

/// Print a value as indented JSON on stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
