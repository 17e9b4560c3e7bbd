//! # Check Subcommand
//!
//! Re-validates consent-parameter entries stored in a JSON or YAML file,
//! either a single entry or a list. Stored units are kept as the user chose
//! them; only template-forced changes (fetch type, pruned consent types)
//! are applied before validation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::{Deserialize, Serialize};

use onboard_consent::{
    revalidate, ConsentParamEntry, Notification, TemplateCatalog, ValidationErrorSet,
};

use crate::config::OnboardConfig;

/// Arguments for the `onboard check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Entry file (one entry or an array of entries).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    #[arg(long)]
    pub regulator: Option<String>,

    /// Print findings as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// One entry or several, as stored on disk.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum EntryDocument {
    Many(Vec<ConsentParamEntry>),
    One(ConsentParamEntry),
}

impl EntryDocument {
    pub fn into_entries(self) -> Vec<ConsentParamEntry> {
        match self {
            Self::Many(entries) => entries,
            Self::One(entry) => vec![entry],
        }
    }
}

/// Findings for one entry.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryCheck {
    pub index: usize,
    pub purpose_code: String,
    pub template_found: bool,
    pub errors: ValidationErrorSet,
    pub notifications: Vec<Notification>,
    /// The entry after template-forced changes.
    pub entry: ConsentParamEntry,
}

impl EntryCheck {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Re-validate every entry under `regulator`.
pub fn check_entries(
    catalog: &TemplateCatalog,
    regulator: &str,
    entries: &[ConsentParamEntry],
) -> Vec<EntryCheck> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let result = revalidate(catalog, regulator, entry);
            EntryCheck {
                index,
                purpose_code: entry.purpose_code.clone(),
                template_found: result.template.is_some(),
                errors: result.errors,
                notifications: result.notifications,
                entry: result.entry,
            }
        })
        .collect()
}

fn print_text(checks: &[EntryCheck]) {
    for check in checks {
        let status = if check.has_errors() { "FAIL" } else { "OK" };
        println!("entry {} (purpose {:?}): {status}", check.index, check.purpose_code);
        if !check.template_found {
            println!("  note: no matching consent template");
        }
        for (slot, message) in check.errors.messages() {
            println!("  {slot}: {message}");
        }
        for notification in &check.notifications {
            println!("  notice: {notification}");
        }
    }
    let failed = checks.iter().filter(|c| c.has_errors()).count();
    println!("\n{}/{} entries passed", checks.len() - failed, checks.len());
}

/// Execute the check subcommand.
///
/// Returns exit code 0 when every entry is clean, 1 when any has an error.
pub fn run_check(args: &CheckArgs, config: &OnboardConfig) -> Result<u8> {
    let catalog = crate::load_catalog(config)?;
    let document: EntryDocument = onboard_consent::load_typed(&args.path)
        .with_context(|| format!("failed to load entries from {}", args.path.display()))?;
    let entries = document.into_entries();
    let regulator = config.regulator(args.regulator.as_deref());
    tracing::info!(regulator, entries = entries.len(), "checking consent entries");

    let checks = check_entries(&catalog, regulator, &entries);
    if args.json {
        crate::print_json(&checks)?;
    } else {
        print_text(&checks);
    }
    Ok(if checks.iter().any(EntryCheck::has_errors) { 1 } else { 0 })
}
