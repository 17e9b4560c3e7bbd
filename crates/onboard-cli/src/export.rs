//! # Export Subcommand
//!
//! Reviews a saved onboarding form and writes it out as indented JSON.
//! Review findings are printed but do not stop the export unless
//! `--strict` is given.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;

use onboard_form::{review_form, write_export, FieldCatalog, OnboardingForm, ReviewReport};

use crate::config::OnboardConfig;

/// Arguments for the `onboard export` subcommand.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Saved form (JSON or YAML).
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Output file. Defaults to a timestamped name in the output directory.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Refuse to export when the review finds errors.
    #[arg(long)]
    pub strict: bool,
}

fn load_fields(path: Option<&Path>) -> Result<FieldCatalog> {
    match path {
        Some(path) => FieldCatalog::load(path)
            .with_context(|| format!("failed to load field catalog from {}", path.display())),
        None => Ok(FieldCatalog::default()),
    }
}

fn print_report(report: &ReviewReport) {
    for error in &report.errors {
        println!("  ERROR: {error}");
    }
    for warning in &report.warnings {
        println!("  WARN: {warning}");
    }
    println!(
        "Review: {} error(s), {} warning(s)",
        report.errors.len(),
        report.warnings.len()
    );
}

/// Review and export a form, returning the report and the written path.
///
/// Nothing is written when `strict` is set and the review has errors.
pub fn export_form(
    args: &ExportArgs,
    config: &OnboardConfig,
    now: DateTime<Utc>,
) -> Result<(ReviewReport, Option<PathBuf>)> {
    let catalog = crate::load_catalog(config)?;
    let fields = load_fields(config.fields_path.as_deref())?;
    let form = OnboardingForm::load(&args.path)
        .with_context(|| format!("failed to load form from {}", args.path.display()))?;

    let report = review_form(&form, &fields, &catalog);
    if args.strict && !report.is_valid {
        tracing::warn!(errors = report.errors.len(), "strict export refused");
        return Ok((report, None));
    }

    let target = match &args.out {
        Some(out) => out.clone(),
        None => config
            .output_dir
            .join(onboard_form::default_export_file_name(now)),
    };
    let written = write_export(&form, &target)?;
    Ok((report, Some(written)))
}

/// Execute the export subcommand.
///
/// Returns exit code 0 when the form was written, 1 when a strict export
/// was refused.
pub fn run_export(args: &ExportArgs, config: &OnboardConfig) -> Result<u8> {
    let (report, written) = export_form(args, config, Utc::now())?;
    print_report(&report);
    match written {
        Some(path) => {
            println!("Exported to {}", path.display());
            Ok(0)
        }
        None => {
            println!("Not exported: review has errors and --strict is set");
            Ok(1)
        }
    }
}
