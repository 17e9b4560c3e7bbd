//! # onboard CLI entry point
//!
//! Parses command-line arguments, builds the layered configuration and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use onboard_cli::catalog::{run_catalog, CatalogArgs};
use onboard_cli::check::{run_check, CheckArgs};
use onboard_cli::config::{ConfigOverrides, OnboardConfig};
use onboard_cli::convert::{run_convert, ConvertArgs};
use onboard_cli::export::{run_export, ExportArgs};
use onboard_cli::resolve::{run_resolve, ResolveArgs};

/// FIU/TSP onboarding toolkit.
///
/// Browses the consent-template catalog, resolves and checks consent
/// parameters against it, and reviews and exports onboarding forms.
#[derive(Parser, Debug)]
#[command(name = "onboard", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Consent-template catalog (JSON or YAML).
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Field-requiredness catalog (JSON or YAML).
    #[arg(long, global = true)]
    fields: Option<PathBuf>,

    /// Output directory for exports.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List regulators, usecase categories or purpose codes.
    Catalog(CatalogArgs),

    /// Show the template and limits that apply to a selection.
    Resolve(ResolveArgs),

    /// Re-validate consent-parameter entries from a file.
    Check(CheckArgs),

    /// Convert a duration between day, month and year.
    Convert(ConvertArgs),

    /// Review a form and export it as indented JSON.
    Export(ExportArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("onboard CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match OnboardConfig::load(cli.config.as_deref()) {
        Ok(config) => config.with_overrides(ConfigOverrides {
            catalog_path: cli.catalog,
            fields_path: cli.fields,
            output_dir: cli.output_dir,
        }),
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::from(1);
        }
    };

    tracing::debug!(
        catalog = %config.catalog_path.display(),
        regulator = %config.default_regulator,
        "resolved configuration"
    );

    let result = match cli.command {
        Commands::Catalog(args) => run_catalog(&args, &config),
        Commands::Resolve(args) => run_resolve(&args, &config),
        Commands::Check(args) => run_check(&args, &config),
        Commands::Convert(args) => run_convert(&args),
        Commands::Export(args) => run_export(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
