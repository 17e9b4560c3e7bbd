//! # Convert Subcommand
//!
//! Converts a duration between day, month and year with the fixed
//! 30-day month and 365-day year, flooring the result.

use anyhow::{bail, Result};
use clap::Args;

use onboard_core::{convert_duration, Duration, DurationUnit};

/// Arguments for the `onboard convert` subcommand.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    #[arg(long)]
    pub number: String,

    /// Unit of `--number`: day, month or year (plurals accepted).
    #[arg(long)]
    pub unit: DurationUnit,

    /// Target unit.
    #[arg(long)]
    pub to: DurationUnit,
}

/// Convert the requested duration.
pub fn convert_args(args: &ConvertArgs) -> Result<Duration> {
    let input = Duration::new(args.number.clone(), args.unit);
    if input.value().is_none() {
        bail!("not a number: {:?}", args.number);
    }
    if args.unit.is_tenure() || args.to.is_tenure() {
        bail!("a duration coterminous with the loan tenure cannot be converted");
    }
    Ok(convert_duration(&input, args.to))
}

/// Execute the convert subcommand.
pub fn run_convert(args: &ConvertArgs) -> Result<u8> {
    let converted = convert_args(args)?;
    println!("{converted}");
    Ok(0)
}
