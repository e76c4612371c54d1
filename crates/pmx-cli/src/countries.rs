//! # Countries Subcommand

use anyhow::Result;
use clap::Args;

use pmx_matrix::Dataset;

/// Arguments for the `pmx countries` subcommand.
#[derive(Args, Debug, Default)]
pub struct CountriesArgs {
    /// Emit a JSON array instead of one name per line.
    #[arg(long)]
    pub json: bool,
}

/// Print country names in sorted order.
pub fn run_countries(args: &CountriesArgs, dataset: &Dataset) -> Result<u8> {
    let names = dataset.countries_sorted();
    if args.json {
        println!("{}", crate::to_json(&names)?);
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(0)
}
