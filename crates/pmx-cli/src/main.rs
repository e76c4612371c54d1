//! # pmx CLI entry point
//!
//! Parses command-line arguments, loads the dataset once and dispatches to
//! subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pmx_cli::check::{run_check, CheckArgs};
use pmx_cli::compare::{run_compare, CompareArgs};
use pmx_cli::countries::{run_countries, CountriesArgs};
use pmx_cli::dashboard::{run_dashboard, DashboardArgs};
use pmx_cli::load_dataset;

/// Policy matrix analytics from the terminal.
///
/// Scores, filters, summarizes and compares countries' policy coverage
/// across six categories.
#[derive(Parser, Debug)]
#[command(name = "pmx", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Dataset file (.csv, .json, .yaml). Defaults to the embedded sample.
    #[arg(long, global = true, env = "PMX_DATASET")]
    dataset: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// KPIs, ranking and monitoring table for a filter selection.
    Dashboard(DashboardArgs),

    /// Compare two countries category by category.
    Compare(CompareArgs),

    /// List countries in sorted order.
    Countries(CountriesArgs),

    /// Load a dataset and report recovered input problems.
    Check(CheckArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let dataset_path = cli.dataset.as_deref();

    let result = match &cli.command {
        Commands::Dashboard(args) => load_dataset(dataset_path).and_then(|d| run_dashboard(args, &d)),
        Commands::Compare(args) => load_dataset(dataset_path).and_then(|d| run_compare(args, &d)),
        Commands::Countries(args) => {
            load_dataset(dataset_path).and_then(|d| run_countries(args, &d))
        }
        Commands::Check(args) => run_check(args, dataset_path),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
