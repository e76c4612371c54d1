//! # Check Subcommand
//!
//! Loads a dataset and lists every problem the loader recovered from.
//! Skipped rows are failures (exit 1); unknown values, statuses and dates
//! are warnings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use pmx_matrix::{load_with_report, read_path_rows, sample_rows, LoadReport};

/// Arguments for the `pmx check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Dataset to check (default: the global `--dataset`, else the sample).
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Emit the load report as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the check subcommand.
pub fn run_check(args: &CheckArgs, dataset_path: Option<&Path>) -> Result<u8> {
    let path = args.path.as_deref().or(dataset_path);
    let report = check(path)?;

    if args.json {
        println!("{}", crate::to_json(&report)?);
    } else {
        print!("{}", render_report(&report));
    }

    Ok(if report.skipped() > 0 { 1 } else { 0 })
}

/// Load `path` (or the sample) and return the report.
pub fn check(path: Option<&Path>) -> Result<LoadReport> {
    let rows = match path {
        Some(path) => read_path_rows(path)
            .with_context(|| format!("failed to read dataset {}", path.display()))?,
        None => sample_rows(),
    };
    let (_, report) = load_with_report(rows);
    Ok(report)
}

/// Text rendering of a load report.
pub fn render_report(report: &LoadReport) -> String {
    let mut out = format!(
        "Rows: {} read, {} loaded, {} skipped\n",
        report.rows_read,
        report.records_loaded,
        report.skipped()
    );
    for issue in &report.issues {
        let tag = if issue.dropped_row() { "SKIP" } else { "WARN" };
        out.push_str(&format!("  {tag}: {issue}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_is_clean() {
        let report = check(None).unwrap();
        assert!(report.is_clean());
        assert_eq!(render_report(&report), "Rows: 8 read, 8 loaded, 0 skipped\n");
    }

    #[test]
    fn unsupported_path_is_an_error() {
        assert!(check(Some(Path::new("matrix.xlsx"))).is_err());
    }
}
