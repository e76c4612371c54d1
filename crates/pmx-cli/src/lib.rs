//! # pmx-cli — Policy Matrix from the Terminal
//!
//! Provides the `pmx` command-line interface over the same engine the HTTP
//! service uses.
//!
//! ## Subcommands
//!
//! - `pmx dashboard`: KPIs, ranking and the monitoring table for a filter.
//! - `pmx compare`: side-by-side comparison of two countries.
//! - `pmx countries`: sorted country names.
//! - `pmx check`: load a dataset file and report every recovered problem.
//!
//! ```bash
//! pmx dashboard --statuses Yellow,Red --focus surveillance
//! pmx compare France Iraq --json
//! pmx --dataset matrix.csv check
//! ```
//!
//! Every handler returns `anyhow::Result<u8>`: the exit code on success,
//! an error (exit 1) when the operation cannot proceed.

pub mod check;
pub mod compare;
pub mod countries;
pub mod dashboard;

use std::path::Path;

use anyhow::{Context, Result};

use pmx_matrix::Dataset;

/// Load the dataset at `path`, or the embedded sample when `None`.
pub fn load_dataset(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(path) => pmx_matrix::from_path(path)
            .with_context(|| format!("failed to load dataset {}", path.display())),
        None => Ok(Dataset::sample()),
    }
}

/// Non-empty trimmed items of a comma-separated argument.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pretty JSON for `--json` output.
pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output")
}
