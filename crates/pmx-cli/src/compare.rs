//! # Compare Subcommand
//!
//! `pmx compare [A] [B]`. Missing countries default to the first two in
//! sorted order.

use std::fmt::Write as _;

use anyhow::{bail, Result};
use clap::Args;

use pmx_matrix::{compare_countries, Comparison, Dataset};

/// Arguments for the `pmx compare` subcommand.
#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// First country.
    #[arg(value_name = "A")]
    pub a: Option<String>,

    /// Second country.
    #[arg(value_name = "B")]
    pub b: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Execute the compare subcommand.
pub fn run_compare(args: &CompareArgs, dataset: &Dataset) -> Result<u8> {
    let comparison = resolve(args, dataset)?;
    if args.json {
        println!("{}", crate::to_json(&comparison)?);
    } else {
        print!("{}", render_comparison(&comparison));
    }
    Ok(0)
}

/// Pick the pair and run the comparison.
pub fn resolve(args: &CompareArgs, dataset: &Dataset) -> Result<Comparison> {
    let (a, b) = match (&args.a, &args.b) {
        (Some(a), Some(b)) => (a.clone(), b.clone()),
        (a, b) => {
            let Some((first, second)) = dataset.default_pair() else {
                bail!("not enough countries to compare");
            };
            (
                a.clone().unwrap_or_else(|| first.to_string()),
                b.clone().unwrap_or_else(|| second.to_string()),
            )
        }
    };
    tracing::debug!(%a, %b, "comparing countries");
    Ok(compare_countries(dataset, a.trim(), b.trim())?)
}

/// Text rendering of a comparison.
pub fn render_comparison(comparison: &Comparison) -> String {
    let mut out = String::new();
    let (a, b) = (comparison.country_a.as_str(), comparison.country_b.as_str());
    let width_a = a.len().max(7);
    let width_b = b.len().max(7);

    let _ = writeln!(
        out,
        "{:<30} {:<width_a$} {:<width_b$} Note",
        "Category", a, b
    );
    for row in &comparison.per_category {
        let _ = writeln!(
            out,
            "{:<30} {:<width_a$} {:<width_b$} {}",
            row.label,
            row.value_a.as_str(),
            row.value_b.as_str(),
            row.note
        );
    }
    let _ = writeln!(out, "\n{}", comparison.overall_summary);
    out
}
