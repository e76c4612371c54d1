//! # Dashboard Subcommand
//!
//! Prints the dashboard for a filter selection: KPIs, status distribution,
//! completeness ranking and the monitoring table. `--json` emits the
//! [`DashboardView`] instead.

use std::fmt::Write as _;

use anyhow::Result;
use clap::Args;

use pmx_core::{CountryName, PolicyCategory, ReviewStatus};
use pmx_matrix::{CategoryFocus, DashboardView, Dataset, FilterCriteria};

use crate::parse_list;

/// Arguments for the `pmx dashboard` subcommand.
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Comma-separated countries to include (default: all).
    #[arg(long, value_name = "LIST")]
    pub countries: Option<String>,

    /// Comma-separated review statuses to include (default: Green,Yellow,Red).
    #[arg(long, value_name = "LIST")]
    pub statuses: Option<String>,

    /// Only countries with Yes or Partial in this category (`all` for none).
    #[arg(long, value_name = "CATEGORY")]
    pub focus: Option<String>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl DashboardArgs {
    /// Resolve against the dataset's default selection.
    pub fn criteria(&self, dataset: &Dataset) -> Result<FilterCriteria> {
        let mut criteria = FilterCriteria::all(dataset);
        if let Some(focus) = &self.focus {
            criteria.focus = focus.parse::<CategoryFocus>()?;
        }
        if let Some(raw) = &self.countries {
            criteria.countries = parse_list(raw)
                .into_iter()
                .filter_map(|name| CountryName::new(name).ok())
                .collect();
        }
        if let Some(raw) = &self.statuses {
            criteria.statuses = parse_list(raw).into_iter().map(ReviewStatus::from).collect();
        }
        Ok(criteria)
    }
}

/// Execute the dashboard subcommand.
pub fn run_dashboard(args: &DashboardArgs, dataset: &Dataset) -> Result<u8> {
    let view = DashboardView::build(dataset, args.criteria(dataset)?);
    if args.json {
        println!("{}", crate::to_json(&view)?);
    } else {
        print!("{}", render_dashboard(&view));
    }
    Ok(0)
}

/// Text rendering of a dashboard view.
pub fn render_dashboard(view: &DashboardView) -> String {
    let mut out = String::new();
    let summary = &view.summary;

    let _ = writeln!(
        out,
        "Countries: {}   Avg completeness: {:.1}%   Gaps (No): {}",
        view.country_ratio(),
        summary.avg_completeness,
        summary.gap_count
    );
    let statuses: Vec<String> = view
        .distribution
        .iter()
        .map(|b| format!("{} {}", b.status.badge(), b.count))
        .collect();
    let _ = writeln!(out, "Status: {}", statuses.join("   "));
    if view.criteria.focus != CategoryFocus::All {
        let _ = writeln!(out, "Focus: {}", view.criteria.focus);
    }

    if view.rows.is_empty() {
        let _ = writeln!(out, "\nNo countries match the current filter.");
        return out;
    }

    let _ = writeln!(out, "\nCompleteness ranking");
    for entry in &view.ranking {
        let bar = "█".repeat((entry.completeness_pct / 10.0).round() as usize);
        let _ = writeln!(
            out,
            "  {:<14} {:>6.1}%  {}",
            entry.country.as_str(),
            entry.completeness_pct,
            bar
        );
    }

    let _ = writeln!(out, "\nMonitoring table");
    let headers: Vec<&str> = PolicyCategory::all().iter().map(|c| c.as_str()).collect();
    let _ = writeln!(
        out,
        "  {:<14} {:<10} {:<10} {}  {:>6}",
        "country",
        "updated",
        "status",
        headers.join(" | "),
        "score"
    );
    for row in &view.rows {
        let values = [
            &row.prevention,
            &row.administrative,
            &row.criminal_justice,
            &row.surveillance,
            &row.rehab_reintegration,
            &row.women_children_notes,
        ];
        let cells: Vec<String> = values
            .iter()
            .zip(&headers)
            .map(|(value, header)| format!("{:<width$}", value, width = header.len()))
            .collect();
        let _ = writeln!(
            out,
            "  {:<14} {:<10} {:<10} {}  {:>5.1}%",
            row.country.as_str(),
            row.last_update,
            row.review_status,
            cells.join(" | "),
            row.completeness_pct
        );
    }
    out
}
