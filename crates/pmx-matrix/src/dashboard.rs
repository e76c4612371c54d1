//! # Dashboard View
//!
//! Everything one dashboard screen shows, computed in a single pure pass
//! over the filtered view: KPIs, the completeness chart, the status chart
//! and the monitoring table.

use serde::Serialize;

use pmx_core::{CountryName, PolicyCategory};

use crate::dataset::Dataset;
use crate::filter::{filter, FilterCriteria};
use crate::record::PolicyRecord;
use crate::summary::{completeness_ranking, status_distribution, summarize, RankingEntry, StatusBucket, Summary};

/// One row of the monitoring table, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub country: CountryName,
    /// `YYYY-MM-DD` or `"unknown"`.
    pub last_update: String,
    /// Glyph and status text, e.g. `🟢 Green`.
    pub review_status: String,
    pub prevention: String,
    pub administrative: String,
    pub criminal_justice: String,
    pub surveillance: String,
    pub rehab_reintegration: String,
    pub women_children_notes: String,
    pub completeness_pct: f64,
    pub notes: String,
}

impl From<&PolicyRecord> for TableRow {
    fn from(record: &PolicyRecord) -> Self {
        let cell = |category: PolicyCategory| record.value(category).as_str().to_string();
        Self {
            country: record.country().clone(),
            last_update: record.last_update_display(),
            review_status: record.review_status().badge(),
            prevention: cell(PolicyCategory::Prevention),
            administrative: cell(PolicyCategory::Administrative),
            criminal_justice: cell(PolicyCategory::CriminalJustice),
            surveillance: cell(PolicyCategory::Surveillance),
            rehab_reintegration: cell(PolicyCategory::RehabReintegration),
            women_children_notes: cell(PolicyCategory::WomenChildren),
            completeness_pct: record.completeness_pct(),
            notes: record.notes().to_string(),
        }
    }
}

/// A complete dashboard screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub criteria: FilterCriteria,
    /// Size of the unfiltered dataset.
    pub dataset_count: usize,
    pub summary: Summary,
    pub ranking: Vec<RankingEntry>,
    pub distribution: Vec<StatusBucket>,
    pub rows: Vec<TableRow>,
}

impl DashboardView {
    pub fn build(dataset: &Dataset, criteria: FilterCriteria) -> Self {
        let view = filter(dataset, &criteria);
        tracing::debug!(
            selected = view.len(),
            total = dataset.len(),
            focus = %criteria.focus,
            "built dashboard view"
        );
        Self {
            dataset_count: dataset.len(),
            summary: summarize(view.iter().copied()),
            ranking: completeness_ranking(view.iter().copied()),
            distribution: status_distribution(view.iter().copied()),
            rows: view.into_iter().map(TableRow::from).collect(),
            criteria,
        }
    }

    /// `"filtered/total"`, the country KPI as displayed.
    pub fn country_ratio(&self) -> String {
        format!("{}/{}", self.summary.total_count, self.dataset_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFocus;
    use pmx_core::ReviewStatus;

    #[test]
    fn default_dashboard() {
        let dataset = Dataset::sample();
        let view = DashboardView::build(&dataset, FilterCriteria::all(&dataset));
        assert_eq!(view.country_ratio(), "8/8");
        assert_eq!(view.summary.avg_completeness, 77.1);
        assert_eq!(view.rows.len(), 8);
        assert_eq!(view.rows[0].country.as_str(), "Indonesia");
        assert_eq!(view.rows[0].review_status, "🟢 Green");
        assert_eq!(view.rows[2].review_status, "🔴 Red");
        assert_eq!(view.rows[1].last_update, "2026-02-10");
        assert_eq!(view.ranking[0].country.as_str(), "France");
    }

    #[test]
    fn filtered_dashboard() {
        let dataset = Dataset::sample();
        let mut criteria = FilterCriteria::all(&dataset)
            .with_focus(CategoryFocus::Category(PolicyCategory::RehabReintegration));
        criteria.statuses.remove(&ReviewStatus::Green);
        let view = DashboardView::build(&dataset, criteria);
        let names: Vec<&str> = view.rows.iter().map(|r| r.country.as_str()).collect();
        assert_eq!(names, ["Malaysia", "Philippines", "Turkey", "Kazakhstan"]);
        assert_eq!(view.country_ratio(), "4/8");
        assert_eq!(view.distribution[0].count, 0);
        assert_eq!(view.distribution[1].count, 3);
    }

    #[test]
    fn neutral_badge_and_unknown_date() {
        let dataset = crate::loader::load(vec![crate::loader::RawRow {
            country: Some("Chile".into()),
            last_update: Some("soon".into()),
            review_status: Some("Amber".into()),
            prevention: Some("TBD".into()),
            ..Default::default()
        }]);
        let mut criteria = FilterCriteria::all(&dataset);
        criteria.statuses.insert(ReviewStatus::Other("Amber".into()));
        let view = DashboardView::build(&dataset, criteria);
        assert_eq!(view.rows[0].review_status, "⚪ Amber");
        assert_eq!(view.rows[0].last_update, "unknown");
        assert_eq!(view.rows[0].prevention, "TBD");
        assert_eq!(view.summary.counts_by_status.green, 0);
    }

    #[test]
    fn empty_selection() {
        let dataset = Dataset::sample();
        let mut criteria = FilterCriteria::all(&dataset);
        criteria.countries.clear();
        let view = DashboardView::build(&dataset, criteria);
        assert!(view.rows.is_empty());
        assert_eq!(view.summary, Summary::default());
        assert_eq!(view.country_ratio(), "0/8");
    }
}
