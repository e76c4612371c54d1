//! # Aggregation
//!
//! KPI summary, completeness ranking and status distribution over any view
//! of the dataset. Every function accepts an iterator of record references,
//! so it works equally on a whole [`Dataset`](crate::Dataset) and on a
//! filtered view.

use serde::Serialize;

use pmx_core::{CountryName, ReviewStatus};

use crate::record::PolicyRecord;
use crate::scoring;

/// Record counts per known status. Unrecognized statuses are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub green: usize,
    pub yellow: usize,
    pub red: usize,
}

impl StatusCounts {
    /// Count for one status; zero for unrecognized ones.
    pub fn get(&self, status: &ReviewStatus) -> usize {
        match status {
            ReviewStatus::Green => self.green,
            ReviewStatus::Yellow => self.yellow,
            ReviewStatus::Red => self.red,
            ReviewStatus::Other(_) => 0,
        }
    }

    fn tally(&mut self, status: &ReviewStatus) {
        match status {
            ReviewStatus::Green => self.green += 1,
            ReviewStatus::Yellow => self.yellow += 1,
            ReviewStatus::Red => self.red += 1,
            ReviewStatus::Other(_) => {}
        }
    }
}

/// Headline KPIs for a set of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub total_count: usize,
    pub counts_by_status: StatusCounts,
    /// Mean completeness, one decimal; 0.0 when empty.
    pub avg_completeness: f64,
    pub gap_count: usize,
}

/// Aggregate KPIs over `records`.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a PolicyRecord>) -> Summary {
    let records: Vec<&PolicyRecord> = records.into_iter().collect();

    let mut counts_by_status = StatusCounts::default();
    for record in &records {
        counts_by_status.tally(record.review_status());
    }

    Summary {
        total_count: records.len(),
        counts_by_status,
        avg_completeness: scoring::mean_one_decimal(
            records.iter().map(|r| r.completeness_pct()),
        ),
        gap_count: scoring::gap_count(records.iter().copied()),
    }
}

/// One bar of the completeness chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingEntry {
    pub country: CountryName,
    pub completeness_pct: f64,
}

/// Countries by completeness, highest first. Ties keep input order.
pub fn completeness_ranking<'a>(
    records: impl IntoIterator<Item = &'a PolicyRecord>,
) -> Vec<RankingEntry> {
    let mut ranking: Vec<RankingEntry> = records
        .into_iter()
        .map(|r| RankingEntry {
            country: r.country().clone(),
            completeness_pct: r.completeness_pct(),
        })
        .collect();
    ranking.sort_by(|a, b| b.completeness_pct.total_cmp(&a.completeness_pct));
    ranking
}

/// One slice of the status chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBucket {
    pub status: ReviewStatus,
    pub count: usize,
}

/// Green, Yellow, Red counts in that order, zero-filled.
pub fn status_distribution<'a>(
    records: impl IntoIterator<Item = &'a PolicyRecord>,
) -> Vec<StatusBucket> {
    let mut counts = StatusCounts::default();
    for record in records {
        counts.tally(record.review_status());
    }
    ReviewStatus::KNOWN
        .into_iter()
        .map(|status| StatusBucket {
            count: counts.get(&status),
            status,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::filter::{filter, FilterCriteria};

    #[test]
    fn sample_kpis() {
        let dataset = Dataset::sample();
        let summary = summarize(dataset.records());
        assert_eq!(summary.total_count, 8);
        assert_eq!(
            summary.counts_by_status,
            StatusCounts { green: 3, yellow: 3, red: 2 }
        );
        assert_eq!(summary.avg_completeness, 77.1);
        assert_eq!(summary.gap_count, 4);
    }

    #[test]
    fn empty_summary_is_all_zero() {
        let summary = summarize(std::iter::empty());
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.avg_completeness, 0.0);
    }

    #[test]
    fn summary_over_filtered_view() {
        let dataset = Dataset::sample();
        let mut criteria = FilterCriteria::all(&dataset);
        criteria.statuses = [ReviewStatus::Red].into_iter().collect();
        let summary = summarize(filter(&dataset, &criteria));
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.counts_by_status.red, 2);
        assert_eq!(summary.avg_completeness, 41.7);
        assert_eq!(summary.gap_count, 4);
    }

    #[test]
    fn average_rounds_decimal_tie_up() {
        let low = ["Yes", "No", "No", "No", "No", "No"];
        let high = ["Yes", "Yes", "Yes", "Yes", "Yes", "No"];
        let rows = [("A", low), ("B", low), ("C", low), ("D", high)].map(|(country, values)| {
            let [prevention, administrative, criminal_justice, surveillance, rehab_reintegration, women_children_notes] =
                values.map(|v| Some(v.to_string()));
            crate::loader::RawRow {
                country: Some(country.into()),
                review_status: Some("Yellow".into()),
                prevention,
                administrative,
                criminal_justice,
                surveillance,
                rehab_reintegration,
                women_children_notes,
                ..Default::default()
            }
        });
        let dataset = crate::loader::load(rows);
        let pcts: Vec<f64> = dataset.records().iter().map(|r| r.completeness_pct()).collect();
        assert_eq!(pcts, [16.7, 16.7, 16.7, 83.3]);
        assert_eq!(summarize(dataset.records()).avg_completeness, 33.4);
    }

    #[test]
    fn unrecognized_status_excluded_from_counts() {
        let dataset = crate::loader::load(vec![
            crate::loader::RawRow {
                country: Some("Chile".into()),
                review_status: Some("Amber".into()),
                ..Default::default()
            },
            crate::loader::RawRow {
                country: Some("Peru".into()),
                review_status: Some("Green".into()),
                ..Default::default()
            },
        ]);
        let summary = summarize(dataset.records());
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.counts_by_status, StatusCounts { green: 1, yellow: 0, red: 0 });
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let dataset = Dataset::sample();
        let ranking = completeness_ranking(dataset.records());
        let order: Vec<&str> = ranking.iter().map(|e| e.country.as_str()).collect();
        assert_eq!(
            order,
            ["France", "Germany", "Malaysia", "Kazakhstan", "Indonesia", "Turkey", "Philippines", "Iraq"]
        );
        assert_eq!(ranking[0].completeness_pct, 100.0);
        assert_eq!(ranking[7].completeness_pct, 41.7);
    }

    #[test]
    fn distribution_is_zero_filled() {
        let dataset = Dataset::sample();
        let mut criteria = FilterCriteria::all(&dataset);
        criteria.statuses = [ReviewStatus::Green].into_iter().collect();
        let buckets = status_distribution(filter(&dataset, &criteria));
        assert_eq!(
            buckets,
            vec![
                StatusBucket { status: ReviewStatus::Green, count: 3 },
                StatusBucket { status: ReviewStatus::Yellow, count: 0 },
                StatusBucket { status: ReviewStatus::Red, count: 0 },
            ]
        );
    }
}
