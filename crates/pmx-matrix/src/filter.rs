//! # Filter Engine
//!
//! Set-membership selection over a dataset. A record passes when its
//! country and its status are both selected and, under a category focus,
//! its value in that category is `Yes` or `Partial`.
//!
//! Empty selections mean "nothing selected": they yield an empty view, not
//! the whole dataset.

use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use pmx_core::{CountryName, PmxError, PolicyCategory, ReviewStatus};

use crate::dataset::Dataset;
use crate::record::PolicyRecord;

/// Optional restriction to records covering one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFocus {
    /// No restriction.
    #[default]
    All,
    /// Keep records with `Yes` or `Partial` in this category.
    Category(PolicyCategory),
}

impl CategoryFocus {
    pub fn admits(&self, record: &PolicyRecord) -> bool {
        match self {
            Self::All => true,
            Self::Category(category) => record.value(*category).is_covered(),
        }
    }
}

impl FromStr for CategoryFocus {
    type Err = PmxError;

    /// Accepts `all`, `none` (both meaning no focus) or a column name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "all" | "none" => Ok(Self::All),
            other => other
                .parse::<PolicyCategory>()
                .map(Self::Category)
                .map_err(|_| PmxError::UnknownFocus(other.to_string())),
        }
    }
}

impl std::fmt::Display for CategoryFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Category(category) => f.write_str(category.as_str()),
        }
    }
}

/// The dashboard's filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub countries: BTreeSet<CountryName>,
    pub statuses: BTreeSet<ReviewStatus>,
    pub focus: CategoryFocus,
}

impl FilterCriteria {
    /// Every country in the dataset, the three known statuses, no focus.
    pub fn all(dataset: &Dataset) -> Self {
        Self {
            countries: dataset.records().iter().map(|r| r.country().clone()).collect(),
            statuses: ReviewStatus::KNOWN.into_iter().collect(),
            focus: CategoryFocus::All,
        }
    }

    /// Replace the focus.
    pub fn with_focus(mut self, focus: CategoryFocus) -> Self {
        self.focus = focus;
        self
    }

    pub fn matches(&self, record: &PolicyRecord) -> bool {
        self.countries.contains(record.country())
            && self.statuses.contains(record.review_status())
            && self.focus.admits(record)
    }
}

/// Records passing `criteria`, in input order.
pub fn filter<'a>(dataset: &'a Dataset, criteria: &FilterCriteria) -> Vec<&'a PolicyRecord> {
    dataset
        .records()
        .iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(records: &[&'a PolicyRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.country().as_str()).collect()
    }

    #[test]
    fn identity_filter_returns_everything_in_order() {
        let dataset = Dataset::sample();
        let view = filter(&dataset, &FilterCriteria::all(&dataset));
        assert_eq!(view.len(), dataset.len());
        assert!(view.iter().zip(dataset.records()).all(|(a, b)| std::ptr::eq(*a, b)));
    }

    #[test]
    fn empty_selection_is_empty() {
        let dataset = Dataset::sample();
        let mut criteria = FilterCriteria::all(&dataset);
        criteria.statuses.clear();
        assert!(filter(&dataset, &criteria).is_empty());

        let mut criteria = FilterCriteria::all(&dataset);
        criteria.countries.clear();
        assert!(filter(&dataset, &criteria).is_empty());
    }

    #[test]
    fn status_selection() {
        let dataset = Dataset::sample();
        let mut criteria = FilterCriteria::all(&dataset);
        criteria.statuses = [ReviewStatus::Red].into_iter().collect();
        assert_eq!(names(&filter(&dataset, &criteria)), ["Philippines", "Iraq"]);
    }

    #[test]
    fn focus_keeps_yes_and_partial() {
        let dataset = Dataset::sample();
        let criteria = FilterCriteria::all(&dataset)
            .with_focus(CategoryFocus::Category(PolicyCategory::Administrative));
        let view = filter(&dataset, &criteria);
        assert_eq!(view.len(), 7);
        assert!(!names(&view).contains(&"Philippines"));

        let criteria = FilterCriteria::all(&dataset)
            .with_focus(CategoryFocus::Category(PolicyCategory::WomenChildren));
        assert_eq!(
            names(&filter(&dataset, &criteria)),
            ["Indonesia", "Malaysia", "France", "Germany", "Turkey", "Kazakhstan"]
        );
    }

    #[test]
    fn focus_parsing() {
        assert_eq!("all".parse::<CategoryFocus>().unwrap(), CategoryFocus::All);
        assert_eq!("none".parse::<CategoryFocus>().unwrap(), CategoryFocus::All);
        assert_eq!(
            "surveillance".parse::<CategoryFocus>().unwrap(),
            CategoryFocus::Category(PolicyCategory::Surveillance)
        );
        assert_eq!(
            "Surveillance".parse::<CategoryFocus>().unwrap_err(),
            PmxError::UnknownFocus("Surveillance".into())
        );
        assert_eq!(
            CategoryFocus::Category(PolicyCategory::RehabReintegration).to_string(),
            "rehab_reintegration"
        );
    }

    #[test]
    fn unknown_status_never_matches_known_selection() {
        let dataset = crate::loader::load(vec![crate::loader::RawRow {
            country: Some("Chile".into()),
            review_status: Some("Amber".into()),
            ..Default::default()
        }]);
        assert!(filter(&dataset, &FilterCriteria::all(&dataset)).is_empty());
    }
}
