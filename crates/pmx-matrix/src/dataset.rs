//! # Dataset
//!
//! The ordered, immutable collection of policy records. Country names are
//! unique; the loader guarantees it before construction.

use std::collections::HashMap;

use pmx_core::{CountryName, PmxError};

use crate::loader;
use crate::record::PolicyRecord;

/// All loaded policy records in input order, indexed by country.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<PolicyRecord>,
    index: HashMap<CountryName, usize>,
}

impl Dataset {
    /// Build from records whose country names are already unique.
    pub(crate) fn from_unique_records(records: Vec<PolicyRecord>) -> Self {
        let index = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.country().clone(), i))
            .collect();
        Self { records, index }
    }

    /// The embedded eight-country sample.
    pub fn sample() -> Self {
        loader::load(loader::sample_rows())
    }

    /// Records in input order.
    pub fn records(&self) -> &[PolicyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by exact country name.
    pub fn get(&self, country: &str) -> Result<&PolicyRecord, PmxError> {
        self.index
            .get(country)
            .map(|&i| &self.records[i])
            .ok_or_else(|| PmxError::NotFound(country.to_string()))
    }

    pub fn contains(&self, country: &str) -> bool {
        self.index.contains_key(country)
    }

    /// Country names in lexicographic order.
    pub fn countries_sorted(&self) -> Vec<&CountryName> {
        let mut names: Vec<&CountryName> = self.records.iter().map(PolicyRecord::country).collect();
        names.sort();
        names
    }

    /// Default comparison pair: first and second country in sorted order.
    /// `None` when fewer than two countries are loaded.
    pub fn default_pair(&self) -> Option<(&CountryName, &CountryName)> {
        match self.countries_sorted()[..] {
            [first, second, ..] => Some((first, second)),
            _ => None,
        }
    }
}
