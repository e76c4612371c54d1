//! # pmx-matrix — Policy Matrix Analytics Engine
//!
//! The policy matrix maps each (country, category) pair to a categorical
//! policy value:
//!
//! ```text
//! M: C × P → V     C = countries, P = six policy categories,
//!                  V = {Yes, Partial, No} ∪ unrecognized text
//! ```
//!
//! Everything in this crate is a pure function over an immutable
//! [`Dataset`]:
//!
//! - **Loader** (`loader.rs`): raw rows (CSV, JSON, YAML, or the embedded
//!   sample) → `Dataset`. Malformed dates, unknown values and blank
//!   countries are recovered, never fatal.
//! - **Scoring** (`scoring.rs`): completeness percentage and gap counts.
//! - **Filter** (`filter.rs`): country/status set membership plus an
//!   optional category focus.
//! - **Summary** (`summary.rs`): KPI aggregation, completeness ranking,
//!   status distribution.
//! - **Compare** (`compare.rs`): per-category verdicts and a narrative
//!   summary for two countries.
//! - **Dashboard** (`dashboard.rs`): everything one dashboard screen needs,
//!   assembled in a single pass.
//!
//! ## Crate Policy
//!
//! - The dataset is passed explicitly; there is no global state.
//! - Records are immutable after load. Derived fields are computed once.
//! - `NotFound` is the only error an analytics operation can return.

pub mod compare;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod loader;
pub mod record;
pub mod scoring;
pub mod summary;

pub use compare::{compare, compare_countries, CategoryComparison, Comparison, Verdict};
pub use dashboard::{DashboardView, TableRow};
pub use dataset::Dataset;
pub use filter::{filter, CategoryFocus, FilterCriteria};
pub use loader::{
    from_csv_reader, from_json_reader, from_path, from_yaml_reader, load, load_with_report,
    read_path_rows, sample_rows,
    LoadError, LoadIssue, LoadReport, RawRow,
};
pub use record::PolicyRecord;
pub use scoring::{completeness, gap_count, mean_one_decimal, round_one_decimal};
pub use summary::{
    completeness_ranking, status_distribution, summarize, RankingEntry, StatusBucket,
    StatusCounts, Summary,
};
