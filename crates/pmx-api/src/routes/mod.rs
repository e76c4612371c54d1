//! # API Route Modules
//!
//! - `countries`: country list and single-record lookup.
//! - `dashboard`: full dashboard view and KPI summary for a filter.
//! - `compare`: two-country comparison.

pub mod compare;
pub mod countries;
pub mod dashboard;
