//! # pmx-core — Foundational Types for the Policy Matrix
//!
//! Every other crate in the workspace depends on `pmx-core`; it depends on
//! nothing internal. It defines the vocabulary the analytics engine speaks:
//!
//! 1. **Single `PolicyCategory` enum.** Six variants, one canonical order,
//!    exhaustive `match` everywhere. Adding a category forces every consumer
//!    to handle it.
//!
//! 2. **Total value classification.** `PolicyValue::parse()` never fails.
//!    Anything outside `Yes`/`Partial`/`No` becomes `Unrecognized(raw)`,
//!    scores 0.0, and is never counted as a gap.
//!
//! 3. **Status preserved verbatim.** `ReviewStatus::Other(raw)` keeps
//!    unrecognized statuses for display without inventing a fourth level.
//!
//! 4. **Lenient dates.** `ReviewDate::parse_lenient()` returns `None` on any
//!    malformed input instead of an error.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `pmx-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod error;
pub mod identity;
pub mod status;
pub mod temporal;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use category::{PolicyCategory, POLICY_CATEGORY_COUNT};
pub use error::PmxError;
pub use identity::CountryName;
pub use status::ReviewStatus;
pub use temporal::ReviewDate;
pub use value::PolicyValue;
