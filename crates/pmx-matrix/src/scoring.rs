//! # Scoring
//!
//! Completeness percentage per record and gap counts over record sets.
//!
//! ## Rounding
//!
//! Percentages are rounded to one decimal, half away from zero
//! (`f64::round` on the value scaled by ten). A six-field completeness is
//! always a multiple of 100/12 and never sits on a tie; the rule only
//! decides averages such as `avg_completeness`. Averages are taken over
//! whole tenths in integer arithmetic, so a true decimal tie like 33.35
//! rounds up instead of drifting below it in a float sum.

use pmx_core::{PolicyValue, POLICY_CATEGORY_COUNT};

use crate::record::PolicyRecord;

/// Round to one decimal place, half away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Mean of the six field scores × 100, rounded to one decimal.
///
/// Unrecognized values score 0.0, the same as `No`.
pub fn completeness(values: &[PolicyValue; POLICY_CATEGORY_COUNT]) -> f64 {
    let total: f64 = values.iter().map(PolicyValue::score).sum();
    round_one_decimal(total / POLICY_CATEGORY_COUNT as f64 * 100.0)
}

/// A one-decimal percentage as whole tenths (`41.7` → `417`).
pub fn to_tenths(pct: f64) -> u64 {
    (pct * 10.0).round() as u64
}

/// Mean of one-decimal percentages, rounded half away from zero to one
/// decimal. 0.0 for no input.
pub fn mean_one_decimal(pcts: impl IntoIterator<Item = f64>) -> f64 {
    let (sum, n) = pcts
        .into_iter()
        .fold((0u64, 0u64), |(sum, n), pct| (sum + to_tenths(pct), n + 1));
    if n == 0 {
        return 0.0;
    }
    ((2 * sum + n) / (2 * n)) as f64 / 10.0
}

/// Count fields whose value is exactly the literal `No` across `records`.
pub fn gap_count<'a>(records: impl IntoIterator<Item = &'a PolicyRecord>) -> usize {
    records.into_iter().map(PolicyRecord::gap_count).sum()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn raw_value() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("Yes".to_string()),
            Just("Partial".to_string()),
            Just("No".to_string()),
            "[a-z ]{0,6}",
        ]
    }

    proptest! {
        /// Completeness stays in range and equals the rounded mean score.
        #[test]
        fn completeness_in_range(raw in prop::array::uniform6(raw_value())) {
            let values = raw.map(|r| PolicyValue::parse(&r));
            let pct = completeness(&values);
            prop_assert!((0.0..=100.0).contains(&pct));

            let mean: f64 = values.iter().map(PolicyValue::score).sum::<f64>() / 6.0;
            prop_assert_eq!(pct, round_one_decimal(mean * 100.0));
        }
    }
}
