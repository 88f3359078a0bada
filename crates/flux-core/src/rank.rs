//! Volatility ranking of change sequences.

use crate::sequence::ChangeSequence;

/// Sort sequences by history length, longest first.
///
/// Length is the volatility measure: more deduplicated entries means more
/// distinct quantity changes. The sort is stable, so SKUs with equal-length
/// histories keep their first-encountered order from the scan.
#[must_use]
pub fn rank_by_volatility(mut sequences: Vec<ChangeSequence>) -> Vec<ChangeSequence> {
    sequences.sort_by(|a, b| b.qty_history.len().cmp(&a.qty_history.len()));
    sequences
}
