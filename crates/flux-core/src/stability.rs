//! Stable vs volatile classification of change sequences.

use crate::sequence::ChangeSequence;

/// A SKU is stable when its deduplicated history holds exactly one entry,
/// meaning its quantity never changed across the whole log.
#[must_use]
pub fn is_stable(sequence: &ChangeSequence) -> bool {
    sequence.qty_history.len() == 1
}

/// Partition sequences into `(stable, volatile)`, preserving input order on
/// both sides.
#[must_use]
pub fn split_stability(
    sequences: &[ChangeSequence],
) -> (Vec<&ChangeSequence>, Vec<&ChangeSequence>) {
    sequences.iter().partition(|sequence| is_stable(sequence))
}
