//! Stock-change aggregation over a deduplicated quantity history.
//!
//! Two formulas exist because reports historically disagreed on what "stock
//! change" meant. [`ChangeFormula`] names them both; the net-stock-change
//! report applies [`ChangeFormula::NetDecreaseSum`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cumulative depletion: the sum of every downward step between adjacent
/// entries. Restocks (upward steps) contribute nothing. Histories with fewer
/// than two entries yield 0. Steps and the running sum saturate at
/// `i64::MAX` instead of overflowing.
#[must_use]
pub fn net_decrease_sum(history: &[i64]) -> i64 {
    history
        .windows(2)
        .map(|pair| pair[0].saturating_sub(pair[1]).max(0))
        .fold(0, i64::saturating_add)
}

/// Spread of the history: largest minus smallest entry. Histories with fewer
/// than two entries yield 0. Saturates at `i64::MAX`.
#[must_use]
pub fn range_span(history: &[i64]) -> i64 {
    match (history.iter().max(), history.iter().min()) {
        (Some(max), Some(min)) => max.saturating_sub(*min),
        _ => 0,
    }
}

/// Which aggregation a report applies to a quantity history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeFormula {
    NetDecreaseSum,
    RangeSpan,
}

impl ChangeFormula {
    #[must_use]
    pub fn apply(self, history: &[i64]) -> i64 {
        match self {
            Self::NetDecreaseSum => net_decrease_sum(history),
            Self::RangeSpan => range_span(history),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NetDecreaseSum => "net_decrease_sum",
            Self::RangeSpan => "range_span",
        }
    }
}

impl fmt::Display for ChangeFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
