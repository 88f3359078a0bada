//! The normalized quantity event produced by ingestion.

use serde::{Deserialize, Serialize};

/// One quantity observation for one SKU, extracted from a single line item
/// of a transaction log line.
///
/// `timestamp` is carried verbatim from the log as an opaque, lexically
/// sortable string; no calendar semantics are attached to it anywhere in the
/// pipeline. `sku` is `None` when the line item carried no `sku` key and is
/// stored as SQL NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityEvent {
    pub timestamp: String,
    pub owner_id: String,
    pub sku: Option<String>,
    pub qty: i64,
}

impl QuantityEvent {
    /// Render the flat one-line form written to the parsed-events file.
    ///
    /// An absent SKU renders as the empty string.
    #[must_use]
    pub fn render_parsed_line(&self) -> String {
        format!(
            "Date: {}, seller_id: {}, qty: {}, sku: {}",
            self.timestamp,
            self.owner_id,
            self.qty,
            self.sku.as_deref().unwrap_or_default()
        )
    }
}
