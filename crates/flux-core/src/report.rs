//! Report line types and their exact text renderings.
//!
//! Entries stay structured until the file boundary. flux-cli writes each
//! report by iterating entries and printing their `Display` form, one line
//! per entry; nothing downstream re-parses report text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::aggregate::ChangeFormula;
use crate::catalog::CatalogInfo;
use crate::sequence::ChangeSequence;

/// Rendered in place of both catalog fields when a SKU has no catalog row.
pub const DATA_NOT_FOUND: &str = "Data Not Found";

fn catalog_fields(catalog: Option<&CatalogInfo>) -> (String, String) {
    catalog.map_or_else(
        || (DATA_NOT_FOUND.to_owned(), DATA_NOT_FOUND.to_owned()),
        |info| (info.company_name.clone(), info.value.clone()),
    )
}

// ---------------------------------------------------------------------------
// RankedEntry
// ---------------------------------------------------------------------------

/// One line of the volatility-ranked report.
///
/// The ranked report lists every sequence, so stable SKUs appear at the tail
/// with a single-entry change list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub sku: String,
    pub company_name: String,
    pub value: String,
    pub qty_history: Vec<i64>,
}

impl RankedEntry {
    #[must_use]
    pub fn from_sequence(sequence: &ChangeSequence, catalog: Option<&CatalogInfo>) -> Self {
        let (company_name, value) = catalog_fields(catalog);
        Self {
            sku: sequence.sku.clone(),
            company_name,
            value,
            qty_history: sequence.qty_history.clone(),
        }
    }

    /// The `10 - 7 - 9 - 4` form of the history.
    #[must_use]
    pub fn joined_changes(&self) -> String {
        self.qty_history
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" - ")
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SKU: {}, Company Name: {}, Value: {}, Changes: {}",
            self.sku,
            self.company_name,
            self.value,
            self.joined_changes()
        )
    }
}

// ---------------------------------------------------------------------------
// StableEntry
// ---------------------------------------------------------------------------

/// One line of the stable-SKU report: the SKU, the timestamp of its first
/// stored row, and its catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StableEntry {
    pub sku: String,
    pub first_seen: String,
    pub company_name: String,
    pub value: String,
}

impl StableEntry {
    #[must_use]
    pub fn new(
        sku: impl Into<String>,
        first_seen: impl Into<String>,
        catalog: Option<&CatalogInfo>,
    ) -> Self {
        let (company_name, value) = catalog_fields(catalog);
        Self {
            sku: sku.into(),
            first_seen: first_seen.into(),
            company_name,
            value,
        }
    }
}

impl fmt::Display for StableEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SKU: {}, Date: {}, Company Name: {}, Value: {}",
            self.sku, self.first_seen, self.company_name, self.value
        )
    }
}

// ---------------------------------------------------------------------------
// NetChangeEntry
// ---------------------------------------------------------------------------

/// One line of the net-stock-change report.
///
/// This line format has no comma separators between fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetChangeEntry {
    pub sku: String,
    pub company_name: String,
    pub value: String,
    pub stock_change: i64,
}

impl NetChangeEntry {
    #[must_use]
    pub fn from_sequence(
        sequence: &ChangeSequence,
        catalog: Option<&CatalogInfo>,
        formula: ChangeFormula,
    ) -> Self {
        let (company_name, value) = catalog_fields(catalog);
        Self {
            sku: sequence.sku.clone(),
            company_name,
            value,
            stock_change: formula.apply(&sequence.qty_history),
        }
    }
}

impl fmt::Display for NetChangeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SKU: {} Company Name: {} Value: {} Stock Change: {}",
            self.sku, self.company_name, self.value, self.stock_change
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> CatalogInfo {
        CatalogInfo {
            company_name: "Acme Corp".to_owned(),
            value: "19.99".to_owned(),
        }
    }

    #[test]
    fn ranked_line_with_catalog_data() {
        let sequence = ChangeSequence::new("A1", vec![10, 7, 9, 4]);
        let entry = RankedEntry::from_sequence(&sequence, Some(&catalog()));
        assert_eq!(
            entry.to_string(),
            "SKU: A1, Company Name: Acme Corp, Value: 19.99, Changes: 10 - 7 - 9 - 4"
        );
    }

    #[test]
    fn ranked_line_without_catalog_data() {
        let sequence = ChangeSequence::new("A1", vec![5]);
        let entry = RankedEntry::from_sequence(&sequence, None);
        assert_eq!(
            entry.to_string(),
            "SKU: A1, Company Name: Data Not Found, Value: Data Not Found, Changes: 5"
        );
    }

    #[test]
    fn joined_changes_single_entry_has_no_separator() {
        let sequence = ChangeSequence::new("A1", vec![5]);
        let entry = RankedEntry::from_sequence(&sequence, None);
        assert_eq!(entry.joined_changes(), "5");
    }

    #[test]
    fn stable_line_format() {
        let entry = StableEntry::new("B2", "2024-01-01T00:00:00", Some(&catalog()));
        assert_eq!(
            entry.to_string(),
            "SKU: B2, Date: 2024-01-01T00:00:00, Company Name: Acme Corp, Value: 19.99"
        );
    }

    #[test]
    fn stable_line_without_catalog_falls_back() {
        let entry = StableEntry::new("B2", "2024-01-01T00:00:00", None);
        assert_eq!(
            entry.to_string(),
            "SKU: B2, Date: 2024-01-01T00:00:00, Company Name: Data Not Found, Value: Data Not Found"
        );
    }

    #[test]
    fn net_change_line_has_no_commas() {
        let sequence = ChangeSequence::new("C3", vec![10, 7, 9, 4]);
        let entry =
            NetChangeEntry::from_sequence(&sequence, Some(&catalog()), ChangeFormula::NetDecreaseSum);
        assert_eq!(
            entry.to_string(),
            "SKU: C3 Company Name: Acme Corp Value: 19.99 Stock Change: 8"
        );
    }

    #[test]
    fn net_change_without_catalog_falls_back() {
        let sequence = ChangeSequence::new("C3", vec![5]);
        let entry = NetChangeEntry::from_sequence(&sequence, None, ChangeFormula::NetDecreaseSum);
        assert_eq!(
            entry.to_string(),
            "SKU: C3 Company Name: Data Not Found Value: Data Not Found Stock Change: 0"
        );
    }
}
