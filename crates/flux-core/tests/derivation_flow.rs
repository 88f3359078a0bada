//! End-to-end derivation tests: sorted stock rows in, rendered report lines
//! out, with no storage in between.

use flux_core::aggregate::ChangeFormula;
use flux_core::catalog::CatalogInfo;
use flux_core::rank::rank_by_volatility;
use flux_core::report::{NetChangeEntry, RankedEntry, StableEntry};
use flux_core::sequence::{ChangeSequence, SequenceBuilder};
use flux_core::stability::split_stability;
use pretty_assertions::assert_eq;

fn derive(rows: &[(&str, i64)]) -> Vec<ChangeSequence> {
    let mut builder = SequenceBuilder::new();
    for (sku, qty) in rows {
        builder.push(sku, *qty);
    }
    rank_by_volatility(builder.finish())
}

fn acme() -> CatalogInfo {
    CatalogInfo {
        company_name: "Acme Corp".to_owned(),
        value: "19.99".to_owned(),
    }
}

#[test]
fn rows_to_ranked_and_net_lines() {
    let ranked = derive(&[
        ("A1", 10),
        ("A1", 7),
        ("A1", 7),
        ("A1", 9),
        ("A1", 4),
        ("B2", 5),
        ("B2", 5),
    ]);

    let lines: Vec<String> = ranked
        .iter()
        .map(|sequence| RankedEntry::from_sequence(sequence, Some(&acme())).to_string())
        .collect();
    assert_eq!(
        lines,
        vec![
            "SKU: A1, Company Name: Acme Corp, Value: 19.99, Changes: 10 - 7 - 9 - 4",
            "SKU: B2, Company Name: Acme Corp, Value: 19.99, Changes: 5",
        ]
    );

    let net: Vec<String> = ranked
        .iter()
        .map(|sequence| {
            NetChangeEntry::from_sequence(sequence, None, ChangeFormula::NetDecreaseSum).to_string()
        })
        .collect();
    assert_eq!(
        net,
        vec![
            "SKU: A1 Company Name: Data Not Found Value: Data Not Found Stock Change: 8",
            "SKU: B2 Company Name: Data Not Found Value: Data Not Found Stock Change: 0",
        ]
    );
}

#[test]
fn unchanged_quantity_across_the_log_reports_stable() {
    // Two observations of the same quantity collapse to one entry, which is
    // the definition of a stable SKU.
    let ranked = derive(&[("A1", 5), ("A1", 5)]);
    let (stable, volatile) = split_stability(&ranked);

    assert!(volatile.is_empty());
    let entry = StableEntry::new(
        stable[0].sku.as_str(),
        "2024-01-01T00:00:00",
        Some(&acme()),
    );
    assert_eq!(
        entry.to_string(),
        "SKU: A1, Date: 2024-01-01T00:00:00, Company Name: Acme Corp, Value: 19.99"
    );
}

#[test]
fn ranked_output_interleaves_stable_skus_at_the_tail() {
    // The ranked report lists every sequence; stable SKUs just rank last.
    let ranked = derive(&[("A1", 1), ("A1", 2), ("B2", 3), ("C3", 4), ("C3", 5), ("C3", 6)]);
    let skus: Vec<&str> = ranked.iter().map(|s| s.sku.as_str()).collect();
    assert_eq!(skus, vec!["C3", "A1", "B2"]);

    let (stable, volatile) = split_stability(&ranked);
    assert_eq!(stable.len(), 1);
    assert_eq!(volatile.len(), 2);
}
