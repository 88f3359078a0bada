//! Catalog seed file parsing: one `title \t sku \t value` row per line.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flux_core::catalog::CatalogSeed;

use crate::error::IngestError;

/// Tab fields per catalog seed line.
const CATALOG_FIELDS: usize = 3;

/// Parse one catalog seed line.
///
/// The line is trimmed of surrounding whitespace first, then must split into
/// exactly three tab fields. `line_no` is 1-based, for error reporting.
///
/// # Errors
///
/// Returns `IngestError::MalformedCatalogLine` on any other field count.
pub fn parse_catalog_line(line: &str, line_no: usize) -> Result<CatalogSeed, IngestError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    if fields.len() != CATALOG_FIELDS {
        return Err(IngestError::MalformedCatalogLine {
            line_no,
            fields: fields.len(),
        });
    }
    Ok(CatalogSeed {
        title: fields[0].to_owned(),
        sku: fields[1].to_owned(),
        value: fields[2].to_owned(),
    })
}

/// Read a whole catalog seed file.
///
/// Duplicate SKUs are kept here; the store deduplicates at insert time so
/// the first occurrence wins.
///
/// # Errors
///
/// Returns `IngestError` if the file cannot be read or a line does not
/// split into three tab fields.
pub fn read_catalog_file(path: &Path) -> Result<Vec<CatalogSeed>, IngestError> {
    let file = File::open(path)?;
    let mut seeds = Vec::new();
    for (index, line) in BufReader::new(file).lines().enumerate() {
        seeds.push(parse_catalog_line(&line?, index + 1)?);
    }
    tracing::debug!("parsed {} catalog rows from {}", seeds.len(), path.display());
    Ok(seeds)
}
