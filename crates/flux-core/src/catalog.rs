//! Catalog types shared between ingestion, storage, and reporting.

use serde::{Deserialize, Serialize};

/// One row of the tab-separated catalog seed file: `title`, `sku`, `value`.
///
/// `title` becomes the stored company name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSeed {
    pub title: String,
    pub sku: String,
    pub value: String,
}

/// Company catalog data for one SKU, as joined into report lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub company_name: String,
    pub value: String,
}
