//! The `company` catalog table: seeding with first-wins dedup, and the
//! per-SKU lookup joined into reports.

use std::collections::HashSet;

use flux_core::catalog::{CatalogInfo, CatalogSeed};

use crate::FluxDb;
use crate::error::StoreError;

impl FluxDb {
    /// Insert catalog rows, skipping SKUs already seeded within this call so
    /// the first occurrence wins. Returns the number of rows inserted.
    ///
    /// The table carries no uniqueness constraint; dedup happens here, and a
    /// rerun against an existing database appends again.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any insert fails; nothing is committed then.
    pub async fn seed_catalog(&self, seeds: &[CatalogSeed]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction().await?;
        let mut seen: HashSet<&str> = HashSet::new();
        let mut inserted = 0usize;
        for seed in seeds {
            if !seen.insert(seed.sku.as_str()) {
                continue;
            }
            tx.execute(
                "INSERT INTO company (company_name, sku, value) VALUES (?1, ?2, ?3)",
                libsql::params![seed.title.as_str(), seed.sku.as_str(), seed.value.as_str()],
            )
            .await?;
            inserted += 1;
        }
        tx.commit().await?;
        tracing::debug!("seeded {} catalog rows ({} input)", inserted, seeds.len());
        Ok(inserted)
    }

    /// Catalog data for one SKU, or `None` when the SKU has no row.
    ///
    /// When duplicate rows exist the first stored one wins.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn catalog_lookup(&self, sku: &str) -> Result<Option<CatalogInfo>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT company_name, value FROM company WHERE sku = ?1",
                [sku],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(CatalogInfo {
                company_name: row.get::<Option<String>>(0)?.unwrap_or_default(),
                value: row.get::<Option<String>>(1)?.unwrap_or_default(),
            })),
            None => Ok(None),
        }
    }
}
