//! The append-only `products` event table: inserts, the sorted scan, and
//! the first-seen lookup.

use flux_core::event::QuantityEvent;

use crate::FluxDb;
use crate::error::StoreError;

/// Cursor over `(sku, qty)` rows in derivation order.
///
/// Rows stream through the underlying libSQL cursor, so the table never has
/// to fit in memory. SQL NULL skus read back as the empty string.
pub struct StockScan {
    rows: libsql::Rows,
}

impl StockScan {
    /// Fetch the next row, or `None` when the scan is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the cursor or a column read fails.
    pub async fn next(&mut self) -> Result<Option<(String, i64)>, StoreError> {
        match self.rows.next().await? {
            Some(row) => {
                let sku = row.get::<Option<String>>(0)?.unwrap_or_default();
                let qty = row.get::<i64>(1)?;
                Ok(Some((sku, qty)))
            }
            None => Ok(None),
        }
    }
}

impl FluxDb {
    /// Append one `products` row per event, all in a single transaction.
    ///
    /// Returns the number of rows written. `owner_id` binds as text; the
    /// column's INTEGER affinity coerces numeric strings the way the schema
    /// expects and keeps non-numeric ids as text.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if any insert fails; nothing is committed then.
    pub async fn insert_events(&self, events: &[QuantityEvent]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction().await?;
        for event in events {
            tx.execute(
                "INSERT INTO products (created_at, seller_id, qty, sku) VALUES (?1, ?2, ?3, ?4)",
                libsql::params![
                    event.timestamp.as_str(),
                    event.owner_id.as_str(),
                    event.qty,
                    event.sku.as_deref()
                ],
            )
            .await?;
        }
        tx.commit().await?;
        tracing::debug!("inserted {} product rows", events.len());
        Ok(events.len())
    }

    /// Open the sorted scan the change-sequence fold consumes.
    ///
    /// Order is `(sku, created_at, rowid)`: the trailing `rowid` makes ties
    /// between equal timestamps resolve by insertion order, so re-running on
    /// the same data always yields the same sequences. NULL skus sort first
    /// and read back as the empty string.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn scan_ordered(&self) -> Result<StockScan, StoreError> {
        let rows = self
            .conn
            .query(
                "SELECT sku, qty FROM products ORDER BY sku, created_at, rowid",
                (),
            )
            .await?;
        Ok(StockScan { rows })
    }

    /// Timestamp of the first stored row for `sku`, or `None` when the SKU
    /// has no rows.
    ///
    /// This is a literal first-match lookup by insertion order, not a
    /// minimum: when timestamps arrive out of order, the first stored row
    /// need not carry the earliest timestamp.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails.
    pub async fn first_seen(&self, sku: &str) -> Result<Option<String>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT created_at FROM products WHERE sku = ?1 ORDER BY rowid LIMIT 1",
                [sku],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<Option<String>>(0)?.unwrap_or_default())),
            None => Ok(None),
        }
    }

    /// Total number of stored events.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the query fails or returns no row.
    pub async fn count_events(&self) -> Result<i64, StoreError> {
        let mut rows = self.conn.query("SELECT COUNT(*) FROM products", ()).await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| StoreError::Query("COUNT(*) returned no row".to_owned()))?;
        Ok(row.get::<i64>(0)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::test_support::helpers::{event, test_db};

    async fn collect_scan(db: &crate::FluxDb) -> Vec<(String, i64)> {
        let mut scan = db.scan_ordered().await.unwrap();
        let mut rows = Vec::new();
        while let Some(row) = scan.next().await.unwrap() {
            rows.push(row);
        }
        rows
    }

    #[tokio::test]
    async fn insert_reports_row_count() {
        let db = test_db().await;
        let written = db
            .insert_events(&[
                event("2024-01-01T00:00:00", Some("A1"), 5),
                event("2024-01-01T00:01:00", Some("A1"), 7),
            ])
            .await
            .unwrap();
        assert_eq!(written, 2);
        assert_eq!(db.count_events().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn empty_insert_is_a_no_op() {
        let db = test_db().await;
        assert_eq!(db.insert_events(&[]).await.unwrap(), 0);
        assert_eq!(db.count_events().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn scan_orders_by_sku_then_timestamp() {
        let db = test_db().await;
        db.insert_events(&[
            event("2024-01-02T00:00:00", Some("B"), 3),
            event("2024-01-01T00:00:00", Some("B"), 1),
            event("2024-01-03T00:00:00", Some("A"), 9),
        ])
        .await
        .unwrap();

        let rows = collect_scan(&db).await;
        assert_eq!(
            rows,
            vec![
                ("A".to_owned(), 9),
                ("B".to_owned(), 1),
                ("B".to_owned(), 3),
            ]
        );
    }

    #[tokio::test]
    async fn scan_breaks_timestamp_ties_by_insertion_order() {
        let db = test_db().await;
        db.insert_events(&[
            event("2024-01-01T00:00:00", Some("A"), 1),
            event("2024-01-01T00:00:00", Some("A"), 2),
            event("2024-01-01T00:00:00", Some("A"), 3),
        ])
        .await
        .unwrap();

        let quantities: Vec<i64> = collect_scan(&db).await.into_iter().map(|(_, q)| q).collect();
        assert_eq!(quantities, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn null_sku_sorts_first_and_reads_as_empty() {
        let db = test_db().await;
        db.insert_events(&[
            event("2024-01-01T00:00:00", Some("A"), 5),
            event("2024-01-01T00:00:00", None, 2),
        ])
        .await
        .unwrap();

        let rows = collect_scan(&db).await;
        assert_eq!(rows, vec![(String::new(), 2), ("A".to_owned(), 5)]);
    }

    #[tokio::test]
    async fn first_seen_is_insertion_order_not_minimum() {
        let db = test_db().await;
        db.insert_events(&[
            event("2024-06-01T00:00:00", Some("A"), 5),
            event("2024-01-01T00:00:00", Some("A"), 5),
        ])
        .await
        .unwrap();

        let first = db.first_seen("A").await.unwrap();
        assert_eq!(first.as_deref(), Some("2024-06-01T00:00:00"));
    }

    #[tokio::test]
    async fn first_seen_missing_sku_is_none() {
        let db = test_db().await;
        assert_eq!(db.first_seen("ghost").await.unwrap(), None);
    }
}
