//! Database migration runner.
//!
//! Embeds the SQL migration file at compile time and executes it on database
//! open. All statements use `IF NOT EXISTS` for idempotent re-running.

use crate::FluxDb;
use crate::error::StoreError;

/// Initial schema: the append-only `products` event table, the `company`
/// catalog table, and a sku index on each.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl FluxDb {
    /// Run all embedded migrations in sequence.
    pub(crate) async fn run_migrations(&self) -> Result<(), StoreError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| StoreError::Migration(format!("001_initial: {e}")))?;
        Ok(())
    }
}
