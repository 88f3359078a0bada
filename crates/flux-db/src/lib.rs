//! # flux-db
//!
//! libSQL persistence for stockflux: the append-only `products` event table,
//! the optional `company` catalog table, and the sorted scan that feeds the
//! change-sequence fold.
//!
//! Uses the `libsql` crate (C `SQLite` fork): local files and `:memory:`,
//! async API, idempotent embedded migrations on open.

pub mod catalog;
pub mod error;
mod migrations;
pub mod stock;

#[cfg(test)]
mod test_support;

use error::StoreError;
use libsql::Builder;

/// Database handle for all stockflux storage operations.
///
/// Wraps a libSQL database and connection. Query methods live in the
/// [`stock`] and [`catalog`] modules as `impl FluxDb` blocks.
pub struct FluxDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl FluxDb {
    /// Open a local database at the given path (`:memory:` is accepted).
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or migrations
    /// fail.
    pub async fn open_local(path: &str) -> Result<Self, StoreError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| StoreError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let flux_db = Self { db, conn };
        flux_db.run_migrations().await?;
        Ok(flux_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}
