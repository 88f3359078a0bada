//! Shared test utilities for flux-db tests.

pub(crate) mod helpers {
    use flux_core::event::QuantityEvent;

    use crate::FluxDb;

    /// Create an in-memory database for tests.
    pub async fn test_db() -> FluxDb {
        FluxDb::open_local(":memory:").await.unwrap()
    }

    /// Shorthand event builder with a fixed owner id.
    pub fn event(timestamp: &str, sku: Option<&str>, qty: i64) -> QuantityEvent {
        QuantityEvent {
            timestamp: timestamp.to_owned(),
            owner_id: "7".to_owned(),
            sku: sku.map(str::to_owned),
            qty,
        }
    }
}
