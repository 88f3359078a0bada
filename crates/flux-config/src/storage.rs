//! Storage configuration.

use serde::{Deserialize, Serialize};

/// Default database file, relative to the working directory.
fn default_db_path() -> String {
    "data.db".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path of the `SQLite` database file. `:memory:` is accepted.
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = StorageConfig::default();
        assert_eq!(config.db_path, "data.db");
    }
}
