//! Report output configuration.

use serde::{Deserialize, Serialize};

/// Default report directory, relative to the working directory.
fn default_dir() -> String {
    "reports".to_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportsConfig {
    /// Directory the report files are written into. Created if missing.
    #[serde(default = "default_dir")]
    pub dir: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ReportsConfig::default();
        assert_eq!(config.dir, "reports");
    }
}
