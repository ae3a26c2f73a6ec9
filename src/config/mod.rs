//! Pipeline settings and order batches loaded from JSON.
//!
//! A batch file looks like:
//!
//! ```json
//! {
//!   "config": { "zone_threshold": 50 },
//!   "orders": [
//!     { "customer": "Ana", "postal_code": "X-080", "priorities": [3, 4, 6] }
//!   ]
//! }
//! ```

use crate::model::{Order, OrderCreate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading a batch.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The batch file could not be read.
    #[error("Failed to read batch file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The batch is not valid JSON for an [`OrderBatch`].
    #[error("Invalid batch JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Settings for one [`OrderPipeline`](crate::lifecycle::OrderPipeline) run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Orders must have a zone strictly above this to pass the filter.
    pub zone_threshold: i64,
}

/// A set of orders to process together with its settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBatch {
    #[serde(default)]
    pub config: PipelineConfig,
    pub orders: Vec<OrderCreate>,
}

impl OrderBatch {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let batch: Self = serde_json::from_str(json)?;
        debug!(orders = batch.orders.len(), config = ?batch.config, "Parsed order batch");
        Ok(batch)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        info!(path = %path.display(), "Loading order batch");
        Self::from_json_str(&json)
    }

    /// Builds the orders described by this batch.
    pub fn to_orders(&self) -> Vec<Order> {
        self.orders.iter().cloned().map(Order::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn config_defaults_when_absent() {
        let batch = OrderBatch::from_json_str(r#"{"orders": []}"#).unwrap();
        assert_eq!(batch.config, PipelineConfig::default());
        assert_eq!(batch.config.zone_threshold, 0);
    }

    #[test]
    fn batch_builds_orders() {
        let batch = OrderBatch::from_json_str(
            r#"{
                "config": {"zone_threshold": 50},
                "orders": [
                    {"customer": "Ana", "postal_code": "X-080", "priorities": [3, 4, 6]},
                    {"customer": "Bob", "postal_code": "X-080", "priorities": [9]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(batch.config.zone_threshold, 50);
        let orders = batch.to_orders();
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].customer(), "Ana");
        assert_eq!(orders[1].urgency(), 9);
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let result = OrderBatch::from_json_str(r#"{"orders": [{"customer": 1}]}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn batch_loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"orders": [{{"customer": "Ana", "postal_code": "X-080"}}]}}"#
        )
        .unwrap();

        let batch = OrderBatch::from_path(file.path()).unwrap();
        assert_eq!(batch.orders.len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = OrderBatch::from_path("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
