//! Topic demand configuration.

use crate::error::QuizResult;
use crate::types::Topic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Requested question totals per topic, as supplied by the deployment.
///
/// File format: `{"topics": {"math": 5, "english": 5}}`. The default
/// matches the service's historical fixed demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandConfig {
    pub topics: BTreeMap<Topic, i64>,
}

impl Default for DemandConfig {
    fn default() -> Self {
        let mut topics = BTreeMap::new();
        topics.insert("math".to_string(), 5);
        topics.insert("english".to_string(), 5);
        Self { topics }
    }
}

impl DemandConfig {
    pub fn load(path: impl AsRef<Path>) -> QuizResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&raw)?;
        Ok(config)
    }
}
