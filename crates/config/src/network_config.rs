//! Search endpoint and HTTP configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Search endpoint and HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkConfig {
    /// Base URL of the search service; the artist-search path is appended
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Retry attempts for transient failures (0 disables retries)
    pub max_retries: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.tunescout.app".to_string(),
            timeout_secs: 5,
            max_retries: 2,
        }
    }
}

impl ConfigSection for NetworkConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let results = vec![
            Validator::not_empty(&self.base_url, "network.base_url"),
            Validator::in_range(self.timeout_secs, 1, 120, "network.timeout_secs"),
            Validator::in_range(self.max_retries, 0, 10, "network.max_retries"),
        ];

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.base_url = other.base_url;
        self.timeout_secs = other.timeout_secs;
        self.max_retries = other.max_retries;
    }

    fn section_name(&self) -> &'static str {
        "network"
    }
}
