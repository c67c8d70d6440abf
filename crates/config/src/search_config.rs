//! Search behavior configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

/// Default quiet period before a typed query is executed
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Search behavior settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period in milliseconds before a typed query is executed.
    /// Keystrokes arriving within this window restart it.
    pub debounce_ms: u64,

    /// Maximum number of results requested per search
    pub result_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            result_limit: 20,
        }
    }
}

impl ConfigSection for SearchConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let results = vec![
            Validator::in_range(self.debounce_ms, 0, 10_000, "search.debounce_ms"),
            Validator::in_range(self.result_limit, 1, 100, "search.result_limit"),
        ];

        Validator::collect_errors(results)
    }

    fn merge(&mut self, other: Self) {
        self.debounce_ms = other.debounce_ms;
        self.result_limit = other.result_limit;
    }

    fn section_name(&self) -> &'static str {
        "search"
    }
}
