//! TuneScout configuration system
//!
//! Each feature defines its config as a section implementing `ConfigSection`.
//! Invalid values degrade to warnings on load so users can fix a config file
//! without losing it; saves are atomic so the file is never left corrupted.

mod error;
mod network_config;
mod persistence;
mod search_config;
mod validation;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use network_config::NetworkConfig;
pub use persistence::{default_config_path, ConfigPersistence};
pub use search_config::SearchConfig;
pub use validation::{ConfigSection, Validator};

use serde::{Deserialize, Serialize};

/// Current config file format version
pub const CONFIG_VERSION: u32 = 1;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Config file format version
    pub version: u32,

    /// Search behavior (debounce, result limits)
    pub search: SearchConfig,

    /// Search endpoint and HTTP settings
    pub network: NetworkConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.search.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.network.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges this config with another, preferring values from `other`
    pub fn merge(&mut self, other: Config) {
        self.search.merge(other.search);
        self.network.merge(other.network);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            search: SearchConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}
