pub mod defaults;
mod doid_config;
mod observability_config;

pub use doid_config::{AdenoSquamousMapping, DoidManualConfig, DoidRelationship};
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, EligResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EligConfig {
    pub doid: DoidManualConfig,
    pub observability: ObservabilityConfig,
}

impl EligConfig {
    /// Parse and validate a TOML document. Missing sections and fields keep their defaults.
    pub fn from_toml(source: &str) -> EligResult<Self> {
        let config: EligConfig = toml::from_str(source).map_err(ConfigError::from)?;
        config.doid.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> EligResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::SerializeFailed {
                message: e.to_string(),
            }
            .into()
        })
    }
}
