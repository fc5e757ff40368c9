// Configuration type definitions

use serde::Deserialize;

use crate::props::Props;
use crate::registry::DEFAULT_NAME_PREFIX;

fn default_prefix() -> String {
    DEFAULT_NAME_PREFIX.to_string()
}

/// Registry configuration section
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistryConfig {
    /// Prefix for generated tooltip names
    #[serde(default = "default_prefix")]
    pub auto_name_prefix: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        RegistryConfig {
            auto_name_prefix: default_prefix(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
pub struct Config {
    /// Global default props applied at session start
    #[serde(default)]
    pub defaults: Props,
    #[serde(default)]
    pub registry: RegistryConfig,
}
