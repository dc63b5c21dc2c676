//! Configuration for the Curator

use serde::{Deserialize, Serialize};

/// Configuration for the Curator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuratorConfig {
    /// Maximum prompt length in characters.
    ///
    /// Curation sends exactly one request per file; a document whose
    /// serialized tables would exceed this budget is rejected instead of
    /// being chunked.
    pub max_prompt_chars: usize,
}

impl CuratorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_prompt_chars == 0 {
            return Err("max_prompt_chars must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            max_prompt_chars: 60_000,
        }
    }
}
