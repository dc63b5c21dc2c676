//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use assayer_curator::CuratorConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable holding the LLM API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// CLI configuration, persisted as TOML under `~/.assayer/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Presentation settings
    #[serde(default)]
    pub settings: Settings,

    /// LLM provider settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Curation settings
    #[serde(default)]
    pub curator: CuratorConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format for curated documents
    #[serde(default)]
    pub format: OutputFormat,
}

/// LLM provider settings.
///
/// The API key itself never lives in the config file; it is resolved from
/// the environment at startup and injected into the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Model name sent to the provider
    #[serde(default = "default_model")]
    pub model: String,

    /// Endpoint override (test servers, proxies); the public API when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text tables
    #[default]
    Text,
    /// JSON format
    Json,
    /// Quiet (minimal) format
    Quiet,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::default(),
        }
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            model: default_model(),
            endpoint: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    assayer_llm::gemini::DEFAULT_MODEL.to_string()
}

impl Config {
    /// The configuration directory (`~/.assayer`).
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".assayer"))
    }

    /// The configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from file or fall back to defaults.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }
}

/// Resolve the API key from the environment.
///
/// Both the batch and interactive entry points call this before touching any
/// file; a missing key halts the run up front.
pub fn require_api_key() -> Result<String> {
    match std::env::var(API_KEY_ENV) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(CliError::Credential),
    }
}
