//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing API key; fatal at startup, before any file is processed
    #[error("GEMINI_API_KEY is not set; export it before running")]
    Credential,

    /// Input directory does not exist
    #[error("Input directory does not exist: {0}")]
    MissingInputDir(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The built-in smoke test did not pass
    #[error("Smoke test failed: {0}")]
    VerifyFailed(String),
}
