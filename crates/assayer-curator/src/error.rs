//! Error types for the Curator

use thiserror::Error;

/// Errors that can occur during curation.
///
/// The caller treats both [`CuratorError::Service`] and
/// [`CuratorError::Schema`] the same way: log, skip the file, continue with
/// the rest of the batch.
#[derive(Error, Debug)]
pub enum CuratorError {
    /// The LLM call failed (network, auth, rate limit)
    #[error("LLM service error: {0}")]
    Service(String),

    /// The LLM response did not match the expected JSON shape
    #[error("Schema error: {0}")]
    Schema(String),

    /// Serialized tables exceed the single-prompt budget; curation never
    /// chunks, so the file is rejected up front
    #[error("Serialized input too large: {0} chars (max: {1})")]
    InputTooLarge(usize, usize),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CuratorError {
    fn from(e: serde_json::Error) -> Self {
        CuratorError::Schema(e.to_string())
    }
}
