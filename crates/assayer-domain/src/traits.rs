//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Implementations live in other crates (`assayer-llm`).

/// Trait for LLM provider operations.
///
/// The curation stage is generic over this trait so tests can substitute a
/// deterministic mock. The model's response is untrusted external input; it
/// is the caller's job to validate it before use.
pub trait LlmProvider {
    /// Error type for LLM operations
    type Error;

    /// Generate a text completion for the given prompt.
    ///
    /// This is a blocking call; async providers wrap themselves behind it.
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
