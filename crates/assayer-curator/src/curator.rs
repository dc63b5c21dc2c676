//! Core Curator implementation

use crate::config::CuratorConfig;
use crate::error::CuratorError;
use crate::parser::parse_curation_response;
use crate::prompt::PromptBuilder;
use assayer_domain::traits::LlmProvider;
use assayer_domain::{CuratedDocument, RawTable};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// The Curator converts raw extracted tables into a [`CuratedDocument`]
/// through a single LLM round trip per source file.
pub struct Curator<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: CuratorConfig,
    model_name: String,
}

impl<L> Curator<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Curator
    pub fn new(llm_provider: L, config: CuratorConfig) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
            model_name: "llm".to_string(),
        }
    }

    /// Record the model name used in log output
    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    /// Curate the tables extracted from one source document.
    ///
    /// Sends exactly one request; the returned document's `filename` is the
    /// `filename` argument byte-for-byte, regardless of what the model
    /// echoes back.
    ///
    /// # Errors
    ///
    /// - [`CuratorError::InputTooLarge`] when the serialized tables exceed
    ///   the single-prompt budget
    /// - [`CuratorError::Service`] when the LLM call fails
    /// - [`CuratorError::Schema`] when the response does not match the
    ///   expected JSON shape
    pub async fn curate(
        &self,
        tables: &[RawTable],
        filename: &str,
    ) -> Result<CuratedDocument, CuratorError> {
        let started = Instant::now();

        let prompt = PromptBuilder::new(filename).with_tables(tables).build();
        if prompt.len() > self.config.max_prompt_chars {
            return Err(CuratorError::InputTooLarge(
                prompt.len(),
                self.config.max_prompt_chars,
            ));
        }

        info!(
            "Curating '{}': {} table(s), prompt {} chars, model '{}'",
            filename,
            tables.len(),
            prompt.len(),
            self.model_name
        );

        let response = self.call_llm(&prompt).await?;
        debug!("LLM response length: {} chars", response.len());

        let payload = parse_curation_response(&response)?;

        info!(
            "Curated '{}': {} chemical entr{} in {} ms",
            filename,
            payload.chemicals.len(),
            if payload.chemicals.len() == 1 { "y" } else { "ies" },
            started.elapsed().as_millis()
        );

        Ok(CuratedDocument {
            filename: filename.to_string(),
            chemicals: payload.chemicals,
            summary: payload.summary,
        })
    }

    /// Call the LLM provider off the async runtime.
    async fn call_llm(&self, prompt: &str) -> Result<String, CuratorError> {
        let llm = Arc::clone(&self.llm_provider);
        let prompt = prompt.to_string();

        // The LlmProvider trait is blocking; keep the runtime responsive.
        tokio::task::spawn_blocking(move || {
            llm.generate(&prompt)
                .map_err(|e| CuratorError::Service(e.to_string()))
        })
        .await
        .map_err(|e| CuratorError::Service(format!("Task join error: {}", e)))?
    }
}
