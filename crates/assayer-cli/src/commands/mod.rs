//! Command implementations.

mod analyze;
mod verify;

pub use analyze::execute_analyze;
pub use verify::execute_verify;

use crate::config::Config;
use assayer_curator::Curator;
use assayer_llm::GeminiProvider;
use assayer_pipeline::PipelineRunner;

/// Build the pipeline runner both front ends share.
///
/// The API key is resolved by the caller and injected here; nothing below
/// this point reads process environment.
pub(crate) fn build_runner(config: &Config, api_key: String) -> PipelineRunner<GeminiProvider> {
    let provider = match &config.llm.endpoint {
        Some(endpoint) => {
            GeminiProvider::with_endpoint(endpoint.as_str(), api_key, config.llm.model.as_str())
        }
        None => GeminiProvider::new(api_key, config.llm.model.as_str()),
    };

    let curator =
        Curator::new(provider, config.curator.clone()).with_model_name(config.llm.model.as_str());
    PipelineRunner::new(curator)
}
