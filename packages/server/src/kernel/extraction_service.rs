//! Extraction service wiring for the server.
//!
//! Builds the configured text generator, wraps it in the retry decorator and
//! hands routes a shared, type-erased `ActionItemExtractor`.

use anyhow::{Context, Result};
use extraction::{ActionItemExtractor, RetryPolicy, Retrying, TextGenerator};
use llm_client::{LlmClient, Provider};
use std::sync::Arc;

use crate::config::LlmConfig;

/// Any text generator, boxed so tests can swap in a mock.
pub type DynGenerator = Box<dyn TextGenerator>;

/// Extractor shared by all request handlers.
pub type SharedExtractor = Arc<ActionItemExtractor<DynGenerator>>;

/// Build the configured LLM client, wrapped with retries.
pub fn create_generator(config: &LlmConfig) -> Result<DynGenerator> {
    let mut client = match config.provider {
        Provider::Ollama => LlmClient::ollama(config.model.clone()),
        Provider::OpenAI => {
            let api_key = config
                .api_key
                .clone()
                .context("OPENAI_API_KEY is required for the openai provider")?;
            LlmClient::openai(api_key, config.model.clone())
        }
    };

    if let Some(base_url) = &config.base_url {
        client = client.with_base_url(base_url.clone());
    }
    client = client.with_timeout(config.timeout);

    tracing::info!(
        provider = %client.provider(),
        model = client.model(),
        base_url = client.base_url(),
        max_attempts = config.max_attempts,
        "LLM client configured"
    );

    let retrying = Retrying::new(client)
        .with_policy(RetryPolicy::with_max_attempts(config.max_attempts));

    Ok(Box::new(retrying))
}

/// Build the shared extractor from configuration.
pub fn create_extraction_service(config: &LlmConfig) -> Result<SharedExtractor> {
    let generator = create_generator(config)?;
    Ok(Arc::new(ActionItemExtractor::new(generator)))
}

/// Wrap an existing generator (tests, alternative backends).
pub fn extraction_service_from<G: TextGenerator + 'static>(generator: G) -> SharedExtractor {
    let generator: DynGenerator = Box::new(generator);
    Arc::new(ActionItemExtractor::new(generator))
}
