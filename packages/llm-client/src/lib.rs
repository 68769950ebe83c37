//! Pure chat-completion REST client
//!
//! A small client for text-generation services with no domain-specific logic.
//! Speaks either the Ollama native API or the OpenAI-compatible API and always
//! constrains the response with a JSON schema at the request level.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm_client::LlmClient;
//!
//! let client = LlmClient::ollama("llama3.1:8b");
//!
//! let json = client
//!     .structured_output(system_prompt, user_prompt, schema)
//!     .await?;
//! ```
//!
//! OpenAI strict mode needs a tightened schema; see
//! [`schema::fix_object_schemas`].

pub mod error;
pub mod schema;
pub mod types;

pub use error::{LlmError, Result};
pub use schema::fix_object_schemas;
pub use types::*;

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

/// Default transport timeout for a single generation request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Chat-completion client.
#[derive(Clone)]
pub struct LlmClient {
    http_client: Client,
    provider: Provider,
    base_url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl LlmClient {
    /// Create a client for the given provider using its default base URL.
    pub fn new(provider: Provider, model: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            provider,
            base_url: provider.default_base_url().to_string(),
            model: model.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client for a local Ollama server.
    pub fn ollama(model: impl Into<String>) -> Self {
        Self::new(Provider::Ollama, model)
    }

    /// Create a client for the OpenAI API.
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new(Provider::OpenAI, model).with_api_key(api_key)
    }

    /// Set a custom base URL (remote Ollama, Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the bearer token sent with every request.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Structured output with a JSON schema.
    ///
    /// Returns the raw content of the assistant message; parsing it is the
    /// caller's concern.
    pub async fn structured_output(
        &self,
        system_prompt: impl Into<String>,
        user_prompt: impl Into<String>,
        schema: serde_json::Value,
    ) -> Result<String> {
        let start = std::time::Instant::now();

        let content = match self.provider {
            Provider::Ollama => {
                let request =
                    OllamaChatRequest::new(&self.model, system_prompt, user_prompt, schema);
                self.ollama_chat(&request).await?
            }
            Provider::OpenAI => {
                let request = StructuredRequest::new(
                    &self.model,
                    system_prompt,
                    user_prompt,
                    "structured_response",
                    schema,
                );
                self.openai_chat(&request).await?
            }
        };

        debug!(
            provider = %self.provider,
            model = %self.model,
            duration_ms = start.elapsed().as_millis(),
            response = truncate_to_char_boundary(&content, 200),
            "Structured output completed"
        );

        Ok(content)
    }

    async fn ollama_chat(&self, request: &OllamaChatRequest) -> Result<String> {
        let response = self
            .http_client
            .post(format!("{}/api/chat", self.base_url))
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Ollama request failed");
                LlmError::from_reqwest(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Ollama API error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        chat_response
            .message
            .map(|m| m.content)
            .ok_or_else(|| LlmError::Parse("No message in Ollama response".into()))
    }

    async fn openai_chat(&self, request: &StructuredRequest) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| LlmError::Config("OpenAI provider requires an API key".into()))?;

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(self.timeout)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "OpenAI request failed");
                LlmError::from_reqwest(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "OpenAI API error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let chat_response: ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| LlmError::Parse("No response content from OpenAI".into()))
    }
}
