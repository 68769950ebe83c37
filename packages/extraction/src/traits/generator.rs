//! Text-generation trait for the LLM extraction stage.
//!
//! The trait is the boundary to the external chat-completion service:
//! one system instruction, one user message and a JSON schema in, the raw
//! JSON payload out. Transport, authentication and model hosting live in
//! the implementation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::GenerationResult;

/// A single schema-constrained generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredPrompt {
    /// Establishes the assistant's role.
    pub system_instruction: String,

    /// The user turn, embedding the source text.
    pub user_message: String,

    /// JSON schema the response must conform to. Implementations must send
    /// it to the service as a request-level constraint, not as prose.
    pub output_schema: serde_json::Value,
}

/// Text-generation service with structured output.
///
/// Implementations wrap specific providers (Ollama, OpenAI, ...) and
/// perform exactly one outbound request per call. Retries belong to a
/// wrapping decorator such as [`Retrying`](crate::ai::Retrying).
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a JSON payload constrained by `prompt.output_schema`.
    async fn generate(&self, prompt: &StructuredPrompt) -> GenerationResult<String>;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, prompt: &StructuredPrompt) -> GenerationResult<String> {
        (**self).generate(prompt).await
    }
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Box<T> {
    async fn generate(&self, prompt: &StructuredPrompt) -> GenerationResult<String> {
        (**self).generate(prompt).await
    }
}
