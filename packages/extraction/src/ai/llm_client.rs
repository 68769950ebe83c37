//! `TextGenerator` backed by the `llm-client` crate.
//!
//! # Example
//!
//! ```rust,ignore
//! use extraction::ActionItemExtractor;
//! use llm_client::LlmClient;
//!
//! let extractor = ActionItemExtractor::new(LlmClient::ollama("llama3.1:8b"));
//! let extraction = extractor.extract(notes).await;
//! ```

use async_trait::async_trait;
use llm_client::{schema::fix_object_schemas, LlmClient, LlmError, Provider};

use crate::error::{GenerationError, GenerationResult};
use crate::traits::generator::{StructuredPrompt, TextGenerator};

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Config(msg) => GenerationError::Config(msg),
            LlmError::Network(msg) => GenerationError::Unavailable(msg),
            LlmError::Timeout(msg) => GenerationError::Timeout(msg),
            LlmError::Api { status, message } => GenerationError::Http { status, message },
            LlmError::Parse(msg) => GenerationError::InvalidResponse(msg),
        }
    }
}

#[async_trait]
impl TextGenerator for LlmClient {
    async fn generate(&self, prompt: &StructuredPrompt) -> GenerationResult<String> {
        let mut schema = prompt.output_schema.clone();
        if self.provider() == Provider::OpenAI {
            fix_object_schemas(&mut schema);
        }

        self.structured_output(
            prompt.system_instruction.as_str(),
            prompt.user_message.as_str(),
            schema,
        )
        .await
        .map_err(GenerationError::from)
    }
}
