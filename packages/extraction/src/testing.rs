//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the extraction library
//! without making real LLM calls.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use crate::error::GenerationResult;
use crate::traits::generator::{StructuredPrompt, TextGenerator};

/// Payload returned once all scripted responses are used up.
pub const EMPTY_PAYLOAD: &str = r#"{"action_items": []}"#;

/// A mock text generator for testing.
///
/// Replays scripted responses in order, then keeps answering with a fallback
/// payload. Every prompt it receives is recorded. Clones share state, so a
/// test can keep one handle for assertions and give another to the code under
/// test.
#[derive(Clone)]
pub struct MockGenerator {
    /// Scripted responses, consumed front to back
    responses: Arc<RwLock<VecDeque<GenerationResult<String>>>>,

    /// Response used when the script is exhausted
    fallback: Arc<RwLock<GenerationResult<String>>>,

    /// Call tracking for assertions
    prompts: Arc<RwLock<Vec<StructuredPrompt>>>,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self {
            responses: Arc::default(),
            fallback: Arc::new(RwLock::new(Ok(EMPTY_PAYLOAD.to_string()))),
            prompts: Arc::default(),
        }
    }
}

impl MockGenerator {
    /// Create a mock that answers every call with an empty item list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw payload.
    pub fn with_response(self, payload: impl Into<String>) -> Self {
        self.responses
            .write()
            .unwrap()
            .push_back(Ok(payload.into()));
        self
    }

    /// Queue a payload built from a list of items.
    pub fn with_items<I, S>(self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        let payload = serde_json::json!({ "action_items": items }).to_string();
        self.with_response(payload)
    }

    /// Queue a failure.
    pub fn with_error(self, error: crate::error::GenerationError) -> Self {
        self.responses.write().unwrap().push_back(Err(error));
        self
    }

    /// Answer every call (after the script) with this result.
    pub fn with_fallback(self, result: GenerationResult<String>) -> Self {
        *self.fallback.write().unwrap() = result;
        self
    }

    /// Number of calls made to this mock.
    pub fn call_count(&self) -> usize {
        self.prompts.read().unwrap().len()
    }

    /// All prompts received, in call order.
    pub fn prompts(&self) -> Vec<StructuredPrompt> {
        self.prompts.read().unwrap().clone()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.prompts.write().unwrap().clear();
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &StructuredPrompt) -> GenerationResult<String> {
        self.prompts.write().unwrap().push(prompt.clone());

        let scripted = self.responses.write().unwrap().pop_front();
        match scripted {
            Some(result) => result,
            None => self.fallback.read().unwrap().clone(),
        }
    }
}
