//! LLM extraction stage - one structured-output call, parsed leniently.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::LlmFailure;
use crate::pipeline::prompts::build_extract_prompt;
use crate::traits::generator::TextGenerator;

/// Result of the LLM stage.
///
/// `Failed` carries the reason so callers can report it; for extraction
/// purposes it means the same as an empty `Items`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmOutcome {
    /// The service answered with a well-formed payload (possibly empty).
    Items(Vec<String>),

    /// The call or the payload was unusable.
    Failed(LlmFailure),
}

impl LlmOutcome {
    /// Items found, empty on failure.
    pub fn items(&self) -> &[String] {
        match self {
            LlmOutcome::Items(items) => items,
            LlmOutcome::Failed(_) => &[],
        }
    }

    pub fn into_items(self) -> Vec<String> {
        match self {
            LlmOutcome::Items(items) => items,
            LlmOutcome::Failed(_) => Vec::new(),
        }
    }

    pub fn failure(&self) -> Option<&LlmFailure> {
        match self {
            LlmOutcome::Items(_) => None,
            LlmOutcome::Failed(failure) => Some(failure),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LlmOutcome::Failed(_))
    }
}

/// Extracts action items by asking a text-generation service.
///
/// No deduplication happens here: beyond trimming, the service output is
/// returned as-is.
pub struct LlmExtractor<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> LlmExtractor<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Run the LLM stage.
    ///
    /// Blank text short-circuits to an empty result without contacting the
    /// service. Every other failure is converted to [`LlmOutcome::Failed`].
    pub async fn extract(&self, text: &str) -> LlmOutcome {
        if text.trim().is_empty() {
            return LlmOutcome::Items(Vec::new());
        }

        let prompt = build_extract_prompt(text);

        let parsed = match self.generator.generate(&prompt).await {
            Ok(payload) => parse_action_items(&payload),
            Err(e) => Err(LlmFailure::from(e)),
        };

        match parsed {
            Ok(items) => {
                debug!(items = items.len(), "LLM extraction completed");
                LlmOutcome::Items(items)
            }
            Err(failure) => {
                warn!(error = %failure, "LLM extraction failed");
                LlmOutcome::Failed(failure)
            }
        }
    }

    /// Run the LLM stage, treating any failure as "no items".
    pub async fn extract_items(&self, text: &str) -> Vec<String> {
        self.extract(text).await.into_items()
    }
}

/// Parse a `{ "action_items": [...] }` payload.
///
/// String entries are trimmed; empty strings and non-string entries are
/// dropped. Anything that is not an object with an `action_items` array is a
/// schema violation.
pub fn parse_action_items(payload: &str) -> Result<Vec<String>, LlmFailure> {
    let value: Value = serde_json::from_str(strip_code_fences(payload))
        .map_err(|e| LlmFailure::MalformedResponse(e.to_string()))?;

    let object = value
        .as_object()
        .ok_or_else(|| LlmFailure::SchemaViolation("expected a JSON object".into()))?;

    let entries = object
        .get("action_items")
        .ok_or_else(|| {
            LlmFailure::SchemaViolation("missing required field `action_items`".into())
        })?
        .as_array()
        .ok_or_else(|| LlmFailure::SchemaViolation("`action_items` is not an array".into()))?;

    Ok(entries
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}

/// Some models wrap JSON in markdown fences even under a schema constraint.
fn strip_code_fences(payload: &str) -> &str {
    payload
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}
