//! LLM prompts for action item extraction.

use schemars::JsonSchema;
use serde::Deserialize;

use crate::traits::generator::StructuredPrompt;

/// System instruction establishing the extractor role.
pub const SYSTEM_PROMPT: &str = "You are a task management assistant. Extract a list of \
actionable items, tasks, or commitments from the provided text. Return ONLY a JSON object.";

/// User message template; `{text}` is replaced with the source text.
pub const EXTRACT_PROMPT: &str = "Extract action items from this text:\n\n{text}";

// Shape the service must answer with. Only used to derive the request
// schema; responses go through `parse_action_items`. Plain comments here:
// schemars copies doc comments into the schema as `description`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ActionItemsPayload {
    pub action_items: Vec<String>,
}

/// JSON schema for [`ActionItemsPayload`]:
/// `{"type":"object","properties":{"action_items":{"type":"array","items":{"type":"string"}}},"required":["action_items"]}`
pub fn action_items_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(ActionItemsPayload);
    let mut value = serde_json::to_value(schema).unwrap_or_default();
    if let serde_json::Value::Object(map) = &mut value {
        map.remove("$schema");
        map.remove("title");
        map.remove("definitions");
        map.remove("description");
    }
    value
}

/// Format the user message for a piece of text.
pub fn format_extract_prompt(text: &str) -> String {
    EXTRACT_PROMPT.replace("{text}", text)
}

/// Build the full structured request for a piece of text.
pub fn build_extract_prompt(text: &str) -> StructuredPrompt {
    StructuredPrompt {
        system_instruction: SYSTEM_PROMPT.to_string(),
        user_message: format_extract_prompt(text),
        output_schema: action_items_schema(),
    }
}
