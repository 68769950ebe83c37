use extraction::ExtractionSource;
use serde::{Deserialize, Serialize};

/// Id and text of a freshly stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ActionItemSummary {
    pub id: i64,
    pub text: String,
}

/// Result of an extraction request.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractResponse {
    pub note_id: Option<i64>,
    pub items: Vec<ActionItemSummary>,
    pub source: ExtractionSource,
    /// Why the LLM stage produced nothing, when it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_error: Option<String>,
}
