//! Extraction pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - The heuristic stage (see [`crate::heuristics`])
//! - The LLM stage: prompt, schema-constrained call, lenient parsing
//! - The fallback policy deciding which stage's output to trust

pub mod extract;
pub mod extractor;
pub mod prompts;

pub use extract::{parse_action_items, LlmExtractor, LlmOutcome};
pub use extractor::{ActionItemExtractor, Extraction, ExtractionSource};
pub use prompts::{
    action_items_schema, build_extract_prompt, format_extract_prompt, ActionItemsPayload,
    EXTRACT_PROMPT, SYSTEM_PROMPT,
};
