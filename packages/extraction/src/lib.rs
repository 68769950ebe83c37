//! Action Item Extraction Library
//!
//! Turns free-form meeting notes into an ordered, deduplicated list of
//! action items.
//!
//! # Design
//!
//! Two stages composed by a fallback policy:
//!
//! - **Heuristics** - deterministic, rule-based: bullets, numbering,
//!   checkboxes, keyword prefixes, and imperative sentences as a last resort
//! - **LLM** - one schema-constrained call to a text-generation service,
//!   invoked only when the heuristics find nothing
//!
//! A failing LLM never fails the caller: the stage reports
//! [`LlmFailure`] inside the result and contributes no items.
//!
//! # Usage
//!
//! ```rust,ignore
//! use extraction::{ActionItemExtractor, Retrying};
//! use llm_client::LlmClient;
//!
//! let generator = Retrying::new(LlmClient::ollama("llama3.1:8b"));
//! let extractor = ActionItemExtractor::new(generator);
//!
//! let extraction = extractor.extract("- [ ] Send the email").await;
//! assert_eq!(extraction.items, vec!["Send the email"]);
//! ```
//!
//! # Modules
//!
//! - [`heuristics`] - Line classifier, imperative classifier, deduplicator
//! - [`pipeline`] - LLM stage and fallback orchestration
//! - [`traits`] - The `TextGenerator` seam
//! - [`ai`] - Generator implementations and the retry decorator
//! - [`testing`] - Mock implementations for testing

pub mod ai;
pub mod error;
pub mod heuristics;
pub mod pipeline;
pub mod testing;
pub mod traits;

// Re-export core types at crate root
pub use error::{GenerationError, GenerationResult, LlmFailure};
pub use traits::generator::{StructuredPrompt, TextGenerator};

pub use heuristics::{dedupe, extract_heuristic, is_action_line, looks_imperative};

pub use pipeline::{
    action_items_schema, parse_action_items, ActionItemExtractor, ActionItemsPayload, Extraction,
    ExtractionSource, LlmExtractor, LlmOutcome,
};

pub use ai::{ErrorCategory, RetryPolicy, Retrying};

// Re-export testing utilities
pub use testing::MockGenerator;
