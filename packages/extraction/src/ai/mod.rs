//! Text generator implementations and decorators.
//!
//! This module provides a reference implementation of the `TextGenerator`
//! trait on top of `llm-client` (behind the `llm` feature) and a retrying
//! wrapper usable with any generator.

#[cfg(feature = "llm")]
mod llm_client;

mod retrying;

pub use retrying::{classify_error, classify_message, ErrorCategory, RetryPolicy, Retrying};
