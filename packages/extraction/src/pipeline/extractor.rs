//! Fallback orchestration between the heuristic and LLM stages.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::LlmFailure;
use crate::heuristics::extract_heuristic;
use crate::pipeline::extract::{LlmExtractor, LlmOutcome};
use crate::traits::generator::TextGenerator;

/// Which stage produced the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionSource {
    /// Rule-based extraction found at least one item.
    Heuristic,
    /// The LLM stage ran (its result may still be empty).
    Llm,
    /// Nothing ran: the input was blank.
    None,
}

/// Items plus how they were obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Ordered action items.
    pub items: Vec<String>,

    /// Stage whose output was returned.
    pub source: ExtractionSource,

    /// Set when the LLM stage ran and failed.
    pub llm_failure: Option<LlmFailure>,
}

impl Extraction {
    fn heuristic(items: Vec<String>) -> Self {
        Self {
            items,
            source: ExtractionSource::Heuristic,
            llm_failure: None,
        }
    }

    fn blank() -> Self {
        Self {
            items: Vec::new(),
            source: ExtractionSource::None,
            llm_failure: None,
        }
    }

    fn from_llm(outcome: LlmOutcome) -> Self {
        match outcome {
            LlmOutcome::Items(items) => Self {
                items,
                source: ExtractionSource::Llm,
                llm_failure: None,
            },
            LlmOutcome::Failed(failure) => Self {
                items: Vec::new(),
                source: ExtractionSource::Llm,
                llm_failure: Some(failure),
            },
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// Action item extractor: heuristics first, LLM only when they find nothing.
///
/// # Example
///
/// ```rust,ignore
/// use extraction::{ActionItemExtractor, testing::MockGenerator};
///
/// let extractor = ActionItemExtractor::new(MockGenerator::new());
/// let extraction = extractor.extract("- [ ] Send the email").await;
/// assert_eq!(extraction.items, vec!["Send the email"]);
/// ```
pub struct ActionItemExtractor<G: TextGenerator> {
    llm: LlmExtractor<G>,
}

impl<G: TextGenerator> ActionItemExtractor<G> {
    pub fn new(generator: G) -> Self {
        Self {
            llm: LlmExtractor::new(generator),
        }
    }

    /// The LLM stage, for callers that need it directly.
    pub fn llm(&self) -> &LlmExtractor<G> {
        &self.llm
    }

    /// Heuristic stage, falling back to the LLM stage on an empty result.
    ///
    /// When the heuristic stage finds anything its result is returned
    /// unchanged and the LLM is never contacted. Otherwise the LLM stage is
    /// invoked exactly once and its result returned as-is, even when empty.
    pub async fn extract(&self, text: &str) -> Extraction {
        let items = extract_heuristic(text);
        if !items.is_empty() {
            debug!(items = items.len(), "Heuristic extraction matched");
            return Extraction::heuristic(items);
        }

        if text.trim().is_empty() {
            return Extraction::blank();
        }

        debug!("Heuristic extraction found nothing, falling back to LLM");
        self.run_llm(text).await
    }

    /// LLM stage only, bypassing the heuristics.
    pub async fn extract_llm_only(&self, text: &str) -> Extraction {
        if text.trim().is_empty() {
            return Extraction::blank();
        }
        self.run_llm(text).await
    }

    /// Dispatch on the caller's preference.
    pub async fn extract_with(&self, text: &str, prefer_heuristic: bool) -> Extraction {
        if prefer_heuristic {
            self.extract(text).await
        } else {
            self.extract_llm_only(text).await
        }
    }

    async fn run_llm(&self, text: &str) -> Extraction {
        let extraction = Extraction::from_llm(self.llm.extract(text).await);

        match &extraction.llm_failure {
            Some(failure) => debug!(error = %failure, "LLM stage failed, returning no items"),
            None => info!(items = extraction.len(), "LLM extraction completed"),
        }

        extraction
    }
}
