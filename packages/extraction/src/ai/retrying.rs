//! Retry decorator for text generators.
//!
//! Wraps any `TextGenerator` and retries failed calls with exponential
//! backoff. Which failures are worth retrying is decided by a pluggable
//! classification function.

use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

use crate::error::{GenerationError, GenerationResult};
use crate::traits::generator::{StructuredPrompt, TextGenerator};

/// Coarse failure category used for retry decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The service asked us to slow down (HTTP 429).
    RateLimited,
    /// The model or endpoint does not exist (HTTP 404).
    NotFound,
    /// The request timed out.
    Timeout,
    /// Anything else.
    Other,
}

impl ErrorCategory {
    /// Whether another attempt can succeed.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ErrorCategory::NotFound)
    }
}

/// Classify an error by its HTTP status, falling back to its message.
pub fn classify_error(err: &GenerationError) -> ErrorCategory {
    match err.status() {
        Some(429) => ErrorCategory::RateLimited,
        Some(404) => ErrorCategory::NotFound,
        _ if matches!(err, GenerationError::Timeout(_)) => ErrorCategory::Timeout,
        _ => classify_message(&err.to_string()),
    }
}

/// Classify an error message by well-known signatures.
pub fn classify_message(message: &str) -> ErrorCategory {
    let msg = message.to_lowercase();
    if msg.contains("429") || msg.contains("too many requests") {
        ErrorCategory::RateLimited
    } else if msg.contains("404") || msg.contains("not found") {
        ErrorCategory::NotFound
    } else if msg.contains("timeout") || msg.contains("timed out") {
        ErrorCategory::Timeout
    } else {
        ErrorCategory::Other
    }
}

/// Backoff policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub max_attempts: u32,

    /// Delay before the first retry; doubled for each subsequent one.
    pub base_delay: Duration,

    /// Upper bound for a single delay.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
        }
    }
}

impl RetryPolicy {
    /// Policy with the given attempt budget and default delays.
    pub fn with_max_attempts(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            ..Default::default()
        }
    }

    /// Delay before retry number `retry` (0-based).
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry);
        self.base_delay
            .checked_mul(factor)
            .unwrap_or(self.max_delay)
            .min(self.max_delay)
    }
}

type Classifier = fn(&GenerationError) -> ErrorCategory;

/// A generator wrapper that retries retryable failures.
///
/// The wrapped generator is called at most `policy.max_attempts` times; the
/// last error is returned unchanged.
pub struct Retrying<G: TextGenerator, C = Classifier> {
    inner: G,
    policy: RetryPolicy,
    classify: C,
}

impl<G: TextGenerator> Retrying<G> {
    /// Wrap a generator with the default policy and classifier.
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            policy: RetryPolicy::default(),
            classify: classify_error,
        }
    }
}

impl<G: TextGenerator, C> Retrying<G, C> {
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the classification function.
    pub fn with_classifier<F>(self, classify: F) -> Retrying<G, F>
    where
        F: Fn(&GenerationError) -> ErrorCategory + Send + Sync,
    {
        Retrying {
            inner: self.inner,
            policy: self.policy,
            classify,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn inner(&self) -> &G {
        &self.inner
    }
}

#[async_trait]
impl<G, C> TextGenerator for Retrying<G, C>
where
    G: TextGenerator,
    C: Fn(&GenerationError) -> ErrorCategory + Send + Sync,
{
    async fn generate(&self, prompt: &StructuredPrompt) -> GenerationResult<String> {
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            let err = match self.inner.generate(prompt).await {
                Ok(payload) => return Ok(payload),
                Err(err) => err,
            };

            let category = (self.classify)(&err);
            if !category.is_retryable() || attempt >= max_attempts {
                return Err(err);
            }

            let delay = self.policy.delay_for(attempt - 1);
            warn!(
                attempt,
                max_attempts,
                category = ?category,
                delay_ms = delay.as_millis() as u64,
                error = %err,
                "Text generation failed, retrying"
            );
            tokio::time::sleep(delay).await;
        }
    }
}
