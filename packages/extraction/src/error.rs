//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.
//!
//! Nothing here is ever returned from the extraction entry points: the
//! heuristic stage is total, and LLM-stage failures are reported as
//! [`LlmFailure`] values inside a successful result.

use thiserror::Error;

/// Errors raised by a [`TextGenerator`](crate::traits::generator::TextGenerator)
/// implementation when talking to the external service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// Service unreachable (connection refused, DNS, TLS)
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// Request exceeded the transport timeout
    #[error("timed out: {0}")]
    Timeout(String),

    /// Service answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response envelope could not be read
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Generator is misconfigured (missing key, unknown model)
    #[error("config error: {0}")]
    Config(String),
}

impl GenerationError {
    /// HTTP status, when the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerationError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Why the LLM extraction stage produced no items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LlmFailure {
    /// The service could not be reached or rejected the request
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The request timed out
    #[error("timeout: {0}")]
    Timeout(String),

    /// The payload was not valid JSON
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Valid JSON that does not match `{ action_items: [string] }`
    #[error("schema violation: {0}")]
    SchemaViolation(String),
}

impl From<GenerationError> for LlmFailure {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Timeout(msg) => LlmFailure::Timeout(msg),
            GenerationError::InvalidResponse(msg) => LlmFailure::MalformedResponse(msg),
            other => LlmFailure::ServiceUnavailable(other.to_string()),
        }
    }
}

/// Result type alias for generator operations.
pub type GenerationResult<T> = std::result::Result<T, GenerationError>;
