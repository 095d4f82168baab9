//! Error types for the recommendation pipeline.
//!
//! [`LlmError`] comes from an [`LlmClient`](crate::llm::LlmClient) call; [`RecommendError`] is what
//! [`Recommender::recommend`](crate::Recommender::recommend) returns and what the server maps to HTTP
//! statuses. [`MarketError`] is only ever seen by the market filter, which fails open on it.

use thiserror::Error;

/// Error from one completion call against the LLM API.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key configured for the client.
    #[error("missing API key")]
    MissingApiKey,

    /// Request could not be built (bad model name, invalid parameters).
    #[error("request build failed: {0}")]
    Build(String),

    /// API returned an error status or was unreachable.
    #[error("api error: {0}")]
    Api(String),
}

/// Error from classifying a record for the market filter.
#[derive(Debug, Error)]
#[error("market classification failed: {0}")]
pub struct MarketError(pub String);

/// Error from one recommendation request.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Cigar name missing, not a string, or blank.
    #[error("Invalid input")]
    InvalidInput,

    /// Server has no LLM client because no API key is configured.
    #[error("Server missing API key")]
    MissingApiKey,

    /// Completion API failed.
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// Anything else.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl From<LlmError> for RecommendError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::MissingApiKey => RecommendError::MissingApiKey,
            LlmError::Build(msg) => RecommendError::Unexpected(msg),
            other => RecommendError::Upstream(other.to_string()),
        }
    }
}
