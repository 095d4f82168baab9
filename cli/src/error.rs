use humidor::RecommendError;
use thiserror::Error;

/// Failure of one search, local or remote.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// Non-2xx answer; `message` is the server's `error` field when it sent one.
    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },
    #[error(transparent)]
    Recommend(#[from] RecommendError),
}
