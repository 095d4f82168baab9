//! Backend abstraction used by the `humidor search` command.
//!
//! - **LocalBackend**: run the recommender in-process (needs `OPENAI_API_KEY` locally).
//! - **RemoteBackend**: POST to a running `humidor serve` (default).
//!
//! Callers depend only on [`SearchBackend`], so switching local/remote is a one-line decision.

mod local;
mod remote;

pub use local::LocalBackend;
pub use remote::RemoteBackend;

use async_trait::async_trait;
use humidor::{RecommendRequest, RecommendResponse};

use crate::CliError;

#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// One recommendation request.
    async fn search(&self, request: &RecommendRequest) -> Result<RecommendResponse, CliError>;
}
