//! LLM client abstraction for the recommendation call.
//!
//! The recommender depends on a callable that turns a system + user prompt into assistant
//! text. [`ChatOpenAI`] talks to the OpenAI Chat Completions API; [`MockLlm`] returns a fixed
//! reply for tests.

mod mock;
mod openai;

pub use mock::MockLlm;
pub use openai::{ChatOpenAI, DEFAULT_MODEL};

use async_trait::async_trait;

use crate::error::LlmError;

/// One completion call: prompts plus sampling parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub user: String,
    /// Sampling temperature (0–2).
    pub temperature: f32,
    /// Upper bound on completion tokens.
    pub max_tokens: u32,
    /// Ask the API for a JSON object reply (`response_format = json_object`).
    pub json_object: bool,
}

/// LLM client: given prompts, returns the assistant's text.
///
/// Implementations: [`ChatOpenAI`] (real API), [`MockLlm`] (fixed reply).
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Run one completion and return the first choice's content.
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}
