//! Recommender settings, read from the process environment.

use std::sync::Arc;

use crate::llm::{ChatOpenAI, LlmClient, DEFAULT_MODEL};

/// Completion and fallback settings for [`Recommender`](crate::Recommender).
#[derive(Clone, Debug, PartialEq)]
pub struct RecommenderConfig {
    /// OpenAI API key; `None` means requests fail with "missing API key".
    pub api_key: Option<String>,
    /// OpenAI-compatible base URL; `None` uses the public API.
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Serve the built-in list instead of failing when the API is down.
    pub fallback_on_upstream_error: bool,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.9,
            max_tokens: 700,
            fallback_on_upstream_error: false,
        }
    }
}

impl RecommenderConfig {
    /// Builds the config from environment variables, falling back to [`Default`] for unset
    /// or invalid values.
    ///
    /// - `OPENAI_API_KEY`
    /// - `OPENAI_BASE_URL` (or `OPENAI_API_BASE`)
    /// - `HUMIDOR_MODEL` (default `gpt-4o-mini`)
    /// - `HUMIDOR_TEMPERATURE` (default 0.9)
    /// - `HUMIDOR_MAX_TOKENS` (default 700)
    /// - `HUMIDOR_FALLBACK` (`1`, `true` or `yes` to enable)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Self::default();
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            api_key: non_empty("OPENAI_API_KEY"),
            base_url: non_empty("OPENAI_BASE_URL").or_else(|| non_empty("OPENAI_API_BASE")),
            model: non_empty("HUMIDOR_MODEL").unwrap_or(default.model),
            temperature: non_empty("HUMIDOR_TEMPERATURE")
                .and_then(|s| s.parse().ok())
                .filter(|t: &f32| (0.0..=2.0).contains(t))
                .unwrap_or(default.temperature),
            max_tokens: non_empty("HUMIDOR_MAX_TOKENS")
                .and_then(|s| s.parse().ok())
                .filter(|n: &u32| *n > 0)
                .unwrap_or(default.max_tokens),
            fallback_on_upstream_error: matches!(
                non_empty("HUMIDOR_FALLBACK").map(|s| s.to_lowercase()).as_deref(),
                Some("1") | Some("true") | Some("yes")
            ),
        }
    }

    /// OpenAI client for this config, or `None` when no API key is set.
    pub fn build_client(&self) -> Option<Arc<dyn LlmClient>> {
        let key = self.api_key.as_ref()?;
        let client = match &self.base_url {
            Some(base) => ChatOpenAI::with_base_url(key.clone(), base, self.model.clone()),
            None => ChatOpenAI::with_api_key(key.clone(), self.model.clone()),
        };
        Some(Arc::new(client))
    }
}
