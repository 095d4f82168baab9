//! OpenAI Chat Completions client implementing [`LlmClient`] (ChatOpenAI).
//!
//! Sends one system and one user message and reads `choices[0].message.content`; a missing
//! choice or empty content reads as `{}`. When the
//! request asks for it, `response_format` is set to `json_object` so the reply is a single
//! JSON object. Depends on `async_openai`.

use async_trait::async_trait;
use tracing::{debug, trace, warn};

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
        ChatCompletionRequestUserMessage, CreateChatCompletionRequestArgs, ResponseFormat,
    },
    Client,
};

use crate::error::LlmError;
use crate::llm::{CompletionRequest, LlmClient};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// OpenAI Chat Completions client.
///
/// Build with [`ChatOpenAI::with_api_key`], optionally pointing at another OpenAI-compatible
/// base URL via [`ChatOpenAI::with_base_url`].
pub struct ChatOpenAI {
    client: Client<OpenAIConfig>,
    model: String,
    api_base: String,
}

impl ChatOpenAI {
    /// Client for the public API with the given key.
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key);
        Self::with_config(config, model)
    }

    /// Client with a custom config (key, base URL, org).
    pub fn with_config(config: OpenAIConfig, model: impl Into<String>) -> Self {
        use async_openai::config::Config;
        let api_base = config.api_base().to_string();
        Self {
            client: Client::with_config(config),
            model: model.into(),
            api_base,
        }
    }

    /// Client for an OpenAI-compatible server. `/v1` is appended when the base lacks it.
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: &str,
        model: impl Into<String>,
    ) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(Self::normalize_base(base_url));
        Self::with_config(config, model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn normalize_base(base: &str) -> String {
        let base = base.trim_end_matches('/');
        if base.ends_with("/v1") {
            base.to_string()
        } else {
            format!("{}/v1", base)
        }
    }

    fn messages(request: &CompletionRequest) -> Vec<ChatCompletionRequestMessage> {
        vec![
            ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage::from(
                request.system.as_str(),
            )),
            ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage::from(
                request.user.as_str(),
            )),
        ]
    }
}

#[async_trait]
impl LlmClient for ChatOpenAI {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let trace_id = uuid::Uuid::new_v4().to_string();
        let mut args = CreateChatCompletionRequestArgs::default();
        args.model(self.model.clone());
        args.messages(Self::messages(request));
        args.temperature(request.temperature);
        args.max_completion_tokens(request.max_tokens);
        if request.json_object {
            args.response_format(ResponseFormat::JsonObject);
        }

        let openai_request = args
            .build()
            .map_err(|e| LlmError::Build(format!("OpenAI request build failed: {}", e)))?;

        let url = format!("{}/chat/completions", self.api_base);
        debug!(
            trace_id = %trace_id,
            url = %url,
            model = %self.model,
            temperature = request.temperature,
            max_tokens = request.max_tokens,
            "OpenAI chat create"
        );
        if let Ok(js) = serde_json::to_string_pretty(&openai_request) {
            trace!(trace_id = %trace_id, request = %js, "OpenAI request body");
        }

        let response = self
            .client
            .chat()
            .create(openai_request)
            .await
            .map_err(|e| {
                warn!(trace_id = %trace_id, error = %e, "OpenAI API error");
                LlmError::Api(e.to_string())
            })?;

        if let Ok(js) = serde_json::to_string_pretty(&response) {
            trace!(trace_id = %trace_id, response = %js, "OpenAI response body");
        }

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();
        if content.trim().is_empty() {
            return Ok("{}".to_string());
        }
        Ok(content)
    }
}
