//! Model handles for services that speak the OpenAI Chat Completions API.

mod convert;
mod types;

#[cfg(feature = "registry")]
pub mod register;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use relay_llm::request::GenerateRequest;
use relay_llm::response::GenerateResult;
use relay_llm::{Error, LanguageModel, LanguageModelBackend};

#[cfg(feature = "registry")]
pub use register::{OpenAILikeFactory, factory};

const PROVIDER_NAME: &str = "openai-like";

/// Default request timeout for generation calls.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Configuration for an OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct OpenAILikeConfig {
    pub api_key: String,
    /// Base URL without the trailing `/chat/completions`,
    /// e.g. `"https://llm.chutes.ai/v1"`.
    pub base_url: String,
    pub timeout: Duration,
}

impl OpenAILikeConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for OpenAILikeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAILikeConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Create a model handle for `model_id` served at `base_url`.
pub fn openai_like_model(
    base_url: &str,
    api_key: &str,
    model_id: &str,
) -> Result<LanguageModel, Error> {
    model(OpenAILikeConfig::new(base_url, api_key), model_id)
}

/// Create a model handle with an explicit config.
pub fn model(config: OpenAILikeConfig, model_id: &str) -> Result<LanguageModel, Error> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| Error::Http(Box::new(e)))?;

    Ok(LanguageModel::new(OpenAILikeModel {
        model_id: model_id.to_string(),
        state: Arc::new(ModelState { client, config }),
    }))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

struct ModelState {
    client: reqwest::Client,
    config: OpenAILikeConfig,
}

struct OpenAILikeModel {
    model_id: String,
    state: Arc<ModelState>,
}

#[async_trait]
impl LanguageModelBackend for OpenAILikeModel {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    fn provider(&self) -> &str {
        PROVIDER_NAME
    }

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResult, Error> {
        let body = convert::to_chat_request(&self.model_id, &request);
        let url = format!("{}/chat/completions", self.state.config.base_url);
        tracing::debug!(model = %self.model_id, %url, "sending chat completion");

        let resp = self
            .state
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.state.config.api_key),
            )
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Http(Box::new(e)))?;

        let status = resp.status();
        let text = resp.text().await.map_err(|e| Error::Http(Box::new(e)))?;
        if !status.is_success() {
            return Err(api_error(status, &text));
        }

        let parsed: types::ChatCompletionResponse = serde_json::from_str(&text)?;
        Ok(convert::from_chat_response(parsed))
    }
}

fn api_error(status: reqwest::StatusCode, body: &str) -> Error {
    let mut metadata = std::collections::HashMap::new();
    let message = match serde_json::from_str::<types::ErrorEnvelope>(body) {
        Ok(envelope) => {
            if let Some(kind) = envelope.error.kind {
                metadata.insert("type".to_string(), serde_json::Value::String(kind));
            }
            if let Some(code) = envelope.error.code {
                metadata.insert("code".to_string(), code);
            }
            envelope.error.message
        }
        Err(_) => body.to_string(),
    };
    Error::Api {
        code: status.as_str().to_string(),
        message,
        metadata,
    }
}
