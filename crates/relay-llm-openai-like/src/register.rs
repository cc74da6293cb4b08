//! Registry integration: OpenAI-compatible endpoints as a [`ModelFactory`].

use std::time::Duration;

use relay_llm::LanguageModel;
use relay_llm_registry::{Error, ModelFactory};

use crate::{DEFAULT_TIMEOUT, OpenAILikeConfig, model};

/// Builds OpenAI-compatible model handles for provider adapters.
#[derive(Debug, Clone, Copy)]
pub struct OpenAILikeFactory {
    timeout: Duration,
}

impl OpenAILikeFactory {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for OpenAILikeFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelFactory for OpenAILikeFactory {
    fn create(&self, base_url: &str, api_key: &str, model_id: &str) -> Result<LanguageModel, Error> {
        let mut config = OpenAILikeConfig::new(base_url, api_key);
        config.timeout = self.timeout;
        model(config, model_id).map_err(|err| Error::Factory(Box::new(err)))
    }
}

/// Plain-function factory with the default timeout.
pub fn factory(base_url: &str, api_key: &str, model_id: &str) -> Result<LanguageModel, Error> {
    OpenAILikeFactory::new().create(base_url, api_key, model_id)
}
