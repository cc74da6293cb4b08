use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use relay_llm::LanguageModel;
use relay_llm_openai_like::OpenAILikeFactory;
use relay_llm_registry::{
    ConfigResolver, DEFAULT_LISTING_TIMEOUT, DynamicModelsRequest, Error, ModelDescriptor,
    ModelFactory, ModelInstanceRequest, Provider, ProviderConfig, fetch_models,
};
use tracing::debug;

use crate::{CONFIG, ICON, MAX_TOKEN_ALLOWED, PROVIDER_NAME};

/// Adapter for the Chutes inference service.
///
/// Holds no mutable state; every call resolves credentials afresh.
#[derive(Clone)]
pub struct ChutesProvider {
    resolver: ConfigResolver,
    factory: Arc<dyn ModelFactory>,
    client: reqwest::Client,
    timeout: Duration,
}

impl ChutesProvider {
    /// Adapter using the process environment and OpenAI-compatible handles.
    pub fn new() -> Self {
        Self {
            resolver: ConfigResolver::new(),
            factory: Arc::new(OpenAILikeFactory::new()),
            client: reqwest::Client::new(),
            timeout: DEFAULT_LISTING_TIMEOUT,
        }
    }

    pub fn with_resolver(mut self, resolver: ConfigResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_factory(mut self, factory: impl ModelFactory + 'static) -> Self {
        self.factory = Arc::new(factory);
        self
    }

    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Timeout for the model listing request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ChutesProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ChutesProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChutesProvider")
            .field("name", &PROVIDER_NAME)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl Provider for ChutesProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn config(&self) -> &ProviderConfig {
        &CONFIG
    }

    fn icon(&self) -> Option<&str> {
        Some(ICON)
    }

    async fn list_dynamic_models(
        &self,
        request: DynamicModelsRequest<'_>,
    ) -> Result<Vec<ModelDescriptor>, Error> {
        let credentials = self
            .resolver
            .resolve(&CONFIG, &request.resolve_request(PROVIDER_NAME));
        let Some((base_url, api_key)) = credentials.complete() else {
            debug!("{PROVIDER_NAME} is not configured, skipping model listing");
            return Ok(Vec::new());
        };

        let models = fetch_models(&self.client, PROVIDER_NAME, base_url, api_key, self.timeout)
            .await?
            .into_iter()
            .map(|model| ModelDescriptor {
                name: model.id.clone(),
                label: model.id,
                provider: PROVIDER_NAME.to_string(),
                max_token_allowed: MAX_TOKEN_ALLOWED,
            })
            .collect();
        Ok(models)
    }

    fn model_instance(&self, request: ModelInstanceRequest<'_>) -> Result<LanguageModel, Error> {
        let credentials = self
            .resolver
            .resolve(&CONFIG, &request.resolve_request(PROVIDER_NAME));
        let (base_url, api_key) = credentials
            .complete()
            .ok_or_else(|| Error::MissingConfiguration {
                provider: PROVIDER_NAME.to_string(),
            })?;

        self.factory.create(base_url, api_key, request.model)
    }
}
