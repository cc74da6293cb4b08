//! The core registry: maps provider names to adapters.

use std::collections::HashMap;
use std::sync::Arc;

use relay_llm::LanguageModel;

use crate::config::{EnvMap, ProviderSetting};
use crate::descriptor::ModelDescriptor;
use crate::error::Error;
use crate::provider::{DynamicModelsRequest, ModelInstanceRequest, Provider};

/// Display metadata for a registered provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSummary {
    /// Display name (e.g. `"CHUTS AI"`).
    pub name: String,
    pub icon: Option<String>,
    pub api_key_link: Option<String>,
}

/// Registry of provider adapters keyed by display name.
///
/// # Example
///
/// ```ignore
/// use relay_llm_registry::{ModelInstanceRequest, Registry};
///
/// let mut registry = Registry::new();
/// relay_llm_chutes::register(&mut registry);
///
/// let env = std::collections::HashMap::new();
/// let model = registry.model("CHUTS AI", ModelInstanceRequest::new("deepseek-ai/DeepSeek-V3", &env))?;
/// ```
#[derive(Default)]
pub struct Registry {
    providers: HashMap<String, Arc<dyn Provider>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            providers: HashMap::new(),
        }
    }

    /// Register a provider under its display name, replacing any previous
    /// provider with the same name.
    pub fn add_provider(&mut self, provider: impl Provider + 'static) {
        let provider: Arc<dyn Provider> = Arc::new(provider);
        tracing::debug!(provider = provider.name(), "registered provider");
        self.providers.insert(provider.name().to_string(), provider);
    }

    pub fn has_provider(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    pub fn provider(&self, name: &str) -> Result<Arc<dyn Provider>, Error> {
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ProviderNotFound(name.to_string()))
    }

    /// All registered providers, sorted by name.
    pub fn providers(&self) -> Vec<ProviderSummary> {
        let mut result: Vec<ProviderSummary> = self
            .providers
            .values()
            .map(|p| ProviderSummary {
                name: p.name().to_string(),
                icon: p.icon().map(str::to_string),
                api_key_link: p.api_key_link().map(str::to_string),
            })
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        result
    }

    /// Registered providers not switched off in `settings`.
    ///
    /// Providers without a settings entry count as enabled.
    pub fn enabled_providers(
        &self,
        settings: &HashMap<String, ProviderSetting>,
    ) -> Vec<ProviderSummary> {
        self.providers()
            .into_iter()
            .filter(|p| settings.get(&p.name).is_none_or(ProviderSetting::is_enabled))
            .collect()
    }

    /// Fetch a provider's dynamic models.
    pub async fn list_dynamic_models(
        &self,
        name: &str,
        request: DynamicModelsRequest<'_>,
    ) -> Result<Vec<ModelDescriptor>, Error> {
        self.provider(name)?.list_dynamic_models(request).await
    }

    /// A provider's static models followed by its dynamic ones.
    pub async fn list_models(
        &self,
        name: &str,
        request: DynamicModelsRequest<'_>,
    ) -> Result<Vec<ModelDescriptor>, Error> {
        let provider = self.provider(name)?;
        let mut models = provider.static_models().to_vec();
        models.extend(provider.list_dynamic_models(request).await?);
        Ok(models)
    }

    /// Obtain a [`LanguageModel`] from the named provider.
    pub fn model(
        &self,
        name: &str,
        request: ModelInstanceRequest<'_>,
    ) -> Result<LanguageModel, Error> {
        self.provider(name)?.model_instance(request)
    }

    /// Parse a combined `"provider:model"` string and return the model,
    /// resolving credentials from `server_env` and the process environment.
    pub fn model_from_string(
        &self,
        specifier: &str,
        server_env: &EnvMap,
    ) -> Result<LanguageModel, Error> {
        let (provider, model_id) = specifier
            .split_once(':')
            .ok_or_else(|| Error::InvalidModelSpecifier(specifier.to_string()))?;
        self.model(provider, ModelInstanceRequest::new(model_id, server_env))
    }
}
