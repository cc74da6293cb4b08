//! The provider capability set shared by every remote inference service.

use std::collections::HashMap;

use async_trait::async_trait;
use relay_llm::LanguageModel;

use crate::config::{ApiKeys, EnvMap, ProviderConfig, ProviderSetting};
use crate::descriptor::ModelDescriptor;
use crate::error::Error;
use crate::resolver::ResolveRequest;

/// Inputs for [`Provider::list_dynamic_models`].
///
/// Every field is optional; a missing server environment is an empty one.
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicModelsRequest<'a> {
    pub api_keys: Option<&'a ApiKeys>,
    /// This provider's own settings.
    pub settings: Option<&'a ProviderSetting>,
    pub server_env: Option<&'a EnvMap>,
}

impl<'a> DynamicModelsRequest<'a> {
    pub fn resolve_request(&self, provider_name: &'a str) -> ResolveRequest<'a> {
        ResolveRequest {
            provider_name,
            api_keys: self.api_keys,
            settings: self.settings,
            server_env: self.server_env,
        }
    }
}

/// Inputs for [`Provider::model_instance`].
#[derive(Debug, Clone, Copy)]
pub struct ModelInstanceRequest<'a> {
    pub model: &'a str,
    pub server_env: &'a EnvMap,
    pub api_keys: Option<&'a ApiKeys>,
    /// Settings for all providers, keyed by provider display name.
    pub provider_settings: Option<&'a HashMap<String, ProviderSetting>>,
}

impl<'a> ModelInstanceRequest<'a> {
    pub fn new(model: &'a str, server_env: &'a EnvMap) -> Self {
        Self {
            model,
            server_env,
            api_keys: None,
            provider_settings: None,
        }
    }

    pub fn with_api_keys(mut self, api_keys: &'a ApiKeys) -> Self {
        self.api_keys = Some(api_keys);
        self
    }

    pub fn with_provider_settings(
        mut self,
        provider_settings: &'a HashMap<String, ProviderSetting>,
    ) -> Self {
        self.provider_settings = Some(provider_settings);
        self
    }

    /// Narrow the request to one provider, picking its own settings entry.
    pub fn resolve_request(&self, provider_name: &'a str) -> ResolveRequest<'a> {
        ResolveRequest {
            provider_name,
            api_keys: self.api_keys,
            settings: self
                .provider_settings
                .and_then(|settings| settings.get(provider_name)),
            server_env: Some(self.server_env),
        }
    }
}

/// A named remote inference service.
///
/// One implementation per service; instances are stored in a
/// [`Registry`](crate::Registry) keyed by [`name`](Provider::name).
#[async_trait]
pub trait Provider: Send + Sync {
    /// Display name, also the key for caller API keys and settings.
    fn name(&self) -> &str;

    fn config(&self) -> &ProviderConfig;

    /// Models known without asking the remote service.
    fn static_models(&self) -> &[ModelDescriptor] {
        &[]
    }

    /// Where users can obtain an API key.
    fn api_key_link(&self) -> Option<&str> {
        None
    }

    fn icon(&self) -> Option<&str> {
        None
    }

    /// Fetch the models the remote service currently offers.
    ///
    /// Returns an empty list when credentials are not configured.
    async fn list_dynamic_models(
        &self,
        request: DynamicModelsRequest<'_>,
    ) -> Result<Vec<ModelDescriptor>, Error>;

    /// Build a generation handle for `request.model`.
    ///
    /// Fails with [`Error::MissingConfiguration`] when credentials are not
    /// configured.
    fn model_instance(&self, request: ModelInstanceRequest<'_>) -> Result<LanguageModel, Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_request_picks_only_its_own_settings() {
        let env = EnvMap::new();
        let mut settings = HashMap::new();
        settings.insert(
            "Mine".to_string(),
            ProviderSetting {
                enabled: Some(true),
                base_url: Some("http://mine".into()),
            },
        );
        settings.insert("Other".to_string(), ProviderSetting::default());

        let request = ModelInstanceRequest::new("m", &env).with_provider_settings(&settings);
        let resolve = request.resolve_request("Mine");
        assert_eq!(
            resolve.settings.and_then(|s| s.base_url.as_deref()),
            Some("http://mine")
        );
        assert!(request.resolve_request("Missing").settings.is_none());
    }

    #[test]
    fn dynamic_request_defaults_to_nothing() {
        let resolve = DynamicModelsRequest::default().resolve_request("Any");
        assert!(resolve.api_keys.is_none());
        assert!(resolve.settings.is_none());
        assert!(resolve.server_env.is_none());
    }
}
