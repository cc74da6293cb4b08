//! Credential resolution: turns caller keys, provider settings and
//! environment values into a concrete base URL and API key.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::{ApiKeys, EnvMap, ProviderConfig, ProviderSetting};

/// Source of process-level environment values.
///
/// Consulted after the caller's server environment map and before the
/// provider's built-in defaults.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Inputs for a single resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResolveRequest<'a> {
    /// Display name of the provider; caller API keys are keyed by it.
    pub provider_name: &'a str,
    pub api_keys: Option<&'a ApiKeys>,
    pub settings: Option<&'a ProviderSetting>,
    pub server_env: Option<&'a EnvMap>,
}

/// Resolved base URL and API key. Either may be absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResolvedCredentials {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
}

impl ResolvedCredentials {
    /// Both values, or `None` if either is missing.
    pub fn complete(&self) -> Option<(&str, &str)> {
        match (self.base_url.as_deref(), self.api_key.as_deref()) {
            (Some(base_url), Some(api_key)) => Some((base_url, api_key)),
            _ => None,
        }
    }
}

impl std::fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedCredentials")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Resolves credentials for any provider from its [`ProviderConfig`].
///
/// Precedence for the API key: caller key (by provider name), server
/// environment, process environment. For the base URL: provider settings,
/// server environment, process environment, built-in default.
///
/// Every value is trimmed of surrounding whitespace, and blank values are
/// treated as absent. One trailing `/` is dropped from the base URL; a base
/// URL that is empty after that counts as absent too.
#[derive(Clone)]
pub struct ConfigResolver {
    process_env: Arc<dyn EnvSource>,
}

impl ConfigResolver {
    /// Resolver backed by the real process environment.
    pub fn new() -> Self {
        Self::with_env_source(ProcessEnv)
    }

    /// Resolver backed by a custom process-level environment source.
    pub fn with_env_source(source: impl EnvSource + 'static) -> Self {
        Self {
            process_env: Arc::new(source),
        }
    }

    pub fn resolve(
        &self,
        config: &ProviderConfig,
        request: &ResolveRequest<'_>,
    ) -> ResolvedCredentials {
        let base_url = request
            .settings
            .and_then(|s| present(s.base_url.as_deref()))
            .or_else(|| self.lookup_env(request.server_env, config.base_url_key))
            .or_else(|| present(config.default_base_url))
            .and_then(|url| present(Some(url.strip_suffix('/').unwrap_or(&url))));

        let api_key = request
            .api_keys
            .and_then(|keys| present(keys.get(request.provider_name).map(String::as_str)))
            .or_else(|| self.lookup_env(request.server_env, config.api_key_key));

        tracing::debug!(
            provider = request.provider_name,
            has_base_url = base_url.is_some(),
            has_api_key = api_key.is_some(),
            "resolved provider credentials"
        );

        ResolvedCredentials { base_url, api_key }
    }

    fn lookup_env(&self, server_env: Option<&EnvMap>, key: &str) -> Option<String> {
        server_env
            .and_then(|env| present(env.get(key).map(String::as_str)))
            .or_else(|| present(self.process_env.var(key).as_deref()))
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ConfigResolver")
    }
}

fn present(value: Option<&str>) -> Option<String> {
    let value = value?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: ProviderConfig = ProviderConfig {
        base_url_key: "TEST_BASE_URL",
        api_key_key: "TEST_API_KEY",
        default_base_url: Some("https://default.example/v1"),
    };

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn isolated() -> ConfigResolver {
        ConfigResolver::with_env_source(EnvMap::new())
    }

    fn request<'a>(
        api_keys: Option<&'a ApiKeys>,
        settings: Option<&'a ProviderSetting>,
        server_env: Option<&'a EnvMap>,
    ) -> ResolveRequest<'a> {
        ResolveRequest {
            provider_name: "Test",
            api_keys,
            settings,
            server_env,
        }
    }

    #[test]
    fn nothing_configured_yields_default_url_and_no_key() {
        let creds = isolated().resolve(&CONFIG, &request(None, None, None));
        assert_eq!(creds.base_url.as_deref(), Some("https://default.example/v1"));
        assert_eq!(creds.api_key, None);
        assert!(creds.complete().is_none());
    }

    #[test]
    fn caller_key_overrides_environment() {
        let keys = map(&[("Test", "from-caller")]);
        let env = map(&[("TEST_API_KEY", "from-env")]);
        let creds = isolated().resolve(&CONFIG, &request(Some(&keys), None, Some(&env)));
        assert_eq!(creds.api_key.as_deref(), Some("from-caller"));
    }

    #[test]
    fn caller_keys_for_other_providers_are_ignored() {
        let keys = map(&[("Other", "not-mine")]);
        let env = map(&[("TEST_API_KEY", "from-env")]);
        let creds = isolated().resolve(&CONFIG, &request(Some(&keys), None, Some(&env)));
        assert_eq!(creds.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn server_env_wins_over_process_env() {
        let resolver = ConfigResolver::with_env_source(map(&[
            ("TEST_API_KEY", "process"),
            ("TEST_BASE_URL", "https://process.example/v1"),
        ]));
        let env = map(&[("TEST_API_KEY", "server")]);
        let creds = resolver.resolve(&CONFIG, &request(None, None, Some(&env)));
        assert_eq!(creds.api_key.as_deref(), Some("server"));
        assert_eq!(creds.base_url.as_deref(), Some("https://process.example/v1"));
    }

    #[test]
    fn process_env_used_when_no_server_value() {
        let resolver = ConfigResolver::with_env_source(map(&[("TEST_API_KEY", "process")]));
        let creds = resolver.resolve(&CONFIG, &request(None, None, None));
        assert_eq!(creds.api_key.as_deref(), Some("process"));
    }

    #[test]
    fn settings_base_url_wins_over_environment() {
        let settings = ProviderSetting {
            enabled: None,
            base_url: Some("http://localhost:9000/v1/".into()),
        };
        let env = map(&[("TEST_BASE_URL", "https://env.example/v1")]);
        let creds = isolated().resolve(&CONFIG, &request(None, Some(&settings), Some(&env)));
        assert_eq!(creds.base_url.as_deref(), Some("http://localhost:9000/v1"));
    }

    #[test]
    fn blank_values_fall_through() {
        let settings = ProviderSetting {
            enabled: None,
            base_url: Some(String::new()),
        };
        let keys = map(&[("Test", "  ")]);
        let env = map(&[
            ("TEST_BASE_URL", "https://env.example/v1"),
            ("TEST_API_KEY", "env-key"),
        ]);
        let creds = isolated().resolve(
            &CONFIG,
            &request(Some(&keys), Some(&settings), Some(&env)),
        );
        assert_eq!(creds.base_url.as_deref(), Some("https://env.example/v1"));
        assert_eq!(creds.api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn bare_slash_base_url_is_absent() {
        let settings = ProviderSetting {
            enabled: None,
            base_url: Some("/".into()),
        };
        let env = map(&[("TEST_API_KEY", "k")]);
        let creds = isolated().resolve(&CONFIG, &request(None, Some(&settings), Some(&env)));
        assert_eq!(creds.base_url, None);
        assert!(creds.complete().is_none());
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let keys = map(&[("Test", " abc ")]);
        let env = map(&[("TEST_BASE_URL", " https://env.example/v1/ ")]);
        let creds = isolated().resolve(&CONFIG, &request(Some(&keys), None, Some(&env)));
        assert_eq!(creds.api_key.as_deref(), Some("abc"));
        assert_eq!(creds.base_url.as_deref(), Some("https://env.example/v1"));
    }

    #[test]
    fn no_default_means_no_base_url() {
        let config = ProviderConfig {
            default_base_url: None,
            ..CONFIG
        };
        let creds = isolated().resolve(&config, &request(None, None, None));
        assert_eq!(creds.base_url, None);
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let creds = ResolvedCredentials {
            base_url: Some("https://x".into()),
            api_key: Some("sk-secret".into()),
        };
        let rendered = format!("{creds:?}");
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
