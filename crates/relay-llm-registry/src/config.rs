//! Static provider configuration and per-provider user settings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Caller-supplied API keys, keyed by provider display name.
pub type ApiKeys = HashMap<String, String>;

/// Server-side environment values, keyed by variable name.
pub type EnvMap = HashMap<String, String>;

/// Lookup keys and defaults a provider resolves its credentials with.
///
/// Fixed when the provider is defined; usually a `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Environment key overriding the base URL (e.g. `"CHUTS_API_BASE_URL"`).
    pub base_url_key: &'static str,
    /// Environment key holding the API key (e.g. `"CHUTS_API_KEY"`).
    pub api_key_key: &'static str,
    /// Built-in base URL used when nothing else is configured.
    pub default_base_url: Option<&'static str>,
}

/// User settings for a single provider, as stored by the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSetting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ProviderSetting {
    /// Providers are enabled unless explicitly switched off.
    pub fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::ProviderSetting;

    #[test]
    fn settings_deserialize_from_camel_case() {
        let setting: ProviderSetting =
            serde_json::from_str(r#"{"enabled":false,"baseUrl":"http://localhost:8080/v1"}"#)
                .expect("parse setting");
        assert_eq!(setting.enabled, Some(false));
        assert_eq!(setting.base_url.as_deref(), Some("http://localhost:8080/v1"));
        assert!(!setting.is_enabled());
    }

    #[test]
    fn missing_fields_default_to_enabled() {
        let setting: ProviderSetting = serde_json::from_str("{}").expect("parse setting");
        assert_eq!(setting, ProviderSetting::default());
        assert!(setting.is_enabled());
    }
}
