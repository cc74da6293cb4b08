//! Registry integration for Chutes, an OpenAI-compatible inference service.

mod provider;

use relay_llm_registry::{ProviderConfig, Registry};

pub use provider::ChutesProvider;

pub const PROVIDER_NAME: &str = "CHUTS AI";
pub const BASE_URL_KEY: &str = "CHUTS_API_BASE_URL";
pub const API_KEY_KEY: &str = "CHUTS_API_KEY";
pub const DEFAULT_BASE_URL: &str = "https://llm.chutes.ai/v1";

/// Token limit reported for every listed model. The listing endpoint does
/// not expose per-model limits.
pub const MAX_TOKEN_ALLOWED: u32 = 8000;

pub const CONFIG: ProviderConfig = ProviderConfig {
    base_url_key: BASE_URL_KEY,
    api_key_key: API_KEY_KEY,
    default_base_url: Some(DEFAULT_BASE_URL),
};

const ICON: &str = "/icons/CHUTS AI.svg";

/// Register the Chutes provider under [`PROVIDER_NAME`].
pub fn register(registry: &mut Registry) {
    registry.add_provider(ChutesProvider::new());
}
