/// Errors produced by the LLM registry and the provider adapters built on it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A provider with the given name was not found in the registry.
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    /// A `"provider:model"` string could not be split.
    #[error("invalid model specifier '{0}', expected 'provider:model'")]
    InvalidModelSpecifier(String),

    /// Base URL or API key could not be resolved from any source.
    #[error("Missing configuration for {provider} provider")]
    MissingConfiguration { provider: String },

    /// The model listing request failed before a response arrived.
    #[error("failed to fetch models: {0}")]
    Http(#[from] reqwest::Error),

    /// The model listing endpoint answered with a non-success status.
    #[error("{provider} model listing returned {status}: {body}")]
    Status {
        provider: String,
        status: u16,
        body: String,
    },

    /// The model listing body was not the expected JSON shape.
    #[error("failed to parse model listing: {0}")]
    Parse(#[from] serde_json::Error),

    /// The model factory returned an error during construction.
    #[error("model factory error: {0}")]
    Factory(Box<dyn std::error::Error + Send + Sync>),
}
