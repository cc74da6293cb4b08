use async_trait::async_trait;

use crate::error::Error;
use crate::request::GenerateRequest;
use crate::response::GenerateResult;

/// A concrete, type-erased language model handle.
///
/// Wraps a [`LanguageModelBackend`] so callers never need generics. The
/// handle is bound to one provider, one model and one set of credentials.
pub struct LanguageModel {
    inner: Box<dyn LanguageModelBackend>,
}

impl LanguageModel {
    /// Wrap any backend implementation into a model.
    pub fn new(backend: impl LanguageModelBackend + 'static) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }

    /// The model identifier (e.g. `"deepseek-ai/DeepSeek-V3"`).
    pub fn model_id(&self) -> &str {
        self.inner.model_id()
    }

    /// The provider name this model belongs to.
    pub fn provider(&self) -> &str {
        self.inner.provider()
    }

    /// Run a single generation request to completion.
    pub async fn generate(
        &self,
        request: impl Into<GenerateRequest>,
    ) -> Result<GenerateResult, Error> {
        self.inner.generate(request.into()).await
    }
}

impl std::fmt::Debug for LanguageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageModel")
            .field("provider", &self.provider())
            .field("model_id", &self.model_id())
            .finish()
    }
}

/// Trait that provider crates implement for a specific model.
#[async_trait]
pub trait LanguageModelBackend: Send + Sync {
    fn model_id(&self) -> &str;
    fn provider(&self) -> &str;
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResult, Error>;
}
