//! Model factory trait: turns resolved credentials into a model handle.

use relay_llm::LanguageModel;

use crate::error::Error;

/// Builds a [`LanguageModel`] bound to a base URL, API key and model name.
///
/// Implement this trait for concrete transport integrations, or pass a
/// closure.
pub trait ModelFactory: Send + Sync {
    fn create(&self, base_url: &str, api_key: &str, model: &str) -> Result<LanguageModel, Error>;
}

/// Blanket impl: any `Fn(&str, &str, &str) -> Result<LanguageModel, Error>`
/// is a factory.
impl<F> ModelFactory for F
where
    F: Fn(&str, &str, &str) -> Result<LanguageModel, Error> + Send + Sync,
{
    fn create(&self, base_url: &str, api_key: &str, model: &str) -> Result<LanguageModel, Error> {
        (self)(base_url, api_key, model)
    }
}
