pub mod error;
pub mod model;
pub mod request;
pub mod response;

pub use error::Error;
pub use model::{LanguageModel, LanguageModelBackend};
pub use request::{GenerateOptions, GenerateRequest, Message, RequestBuilder, Role, request};
pub use response::{FinishReason, GenerateResult, Usage};
