//! # relay-llm-registry
//!
//! Shared plumbing for adapters that talk to remote inference services.
//!
//! This crate lets you:
//!
//! - **Resolve credentials** for a provider from caller-supplied keys,
//!   provider settings, a server environment map and the process
//!   environment ([`ConfigResolver`]).
//! - **List models** from OpenAI-compatible `/models` endpoints
//!   ([`listing::fetch_models`]).
//! - **Register providers** implementing [`Provider`] and look them up by
//!   display name ([`Registry`]).
//!
//! # Quick start
//!
//! ```ignore
//! use relay_llm_registry::{DynamicModelsRequest, ModelInstanceRequest, Registry};
//!
//! let mut registry = Registry::new();
//! relay_llm_chutes::register(&mut registry);
//!
//! // Empty when no API key is configured.
//! let models = registry
//!     .list_dynamic_models("CHUTS AI", DynamicModelsRequest::default())
//!     .await?;
//!
//! let env = std::collections::HashMap::new();
//! let model = registry.model("CHUTS AI", ModelInstanceRequest::new(&models[0].name, &env))?;
//! ```

pub mod config;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod listing;
pub mod provider;
pub mod registry;
pub mod resolver;

pub use config::{ApiKeys, EnvMap, ProviderConfig, ProviderSetting};
pub use descriptor::ModelDescriptor;
pub use error::Error;
pub use factory::ModelFactory;
pub use listing::{DEFAULT_LISTING_TIMEOUT, RemoteModel, fetch_models};
pub use provider::{DynamicModelsRequest, ModelInstanceRequest, Provider};
pub use registry::{ProviderSummary, Registry};
pub use resolver::{ConfigResolver, EnvSource, ProcessEnv, ResolveRequest, ResolvedCredentials};
