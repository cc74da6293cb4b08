//! Model metadata exposed to the host application.

use serde::{Deserialize, Serialize};

/// A model a provider can serve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Identifier sent to the provider.
    pub name: String,
    /// Human-friendly label.
    pub label: String,
    /// Display name of the provider serving this model.
    pub provider: String,
    pub max_token_allowed: u32,
}
