use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Top-level request
// ---------------------------------------------------------------------------

/// The frozen, built request — produced by a builder, consumed by `generate()`.
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub messages: Vec<Message>,
    pub options: GenerateOptions,
    /// Provider-specific metadata. Passed through to the backend as-is.
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Knobs that control generation behavior.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub stop: Option<Vec<String>>,
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Provider-agnostic request builder.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    pub(crate) messages: Vec<Message>,
    pub(crate) options: GenerateOptions,
    pub(crate) metadata: HashMap<String, serde_json::Value>,
}

/// Convenience entry point: `relay_llm::request()`.
pub fn request() -> RequestBuilder {
    RequestBuilder::default()
}

impl RequestBuilder {
    // -- messages --

    pub fn system(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::system(text));
        self
    }

    pub fn user(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::user(text));
        self
    }

    pub fn assistant(&mut self, text: impl Into<String>) -> &mut Self {
        self.messages.push(Message::assistant(text));
        self
    }

    pub fn message(&mut self, message: Message) -> &mut Self {
        self.messages.push(message);
        self
    }

    pub fn messages(&mut self, messages: impl IntoIterator<Item = Message>) -> &mut Self {
        self.messages.extend(messages);
        self
    }

    // -- options --

    pub fn temperature(&mut self, t: f32) -> &mut Self {
        self.options.temperature = Some(t);
        self
    }

    pub fn max_tokens(&mut self, n: u32) -> &mut Self {
        self.options.max_tokens = Some(n);
        self
    }

    pub fn top_p(&mut self, p: f32) -> &mut Self {
        self.options.top_p = Some(p);
        self
    }

    pub fn stop(&mut self, sequences: Vec<String>) -> &mut Self {
        self.options.stop = Some(sequences);
        self
    }

    // -- metadata --

    pub fn meta(
        &mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> &mut Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    // -- build --

    pub fn build(self) -> GenerateRequest {
        self.into()
    }
}

impl From<RequestBuilder> for GenerateRequest {
    fn from(b: RequestBuilder) -> Self {
        GenerateRequest {
            messages: b.messages,
            options: b.options,
            metadata: b.metadata,
        }
    }
}

impl From<&mut RequestBuilder> for GenerateRequest {
    fn from(b: &mut RequestBuilder) -> Self {
        std::mem::take(b).into()
    }
}

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Message {
    System { content: String },
    User { content: String },
    Assistant { content: String },
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Message::System {
            content: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Message::User {
            content: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Message::Assistant {
            content: text.into(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Message::System { .. } => Role::System,
            Message::User { .. } => Role::User,
            Message::Assistant { .. } => Role::Assistant,
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Message::System { content }
            | Message::User { content }
            | Message::Assistant { content } => content,
        }
    }
}
