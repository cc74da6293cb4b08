//! Converts between relay-llm generic types and the Chat Completions wire format.

use relay_llm::request::{GenerateRequest, Message};
use relay_llm::response::{FinishReason, GenerateResult, Usage};

use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Role};

pub fn to_chat_request(model_id: &str, req: &GenerateRequest) -> ChatCompletionRequest {
    let messages = req
        .messages
        .iter()
        .map(|msg| {
            let (role, content) = match msg {
                Message::System { content } => (Role::System, content),
                Message::User { content } => (Role::User, content),
                Message::Assistant { content } => (Role::Assistant, content),
            };
            ChatMessage {
                role,
                content: content.clone(),
            }
        })
        .collect();

    ChatCompletionRequest {
        model: model_id.to_string(),
        messages,
        stream: false,
        max_tokens: req.options.max_tokens,
        temperature: req.options.temperature,
        top_p: req.options.top_p,
        stop: req.options.stop.clone(),
        extra: req
            .metadata
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
    }
}

pub fn from_chat_response(resp: ChatCompletionResponse) -> GenerateResult {
    let usage = resp
        .usage
        .map(|u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    // Only the first choice is surfaced; `n` is never requested.
    let (text, finish_reason) = match resp.choices.into_iter().next() {
        Some(choice) => (
            choice.message.content.unwrap_or_default(),
            choice
                .finish_reason
                .as_deref()
                .map(FinishReason::from_wire)
                .unwrap_or(FinishReason::Stop),
        ),
        None => (String::new(), FinishReason::Other("no_choices".into())),
    };

    GenerateResult {
        text,
        finish_reason,
        usage,
    }
}
