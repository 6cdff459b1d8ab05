pub mod deepseek;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{ Map, Value as JsonValue };
use std::sync::Arc;

use self::deepseek::DeepSeekChatClient;
use super::LlmConfig;
use crate::models::chat::{ ChatParameters, ClientHealth, Message };

#[derive(Debug, thiserror::Error)]
pub enum ChatClientError {
    #[error("{0}")]
    Configuration(String),
    #[error("DeepSeek API HTTP error: {status} - {body}")]
    UpstreamHttp { status: StatusCode, body: String },
    #[error("DeepSeek API request error: {0}")]
    UpstreamTransport(#[source] reqwest::Error),
    #[error("DeepSeek API returned an undecodable body: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("DeepSeek API response is missing {0}")]
    MalformedResponse(&'static str),
}

impl ChatClientError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ChatClientError::UpstreamTransport(e) if e.is_timeout())
    }
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Sends one chat-completion request and returns the decoded body untouched.
    async fn complete(
        &self,
        messages: &[Message],
        params: &ChatParameters
    ) -> Result<JsonValue, ChatClientError>;

    /// Local configuration check; never touches the network.
    fn health_check(&self) -> ClientHealth;

    /// Single-turn helper: optional system preamble followed by the user message.
    async fn simple_chat(
        &self,
        message: &str,
        system_prompt: Option<&str>,
        params: &ChatParameters
    ) -> Result<String, ChatClientError> {
        let messages = build_messages(message, system_prompt);
        let response = self.complete(&messages, params).await?;
        extract_content(&response)
    }
}

pub fn build_messages(message: &str, system_prompt: Option<&str>) -> Vec<Message> {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = system_prompt.filter(|s| !s.is_empty()) {
        messages.push(Message::system(system));
    }
    messages.push(Message::user(message));
    messages
}

/// Pulls `choices[0].message.content` out of a completion body.
pub fn extract_content(response: &JsonValue) -> Result<String, ChatClientError> {
    response
        .pointer("/choices/0/message/content")
        .and_then(JsonValue::as_str)
        .map(str::to_owned)
        .ok_or(ChatClientError::MalformedResponse("choices[0].message.content"))
}

/// Token accounting, or an empty object when the upstream omitted it.
pub fn extract_usage(response: &JsonValue) -> JsonValue {
    match response.get("usage") {
        Some(usage) if !usage.is_null() => usage.clone(),
        _ => JsonValue::Object(Map::new()),
    }
}

pub fn new_client(config: &LlmConfig) -> Result<Arc<dyn ChatClient>, ChatClientError> {
    let client = DeepSeekChatClient::from_config(config)?;
    Ok(Arc::new(client))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chat::Role;
    use serde_json::json;

    #[test]
    fn system_prompt_precedes_user_message() {
        let messages = build_messages("Where to?", Some("You are a travel agent."));
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1], Message::user("Where to?"));

        let bare = build_messages("Hi", None);
        assert_eq!(bare, vec![Message::user("Hi")]);
    }

    #[test]
    fn content_is_read_from_first_choice() {
        let body = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "first" } },
                { "message": { "role": "assistant", "content": "second" } }
            ]
        });
        assert_eq!(extract_content(&body).unwrap(), "first");
    }

    #[test]
    fn missing_choices_is_malformed() {
        let err = extract_content(&json!({ "choices": [] })).unwrap_err();
        assert!(matches!(err, ChatClientError::MalformedResponse(_)));
    }

    #[test]
    fn usage_defaults_to_empty_object() {
        assert_eq!(extract_usage(&json!({})), json!({}));
        assert_eq!(extract_usage(&json!({ "usage": null })), json!({}));
        let usage = json!({ "prompt_tokens": 10, "completion_tokens": 20 });
        assert_eq!(extract_usage(&json!({ "usage": usage.clone() })), usage);
    }
}
