use serde::{ Deserialize, Serialize };
use serde_json::Value as JsonValue;

use super::chat::{
    format_timestamp,
    ChatOutcome,
    ChatParameters,
    Message,
    ValidationError,
    DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
    DEFAULT_TEMPERATURE,
};

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f64 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SimpleChatRequest {
    pub message: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl SimpleChatRequest {
    pub fn params(&self) -> ChatParameters {
        ChatParameters {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn validate(&self) -> Result<ChatParameters, ValidationError> {
        if self.message.is_empty() {
            return Err(ValidationError::Empty("message"));
        }
        let params = self.params();
        params.validate()?;
        Ok(params)
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ContextChatRequest {
    pub messages: Vec<Message>,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl ContextChatRequest {
    pub fn params(&self) -> ChatParameters {
        ChatParameters {
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    pub fn validate(&self) -> Result<ChatParameters, ValidationError> {
        if self.messages.is_empty() {
            return Err(ValidationError::Empty("messages"));
        }
        if let Some(idx) = self.messages.iter().position(|m| m.content.is_empty()) {
            return Err(ValidationError::EmptyContent(idx));
        }
        let params = self.params();
        params.validate()?;
        Ok(params)
    }
}

/// Outward chat envelope. Fields the outcome does not carry serialize as `null`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ChatResponse {
    pub status: String,
    pub ai_response: Option<String>,
    pub error: Option<String>,
    pub processing_time_seconds: Option<f64>,
    pub timestamp: String,
    pub model: Option<String>,
    pub usage: Option<JsonValue>,
}

impl From<ChatOutcome> for ChatResponse {
    fn from(outcome: ChatOutcome) -> Self {
        let status = outcome.status().to_string();
        match outcome {
            ChatOutcome::Success { ai_response, model, usage, processing_time_seconds, timestamp } =>
                Self {
                    status,
                    ai_response: Some(ai_response),
                    error: None,
                    processing_time_seconds: Some(processing_time_seconds),
                    timestamp: format_timestamp(timestamp),
                    model: Some(model),
                    usage,
                },
            ChatOutcome::Failure { error, timestamp } =>
                Self {
                    status,
                    ai_response: None,
                    error: Some(error),
                    processing_time_seconds: None,
                    timestamp: format_timestamp(timestamp),
                    model: None,
                    usage: None,
                },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub timestamp: String,
}
