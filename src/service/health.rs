use serde::{ Deserialize, Serialize };

use crate::models::chat::now_timestamp;

pub const SERVICE_NAME: &str = "TravelLangGraph API";
pub const CHAT_API_NAME: &str = "Chat API";
pub const CHAT_ENDPOINTS: [&str; 4] = ["/chat/simple", "/chat/context", "/chat/status", "/chat/health"];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatHealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub endpoints: Vec<String>,
}

pub fn system_health() -> HealthResponse {
    HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: now_timestamp(),
    }
}

/// Static description of the chat routes; independent of upstream state.
pub fn chat_health() -> ChatHealthResponse {
    ChatHealthResponse {
        status: "healthy".to_string(),
        service: CHAT_API_NAME.to_string(),
        timestamp: now_timestamp(),
        endpoints: CHAT_ENDPOINTS.iter().map(|e| e.to_string()).collect(),
    }
}
