use chrono::Utc;
use log::{ error, info };
use std::sync::Arc;
use std::time::Instant;

use crate::llm::chat::{ extract_content, extract_usage, new_client, ChatClient, ChatClientError };
use crate::llm::LlmConfig;
use crate::models::chat::{ now_timestamp, ChatOutcome, ChatParameters, Message, ServiceStatus };

pub const SERVICE_NAME: &str = "ChatService";

/// Orchestrates chat calls: timing, status envelopes, error capture.
///
/// Every public chat operation returns a [`ChatOutcome`]; upstream and decode
/// failures are recorded as `ChatOutcome::Failure` instead of being propagated.
#[derive(Clone)]
pub struct ChatService {
    client: Arc<dyn ChatClient>,
}

impl ChatService {
    pub fn new(client: Arc<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, ChatClientError> {
        match new_client(config) {
            Ok(client) => {
                info!("Chat service initialized successfully");
                Ok(Self::new(client))
            }
            Err(e) => {
                error!("Failed to initialize chat service: {}", e);
                Err(e)
            }
        }
    }

    pub async fn send_message(
        &self,
        message: &str,
        system_prompt: Option<&str>,
        params: &ChatParameters
    ) -> ChatOutcome {
        let started = Instant::now();
        match self.client.simple_chat(message, system_prompt, params).await {
            Ok(ai_response) => {
                let processing_time_seconds = started.elapsed().as_secs_f64();
                info!(
                    "send_message completed in {:.3}s (model={})",
                    processing_time_seconds,
                    params.model
                );
                ChatOutcome::Success {
                    ai_response,
                    model: params.model.clone(),
                    usage: None,
                    processing_time_seconds,
                    timestamp: Utc::now(),
                }
            }
            Err(e) => {
                error!("Error in send_message: {}", e);
                ChatOutcome::Failure { error: e.to_string(), timestamp: Utc::now() }
            }
        }
    }

    pub async fn chat_with_context(
        &self,
        messages: &[Message],
        params: &ChatParameters
    ) -> ChatOutcome {
        let started = Instant::now();
        let result = async {
            let response = self.client.complete(messages, params).await?;
            let ai_response = extract_content(&response)?;
            Ok::<_, ChatClientError>((ai_response, extract_usage(&response)))
        }.await;

        match result {
            Ok((ai_response, usage)) => {
                let processing_time_seconds = started.elapsed().as_secs_f64();
                info!(
                    "chat_with_context completed in {:.3}s (model={}, turns={})",
                    processing_time_seconds,
                    params.model,
                    messages.len()
                );
                ChatOutcome::Success {
                    ai_response,
                    model: params.model.clone(),
                    usage: Some(usage),
                    processing_time_seconds,
                    timestamp: Utc::now(),
                }
            }
            Err(e) => {
                error!("Error in chat_with_context: {}", e);
                ChatOutcome::Failure { error: e.to_string(), timestamp: Utc::now() }
            }
        }
    }

    pub fn get_service_status(&self) -> ServiceStatus {
        ServiceStatus {
            service: SERVICE_NAME.to_string(),
            status: "healthy".to_string(),
            deepseek_client: Some(self.client.health_check()),
            error: None,
            timestamp: now_timestamp(),
        }
    }

    /// Status reported when the service could not be constructed at startup.
    pub fn unavailable_status(error: &str) -> ServiceStatus {
        ServiceStatus {
            service: SERVICE_NAME.to_string(),
            status: "unhealthy".to_string(),
            deepseek_client: None,
            error: Some(error.to_string()),
            timestamp: now_timestamp(),
        }
    }
}
