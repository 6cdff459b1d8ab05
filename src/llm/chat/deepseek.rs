use async_trait::async_trait;
use log::{ debug, error, info, warn };
use reqwest::{ Client as HttpClient, header::{ HeaderMap, HeaderValue, CONTENT_TYPE, AUTHORIZATION } };
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::time::Duration;

use super::{ ChatClient, ChatClientError };
use crate::llm::LlmConfig;
use crate::models::chat::{ now_timestamp, ChatParameters, ClientHealth, Message };

pub struct DeepSeekChatClient {
    http: HttpClient,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct DeepSeekRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f64,
    max_tokens: u32,
    stream: bool,
}

impl DeepSeekChatClient {
    pub fn new(
        api_key: String,
        base_url: String,
        timeout: Duration
    ) -> Result<Self, ChatClientError> {
        if api_key.trim().is_empty() {
            return Err(
                ChatClientError::Configuration(
                    "DEEPSEEK_API_KEY environment variable is required".to_string()
                )
            );
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|e|
                ChatClientError::Configuration(format!("Invalid API key format: {}", e))
            )?
        );

        let http = HttpClient::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ChatClientError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        info!("DeepSeek client initialized successfully (base URL: {})", base_url);

        Ok(Self {
            http,
            api_key,
            base_url,
            timeout,
        })
    }

    pub fn from_config(config: &LlmConfig) -> Result<Self, ChatClientError> {
        let api_key = config.api_key
            .clone()
            .ok_or_else(||
                ChatClientError::Configuration(
                    "DEEPSEEK_API_KEY environment variable is required".to_string()
                )
            )?;

        Self::new(api_key, config.base_url.clone(), config.timeout)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ChatClient for DeepSeekChatClient {
    async fn complete(
        &self,
        messages: &[Message],
        params: &ChatParameters
    ) -> Result<JsonValue, ChatClientError> {
        let url = self.completions_url();
        let req = DeepSeekRequest {
            model: &params.model,
            messages,
            temperature: params.temperature,
            max_tokens: params.max_tokens,
            stream: false,
        };

        debug!(
            "POST {} model={} messages={} temperature={} max_tokens={}",
            url,
            params.model,
            messages.len(),
            params.temperature,
            params.max_tokens
        );

        let resp = self.http
            .post(&url)
            .json(&req)
            .send()
            .await
            .map_err(|e| {
                error!("DeepSeek API request error: {}", e);
                ChatClientError::UpstreamTransport(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = match resp.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read DeepSeek error body (status {}): {}", status.as_u16(), e);
                    String::new()
                }
            };
            error!("DeepSeek API HTTP error: {} - {}", status.as_u16(), body);
            return Err(ChatClientError::UpstreamHttp { status, body });
        }

        resp.json::<JsonValue>().await.map_err(|e| {
            if e.is_timeout() {
                error!("DeepSeek API request error: {}", e);
                ChatClientError::UpstreamTransport(e)
            } else {
                error!("DeepSeek API unexpected error: {}", e);
                ChatClientError::Decode(e)
            }
        })
    }

    fn health_check(&self) -> ClientHealth {
        let configured = !self.api_key.is_empty();
        ClientHealth {
            status: (if configured { "healthy" } else { "unhealthy" }).to_string(),
            api_key_configured: configured,
            base_url: self.base_url.clone(),
            timestamp: now_timestamp(),
        }
    }
}
