#![allow(dead_code)]

use axum::{
    body::{ to_bytes, Body },
    extract::Request,
    http::{ header::CONTENT_TYPE, StatusCode },
    Router,
};
use serde_json::{ json, Value };
use std::time::Duration;
use tower::ServiceExt;
use travelanggraph_api::llm::LlmConfig;
use travelanggraph_api::server::{ build_router, AppState };
use travelanggraph_api::service::chat::ChatService;
use wiremock::{
    matchers::{ method, path },
    Mock,
    MockServer,
    ResponseTemplate,
};

pub const TEST_API_KEY: &str = "sk-test-key";

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

pub fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Drives one request through the router and decodes the JSON body.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

pub fn llm_config(server: &MockServer) -> LlmConfig {
    LlmConfig::new(TEST_API_KEY, server.uri())
}

/// Router wired to a DeepSeek client pointing at the mock server.
pub fn app_for(server: &MockServer) -> Router {
    llm_app(&llm_config(server))
}

pub fn llm_app(config: &LlmConfig) -> Router {
    let service = ChatService::from_config(config).unwrap();
    build_router(AppState::new(service))
}

/// Router whose chat subsystem failed to start.
pub fn app_without_chat() -> Router {
    build_router(AppState::without_chat("DEEPSEEK_API_KEY environment variable is required"))
}

pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 10, "completion_tokens": 20, "total_tokens": 30 }
    })
}

pub async fn mount_completion(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn mount_delayed_completion(server: &MockServer, delay: Duration) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("late")).set_delay(delay)
        )
        .mount(server)
        .await;
}
