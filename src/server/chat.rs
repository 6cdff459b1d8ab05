use axum::{
    extract::{ rejection::JsonRejection, State },
    routing::{ get, post },
    Json,
    Router,
};
use log::info;
use tower_http::catch_panic::CatchPanicLayer;

use super::error::{ handle_panic, ApiError };
use super::AppState;
use crate::models::api::{ ChatResponse, ContextChatRequest, SimpleChatRequest };
use crate::models::chat::ServiceStatus;
use crate::service::chat::ChatService;
use crate::service::health::{ chat_health, ChatHealthResponse };

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/chat/simple", post(simple_chat_handler))
        .route("/chat/context", post(context_chat_handler))
        .route("/chat/status", get(chat_status_handler))
        .route("/chat/health", get(chat_health_handler))
        .layer(CatchPanicLayer::custom(handle_panic))
}

async fn simple_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<SimpleChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let params = req.validate()?;
    let service = state.chat_service()?;

    info!("POST /chat/simple model={} temperature={}", params.model, params.temperature);
    let outcome = service.send_message(&req.message, req.system_prompt.as_deref(), &params).await;
    Ok(Json(ChatResponse::from(outcome)))
}

async fn context_chat_handler(
    State(state): State<AppState>,
    payload: Result<Json<ContextChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(req) = payload?;
    let params = req.validate()?;
    let service = state.chat_service()?;

    info!("POST /chat/context model={} messages={}", params.model, req.messages.len());
    let outcome = service.chat_with_context(&req.messages, &params).await;
    Ok(Json(ChatResponse::from(outcome)))
}

async fn chat_status_handler(State(state): State<AppState>) -> Json<ServiceStatus> {
    let status = match state.chat_service() {
        Ok(service) => service.get_service_status(),
        Err(ApiError::Unavailable(reason)) => ChatService::unavailable_status(&reason),
        Err(other) => ChatService::unavailable_status(&other.to_string()),
    };
    Json(status)
}

async fn chat_health_handler() -> Json<ChatHealthResponse> {
    Json(chat_health())
}
