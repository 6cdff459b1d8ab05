use axum::{ routing::get, Json, Router };

use super::AppState;
use crate::models::api::{ MessageResponse, RootResponse };
use crate::models::chat::now_timestamp;
use crate::service::health::{ system_health, HealthResponse };

pub const ROOT_MESSAGE: &str = "Welcome to TravelLangGraph API!";

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/health/", get(health_handler))
        .route("/health/ping", get(ping_handler))
}

async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn health_handler() -> Json<HealthResponse> {
    Json(system_health())
}

async fn ping_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "pong".to_string(),
        timestamp: now_timestamp(),
    })
}
