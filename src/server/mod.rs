pub mod api;
pub mod chat;
pub mod error;
pub mod health;
pub mod hello;

use axum::Router;
use std::error::Error;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{ Any, CorsLayer };

use crate::config::Settings;
use crate::service::chat::ChatService;
use self::error::ApiError;

/// Shared, read-only state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    chat: Result<Arc<ChatService>, Arc<str>>,
}

impl AppState {
    pub fn new(chat: ChatService) -> Self {
        Self { chat: Ok(Arc::new(chat)) }
    }

    /// Health and hello routes keep working; chat routes answer 503.
    pub fn without_chat(reason: impl Into<String>) -> Self {
        let reason: String = reason.into();
        Self { chat: Err(Arc::from(reason)) }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        match ChatService::from_config(&settings.llm) {
            Ok(service) => Self::new(service),
            Err(e) => Self::without_chat(e.to_string()),
        }
    }

    pub fn chat_service(&self) -> Result<Arc<ChatService>, ApiError> {
        self.chat
            .as_ref()
            .map(Arc::clone)
            .map_err(|reason| ApiError::Unavailable(reason.to_string()))
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(health::routes())
        .merge(hello::routes())
        .merge(chat::routes())
        .layer(ServiceBuilder::new().layer(cors))
        .with_state(state)
}

pub struct Server {
    settings: Settings,
    state: AppState,
}

impl Server {
    pub fn new(settings: Settings, state: AppState) -> Self {
        Self { settings, state }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let app = build_router(self.state.clone());
        api::start_http_server(&self.settings, app).await
    }
}
