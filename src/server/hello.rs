use axum::{ extract::{ Path, Query }, routing::get, Json, Router };
use serde::Deserialize;

use super::AppState;
use crate::models::api::MessageResponse;
use crate::models::chat::now_timestamp;
use crate::service::hello::{ format_greeting, hello_message };

#[derive(Deserialize)]
pub struct HelloQuery {
    pub lang: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/hello", get(hello_world_handler))
        .route("/hello/", get(hello_world_handler))
        .route("/hello/{name}", get(hello_name_handler))
}

async fn hello_world_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: hello_message(None),
        timestamp: now_timestamp(),
    })
}

async fn hello_name_handler(
    Path(name): Path<String>,
    Query(query): Query<HelloQuery>,
) -> Json<MessageResponse> {
    let message = match query.lang.as_deref() {
        Some(lang) => format_greeting(&name, lang),
        None => hello_message(Some(&name)),
    };
    Json(MessageResponse { message, timestamp: now_timestamp() })
}
