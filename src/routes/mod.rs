// src/routes/mod.rs
pub mod calc;
pub mod chat;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::SharedState;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(health))
        .route("/api/chat", post(chat::chat_handler))
        .route("/api/calc", post(calc::calc_handler))
        // Dashboard frontend; the explicit routes above take precedence.
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "Backend running successfully 🚀" }))
}
