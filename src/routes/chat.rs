use axum::Json;
use axum::extract::State;

use crate::error::AppError;
use crate::message::{ChatRequest, ChatResponse};
use crate::services::assistant;
use crate::state::SharedState;

/// Relay one user message to the completion API and return the reply.
/// The credential check comes first: without a key the route answers with
/// a configuration error no matter what the payload contains.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let Some(api_key) = state.config.openai_api_key.as_deref() else {
        return Err(AppError::MissingApiKey);
    };

    let Some(message) = payload.text() else {
        return Err(AppError::BadRequest(
            "Message must be a non-empty string".to_string(),
        ));
    };

    let reply = assistant::generate_reply(&state.http, &state.config, api_key, message)
        .await
        .map_err(AppError::Upstream)?;

    Ok(Json(ChatResponse { reply }))
}
