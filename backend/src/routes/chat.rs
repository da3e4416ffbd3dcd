//! Wellness chat API routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::ChatService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use mindwell_shared::types::{ChatMessage, ChatRequest, ChatResetResponse};

/// Create chat routes
pub fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(chat_history).post(send_message))
        .route("/reset", post(reset_chat))
}

/// GET /api/chat - Start of a fresh conversation
async fn chat_history(_auth: AuthUser) -> Json<Vec<ChatMessage>> {
    Json(ChatService::welcome())
}

/// POST /api/chat - Send a message, get the AI reply
async fn send_message(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<ChatRequest>,
) -> ApiResult<Json<ChatMessage>> {
    let message = req
        .message
        .filter(|m| !m.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Invalid message format".to_string()))?;

    let reply = ChatService::respond(state.ai(), &message).await;
    Ok(Json(reply))
}

/// POST /api/chat/reset - Reset the conversation
async fn reset_chat(_auth: AuthUser) -> Json<ChatResetResponse> {
    Json(ChatService::reset())
}
