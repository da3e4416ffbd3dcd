//! Mood tracking API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::MoodService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use mindwell_shared::types::{CreateMoodRequest, MoodEntryResponse};

/// Create mood routes
pub fn mood_routes() -> Router<AppState> {
    Router::new().route("/", get(list_moods).post(create_mood))
}

/// GET /api/mood - All mood entries for the current user
async fn list_moods(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<MoodEntryResponse>>> {
    let moods = MoodService::list(&state.db, auth.user_id).await?;
    Ok(Json(moods))
}

/// POST /api/mood - Record a mood
async fn create_mood(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateMoodRequest>,
) -> ApiResult<Json<MoodEntryResponse>> {
    let mood = MoodService::create(&state.db, auth.user_id, req).await?;
    Ok(Json(mood))
}
