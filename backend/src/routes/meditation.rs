//! Meditation API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::parse_id;
use crate::services::MeditationService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use mindwell_shared::types::{
    CompleteExerciseRequest, CompleteExerciseResponse, FavoriteRequest, FavoriteResponse,
    MeditationQuery, MeditationResponse,
};
use serde::Deserialize;

/// Create meditation routes
pub fn meditation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises))
        .route("/refresh/youtube", get(refresh_youtube))
        .route("/:id", get(get_exercise))
        .route("/:id/complete", post(complete_exercise))
        .route("/:id/favorite", post(favorite_exercise))
}

/// GET /api/meditation - Catalog, optionally refreshed from YouTube (public)
async fn list_exercises(
    State(state): State<AppState>,
    Query(query): Query<MeditationQuery>,
) -> ApiResult<Json<Vec<MeditationResponse>>> {
    let exercises =
        MeditationService::list(&state.db, &state.http, &state.config.youtube, query).await?;
    Ok(Json(exercises))
}

/// GET /api/meditation/:id - Single exercise (public)
async fn get_exercise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<MeditationResponse>> {
    let exercise_id = parse_id(&id, "Exercise")?;
    let exercise = MeditationService::get(&state.db, exercise_id).await?;
    Ok(Json(exercise))
}

/// POST /api/meditation/:id/complete - Track completion
async fn complete_exercise(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<CompleteExerciseRequest>,
) -> ApiResult<Json<CompleteExerciseResponse>> {
    let exercise_id = parse_id(&id, "Exercise")?;
    let response = MeditationService::complete(&state.db, exercise_id, req).await?;
    Ok(Json(response))
}

/// POST /api/meditation/:id/favorite - Add or remove from favorites
async fn favorite_exercise(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<FavoriteRequest>,
) -> ApiResult<Json<FavoriteResponse>> {
    let exercise_id = parse_id(&id, "Meditation")?;
    let response = MeditationService::favorite(&state.db, exercise_id, req).await?;
    Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct RefreshQuery {
    category: Option<String>,
}

/// GET /api/meditation/refresh/youtube - Fresh YouTube results (public)
async fn refresh_youtube(
    State(state): State<AppState>,
    Query(query): Query<RefreshQuery>,
) -> Json<Vec<MeditationResponse>> {
    let videos =
        MeditationService::refresh_youtube(&state.http, &state.config.youtube, query.category)
            .await;
    Json(videos)
}
