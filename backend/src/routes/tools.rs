//! Self-help tools API routes

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::services::ToolsService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use mindwell_shared::types::{
    AnalyzeEmotionRequest, Challenge, ChallengeCompleteResponse, EmotionAnalysis, ReframeRequest,
    ReframeResponse,
};

/// Create tools routes
pub fn tools_routes() -> Router<AppState> {
    Router::new()
        .route("/challenges", get(get_challenges))
        .route("/challenges/:id/complete", post(complete_challenge))
        .route("/reframe", post(reframe_thought))
        .route("/analyze-emotion", post(analyze_emotion))
}

/// GET /api/tools/challenges - Daily challenge list
async fn get_challenges(_auth: AuthUser) -> Json<Vec<Challenge>> {
    Json(ToolsService::challenges())
}

/// POST /api/tools/challenges/:id/complete - Mark a challenge complete
async fn complete_challenge(
    auth: AuthUser,
    Path(id): Path<String>,
) -> Json<ChallengeCompleteResponse> {
    Json(ToolsService::complete_challenge(
        &id,
        &auth.user_id.to_string(),
    ))
}

/// POST /api/tools/reframe - Reframe a negative thought
async fn reframe_thought(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<ReframeRequest>,
) -> ApiResult<Json<ReframeResponse>> {
    let thought = req
        .thought
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Thought text is required".to_string()))?;

    let response = ToolsService::reframe(state.ai(), &thought).await;
    Ok(Json(response))
}

/// POST /api/tools/analyze-emotion - Analyze emotional state from text
async fn analyze_emotion(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(req): Json<AnalyzeEmotionRequest>,
) -> ApiResult<Json<EmotionAnalysis>> {
    let text = req
        .text
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Emotion text is required".to_string()))?;

    let analysis = ToolsService::analyze_emotion(state.ai(), &text).await;
    Ok(Json(analysis))
}
