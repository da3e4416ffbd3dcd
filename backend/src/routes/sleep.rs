//! Sleep tracking API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::parse_id;
use crate::services::SleepService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use mindwell_shared::types::{
    CreateSleepRequest, MessageResponse, SleepRecordResponse, UpdateSleepRequest,
};

/// Create sleep routes
pub fn sleep_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_records).post(create_record))
        .route("/:id", put(update_record).delete(delete_record))
}

/// GET /api/sleep - The current user's sleep records
async fn list_records(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<SleepRecordResponse>>> {
    let records = SleepService::list(&state.db, auth.user_id).await?;
    Ok(Json(records))
}

/// POST /api/sleep - Add a new sleep record
async fn create_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSleepRequest>,
) -> ApiResult<Json<SleepRecordResponse>> {
    let record = SleepService::create(&state.db, auth.user_id, req).await?;
    Ok(Json(record))
}

/// PUT /api/sleep/:id - Update a sleep record; owner only
async fn update_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateSleepRequest>,
) -> ApiResult<Json<SleepRecordResponse>> {
    let record_id = parse_id(&id, "Sleep record")?;
    let record = SleepService::update(&state.db, auth.user_id, record_id, req).await?;
    Ok(Json(record))
}

/// DELETE /api/sleep/:id - Delete a sleep record; owner only
async fn delete_record(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let record_id = parse_id(&id, "Sleep record")?;
    let response = SleepService::delete(&state.db, auth.user_id, record_id).await?;
    Ok(Json(response))
}
