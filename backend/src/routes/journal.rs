//! Journal API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::parse_id;
use crate::services::JournalService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use mindwell_shared::types::{CreateJournalRequest, JournalEntryResponse};

/// Create journal routes
pub fn journal_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route("/:id", get(get_entry))
}

/// GET /api/journal - All journal entries for the current user
async fn list_entries(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<JournalEntryResponse>>> {
    let entries = JournalService::list(&state.db, auth.user_id).await?;
    Ok(Json(entries))
}

/// POST /api/journal - Create a new journal entry
async fn create_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateJournalRequest>,
) -> ApiResult<Json<JournalEntryResponse>> {
    let entry = JournalService::create(&state.db, auth.user_id, req).await?;
    Ok(Json(entry))
}

/// GET /api/journal/:id - A specific entry; owner only
async fn get_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<JournalEntryResponse>> {
    let entry_id = parse_id(&id, "Journal entry")?;
    let entry = JournalService::get(&state.db, auth.user_id, entry_id).await?;
    Ok(Json(entry))
}
