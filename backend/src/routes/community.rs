//! Community API routes
//!
//! Reading is public; posting, commenting, and liking require
//! authentication; resolving requires ownership.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::parse_id;
use crate::services::CommunityService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use mindwell_shared::types::{
    CommentResponse, CreateCommentRequest, CreatePostRequest, LikeResponse, PostListQuery,
    PostListResponse, PostResponse, ResolveResponse,
};

/// Create community routes
pub fn community_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts).post(create_post))
        .route("/:id", get(get_post))
        .route("/:id/comments", post(add_comment))
        .route("/:id/like", post(toggle_like))
        .route("/:id/resolve", put(resolve_post))
}

/// GET /api/community - Paginated, filterable post list (public)
async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<PostListQuery>,
) -> ApiResult<Json<PostListResponse>> {
    let posts = CommunityService::list(&state.db, query).await?;
    Ok(Json(posts))
}

/// GET /api/community/:id - Single post with comments (public)
async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PostResponse>> {
    let post_id = parse_id(&id, "Post")?;
    let post = CommunityService::get(&state.db, post_id).await?;
    Ok(Json(post))
}

/// POST /api/community - Create a post
async fn create_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreatePostRequest>,
) -> ApiResult<(StatusCode, Json<PostResponse>)> {
    let post = CommunityService::create(&state.db, auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// POST /api/community/:id/comments - Comment on a post
async fn add_comment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let post_id = parse_id(&id, "Post")?;
    let comment = CommunityService::add_comment(&state.db, auth.user_id, post_id, req).await?;
    Ok((StatusCode::CREATED, Json(comment)))
}

/// POST /api/community/:id/like - Toggle a like
async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<LikeResponse>> {
    let post_id = parse_id(&id, "Post")?;
    let response = CommunityService::toggle_like(&state.db, auth.user_id, post_id).await?;
    Ok(Json(response))
}

/// PUT /api/community/:id/resolve - Toggle resolved; author only
async fn resolve_post(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ResolveResponse>> {
    let post_id = parse_id(&id, "Post")?;
    let response = CommunityService::resolve(&state.db, auth.user_id, post_id).await?;
    Ok(Json(response))
}
