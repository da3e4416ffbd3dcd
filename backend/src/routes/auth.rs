//! Authentication routes
//!
//! Signup and login issue a 24-hour token; `/me` and `/verify-token` are
//! behind the auth gate.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use mindwell_shared::types::{
    AuthResponse, LoginRequest, SignupRequest, TokenCheckResponse, UserProfile,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/verify-token", get(verify_token))
}

/// POST /api/auth/signup - Register a new user
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response =
        UserService::signup(&state.db, state.jwt(), req.name, req.email, req.password).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/auth/login - Login with email and password
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = UserService::login(&state.db, state.jwt(), req.email, req.password).await?;
    Ok(Json(response))
}

/// GET /api/auth/me - Current user profile
async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserProfile>> {
    let profile = UserService::profile(&state.db, auth.user_id).await?;
    Ok(Json(profile))
}

/// GET /api/auth/verify-token - Probe whether the presented token is valid
async fn verify_token(auth: AuthUser) -> Json<TokenCheckResponse> {
    Json(TokenCheckResponse {
        valid: true,
        user_id: auth.user_id.to_string(),
    })
}
