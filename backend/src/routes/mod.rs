//! Route definitions for the Mindwell API
//!
//! This module organizes all API routes and applies middleware.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, HeaderName, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

mod auth;
mod chat;
mod community;
mod health;
mod journal;
mod meditation;
mod mood;
mod sleep;
mod therapy;
mod tools;

#[cfg(test)]
mod auth_tests;

pub use auth::auth_routes;
pub use chat::chat_routes;
pub use community::community_routes;
pub use journal::journal_routes;
pub use meditation::meditation_routes;
pub use mood::mood_routes;
pub use sleep::sleep_routes;
pub use therapy::therapy_routes;
pub use tools::tools_routes;

/// Parse a path segment as a resource id; an unparseable id resolves to
/// nothing, so it is reported the same way as an unknown one.
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(format!("{resource} not found")))
}

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    HeaderName::from_static("x-auth-token"),
                ]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(health::api_test))
        .nest("/auth", auth::auth_routes())
        .nest("/journal", journal::journal_routes())
        .nest("/meditation", meditation::meditation_routes())
        .nest("/mood", mood::mood_routes())
        .nest("/chat", chat::chat_routes())
        .nest("/community", community::community_routes())
        .nest("/tools", tools::tools_routes())
        .nest("/sleep", sleep::sleep_routes())
        .nest("/therapy", therapy::therapy_routes())
}
