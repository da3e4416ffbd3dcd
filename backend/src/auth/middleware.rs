//! Authentication gate
//!
//! Runs before any handler requiring identity: extracts a token from the
//! request headers, verifies it, and attaches the resolved identity to the
//! request. Two header conventions are honored for client compatibility:
//!
//! - `x-auth-token: <token>` (raw value, checked first)
//! - `Authorization: Bearer <token>` (scheme prefix stripped), or
//!   `Authorization: <token>` with no scheme
//!
//! Diagnostics log which header forms were present and the verification
//! outcome, never the token value or the signing secret.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tracing::debug;
use uuid::Uuid;

/// Legacy header carrying the raw token
const X_AUTH_TOKEN: &str = "x-auth-token";

/// Bearer scheme prefix; the match is case-sensitive
const BEARER_PREFIX: &str = "Bearer ";

/// Authenticated identity attached to the request after verification
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
}

/// Pull a token out of the header set. `x-auth-token` wins over
/// `Authorization` when both are present.
fn extract_token(headers: &HeaderMap) -> Option<String> {
    let x_auth = headers.get(X_AUTH_TOKEN).and_then(|v| v.to_str().ok());
    let authorization = headers.get(AUTHORIZATION).and_then(|v| v.to_str().ok());

    debug!(
        x_auth_token = x_auth.is_some(),
        authorization = authorization.is_some(),
        "auth gate: token extraction"
    );

    if let Some(token) = x_auth {
        return Some(token.to_string());
    }

    authorization.map(|header| {
        header
            .strip_prefix(BEARER_PREFIX)
            .unwrap_or(header)
            .to_string()
    })
}

fn authenticate(headers: &HeaderMap, state: &AppState) -> Result<AuthUser, ApiError> {
    let token = extract_token(headers).ok_or_else(|| {
        debug!("auth gate: no token provided");
        ApiError::Unauthenticated("No token, authorization denied".to_string())
    })?;

    match state.jwt().verify(&token) {
        Ok(user_id) => {
            debug!(%user_id, "auth gate: token accepted");
            Ok(AuthUser { user_id })
        }
        Err(_) => {
            debug!("auth gate: token rejected");
            Err(ApiError::Unauthenticated("Token is not valid".to_string()))
        }
    }
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        authenticate(&parts.headers, &app_state)
    }
}

/// Middleware function for authentication (alternative to the extractor)
///
/// Use with `middleware::from_fn_with_state` when a whole route group
/// should sit behind the gate.
#[allow(dead_code)]
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = authenticate(request.headers(), &state)?;
    request.extensions_mut().insert(auth_user);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(
                axum::http::HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_no_headers_no_token() {
        assert_eq!(extract_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_x_auth_token_used_directly() {
        let map = headers(&[("x-auth-token", "tok-123")]);
        assert_eq!(extract_token(&map).as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_bearer_prefix_stripped() {
        let map = headers(&[("authorization", "Bearer tok-456")]);
        assert_eq!(extract_token(&map).as_deref(), Some("tok-456"));
    }

    #[test]
    fn test_authorization_without_scheme_used_raw() {
        let map = headers(&[("authorization", "tok-789")]);
        assert_eq!(extract_token(&map).as_deref(), Some("tok-789"));
    }

    #[test]
    fn test_bearer_match_is_case_sensitive() {
        // "bearer " is not a recognized scheme spelling; the raw header
        // value is treated as the token
        let map = headers(&[("authorization", "bearer tok-1")]);
        assert_eq!(extract_token(&map).as_deref(), Some("bearer tok-1"));
    }

    #[test]
    fn test_x_auth_token_wins_over_authorization() {
        let map = headers(&[
            ("authorization", "Bearer from-authorization"),
            ("x-auth-token", "from-x-auth"),
        ]);
        assert_eq!(extract_token(&map).as_deref(), Some("from-x-auth"));
    }
}
