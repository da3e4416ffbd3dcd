//! User service for signup, login, and profile lookup
//!
//! Password hashing and verification run on the blocking thread pool.
//! Login failure is uniform: unknown email and wrong password produce the
//! same response, so the endpoint is not an account-existence oracle.

use crate::auth::{password, JwtService};
use crate::error::ApiError;
use crate::repositories::UserRepository;
use mindwell_shared::types::{AuthResponse, UserProfile, UserSummary};
use mindwell_shared::validation::{normalize_email, normalize_name};
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue a token
    pub async fn signup(
        pool: &PgPool,
        jwt: &JwtService,
        name: Option<String>,
        email: Option<String>,
        password_plain: Option<String>,
    ) -> Result<AuthResponse, ApiError> {
        let (name, email, password_plain) = match (name, email, password_plain) {
            (Some(n), Some(e), Some(p)) if !n.is_empty() && !e.is_empty() && !p.is_empty() => {
                (n, e, p)
            }
            _ => {
                return Err(ApiError::Validation(
                    "Please provide all required fields".to_string(),
                ))
            }
        };

        let name = normalize_name(&name);
        let email = normalize_email(&email);

        if !email.validate_email() {
            return Err(ApiError::Validation("Invalid email format".to_string()));
        }

        if UserRepository::email_exists(pool, &email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::BadRequest("User already exists".to_string()));
        }

        let password_hash = password::hash_async(password_plain)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(pool, &name, &email, &password_hash)
            .await
            .map_err(ApiError::Internal)?;

        let token = jwt.issue(user.id).map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            token,
            user: UserSummary {
                id: user.id.to_string(),
                name: user.name,
                email: user.email,
            },
        })
    }

    /// Login with email and password
    pub async fn login(
        pool: &PgPool,
        jwt: &JwtService,
        email: Option<String>,
        password_plain: Option<String>,
    ) -> Result<AuthResponse, ApiError> {
        let (email, password_plain) = match (email, password_plain) {
            (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
            _ => {
                return Err(ApiError::Validation(
                    "Please provide all required fields".to_string(),
                ))
            }
        };

        let email = normalize_email(&email);

        let user = UserRepository::find_by_email(pool, &email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::BadRequest("Invalid credentials".to_string()))?;

        let valid = password::verify_async(password_plain, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::BadRequest("Invalid credentials".to_string()));
        }

        let token = jwt.issue(user.id).map_err(ApiError::Internal)?;

        Ok(AuthResponse {
            token,
            user: UserSummary {
                id: user.id.to_string(),
                name: user.name,
                email: user.email,
            },
        })
    }

    /// Current-user profile; the password hash never leaves this layer
    pub async fn profile(pool: &PgPool, user_id: Uuid) -> Result<UserProfile, ApiError> {
        let user = UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(UserProfile {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            created_at: user.created_at,
        })
    }
}
