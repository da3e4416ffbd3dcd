//! JWT token issuance and verification
//!
//! Tokens are stateless: validity is fully determined by signature and
//! expiry at verification time. There is no revocation list, so a token
//! stays valid for its full 24-hour lifetime regardless of later account
//! changes.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Fixed claims structure. No ad hoc payload fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Pre-computed JWT keys. Expensive to derive, so they are created once at
/// startup and shared via Arc.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
        }
    }
}

/// Token codec: signs and verifies compact, expiring identity tokens.
///
/// Build one at startup from the configured secret and store it in
/// `AppState`; cloning is cheap.
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    token_expiry_secs: i64,
}

impl JwtService {
    pub fn new(secret: &str, token_expiry_secs: i64) -> Self {
        Self {
            keys: JwtKeys::new(secret),
            token_expiry_secs,
        }
    }

    /// Issue a signed token for a user, expiring after the configured
    /// horizon (24 hours in the default configuration).
    #[inline]
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        self.issue_at(user_id, Utc::now())
    }

    fn issue_at(&self, user_id: Uuid, now: DateTime<Utc>) -> Result<String> {
        let exp = now + Duration::seconds(self.token_expiry_secs);

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(|e| anyhow::anyhow!("Failed to sign token: {}", e))
    }

    /// Verify a token and return the identity it asserts.
    ///
    /// Malformed tokens, signature mismatches, and expired tokens all fail
    /// with the same error: the distinction is logged at debug level and
    /// never surfaces to the caller.
    pub fn verify(&self, token: &str) -> Result<Uuid> {
        // No clock-skew tolerance: a token is valid strictly before `exp`.
        let mut validation = Validation::default();
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(reason = %e, "token verification failed");
                anyhow::anyhow!("invalid token")
            })?;

        Uuid::parse_str(&claims.sub).map_err(|_| {
            tracing::debug!("token subject is not a valid identifier");
            anyhow::anyhow!("invalid token")
        })
    }

    /// Token lifetime in seconds
    #[inline]
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret", 86_400)
    }

    #[test]
    fn test_issue_then_verify_resolves_same_id() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        let token = service.issue(user_id).unwrap();
        let resolved = service.verify(&token).unwrap();

        assert_eq!(resolved, user_id);
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = create_test_service();
        assert!(service.verify("not.a.token").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let service = create_test_service();
        let token = service.issue(Uuid::new_v4()).unwrap();

        // Flip one character in the signature segment
        let mut parts: Vec<String> = token.split('.').map(String::from).collect();
        assert_eq!(parts.len(), 3);
        let sig = parts[2].clone();
        let flipped = if sig.starts_with('A') { 'B' } else { 'A' };
        parts[2] = format!("{}{}", flipped, &sig[1..]);
        let tampered = parts.join(".");

        assert!(service.verify(&tampered).is_err());
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let service = create_test_service();
        let other = JwtService::new("another-secret", 86_400);

        let token = other.issue(Uuid::new_v4()).unwrap();
        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        // Issued far enough in the past that the 24h horizon has elapsed
        let issued = Utc::now() - Duration::seconds(86_401);
        let token = service.issue_at(user_id, issued).unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_token_valid_just_before_expiry() {
        let service = create_test_service();
        let user_id = Uuid::new_v4();

        // One minute of lifetime left
        let issued = Utc::now() - Duration::seconds(86_400 - 60);
        let token = service.issue_at(user_id, issued).unwrap();

        assert_eq!(service.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn test_non_uuid_subject_rejected() {
        let service = create_test_service();

        let claims = Claims {
            sub: "not-an-id".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_service_is_clone_cheap() {
        let service = create_test_service();
        let _cloned = service.clone(); // Arc increments only
    }
}
