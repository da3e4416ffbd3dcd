//! Password hashing with argon2
//!
//! Argon2id is deliberately slow, so the async variants run the work on the
//! blocking thread pool instead of stalling the runtime.

use anyhow::Result;
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

/// Hash a password (blocking)
pub fn hash(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;
    Ok(hash.to_string())
}

/// Verify a password against a stored hash (blocking)
pub fn verify(password: &str, stored: &str) -> Result<bool> {
    let parsed =
        PasswordHash::new(stored).map_err(|e| anyhow::anyhow!("Invalid hash format: {}", e))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Hash a password on the blocking thread pool
pub async fn hash_async(password: String) -> Result<String> {
    tokio::task::spawn_blocking(move || hash(&password))
        .await
        .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
}

/// Verify a password on the blocking thread pool
pub async fn verify_async(password: String, stored: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || verify(&password, &stored))
        .await
        .map_err(|e| anyhow::anyhow!("Task join error: {}", e))?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "quiet-mind-123";
        let stored = hash(password).unwrap();

        assert!(verify(password, &stored).unwrap());
        assert!(!verify("wrong-password", &stored).unwrap());
    }

    #[test]
    fn test_salted_hashes_differ() {
        let password = "same-password";
        let h1 = hash(password).unwrap();
        let h2 = hash(password).unwrap();

        assert_ne!(h1, h2);
        assert!(verify(password, &h1).unwrap());
        assert!(verify(password, &h2).unwrap());
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let password = "async-password".to_string();
        let stored = hash_async(password.clone()).await.unwrap();

        assert!(verify_async(password, stored.clone()).await.unwrap());
        assert!(!verify_async("nope".to_string(), stored).await.unwrap());
    }
}
