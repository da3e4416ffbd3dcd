//! Ownership policy
//!
//! Stateless decision function consulted before mutating an owned resource.
//! Comparison is by canonical identifier: both sides are parsed as UUIDs
//! when possible so that differing representations of the same id (case,
//! hyphenation, braced/URN forms) compare equal, with a trimmed string
//! comparison as the fallback for opaque ids.
//!
//! A denial is always 403: the caller is authenticated but not the owner.

use crate::error::ApiError;
use uuid::Uuid;

/// Can `caller` mutate a resource owned by `resource_owner`?
pub fn can_mutate(resource_owner: &str, caller: &str) -> bool {
    let owner = resource_owner.trim();
    let caller = caller.trim();

    match (Uuid::parse_str(owner), Uuid::parse_str(caller)) {
        (Ok(a), Ok(b)) => a == b,
        _ => owner == caller,
    }
}

/// Ownership check for handlers: `Forbidden` unless the caller owns the
/// resource.
pub fn ensure_owner(resource_owner: Uuid, caller: Uuid) -> Result<(), ApiError> {
    if can_mutate(&resource_owner.to_string(), &caller.to_string()) {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Not authorized".to_string()))
    }
}
