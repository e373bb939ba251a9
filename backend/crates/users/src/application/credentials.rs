//! Credential work on the blocking pool
//!
//! PBKDF2 at the production iteration count takes tens of milliseconds of
//! CPU, so it is kept off the async workers.

use crate::domain::value_object::user_password::{RawPassword, UserPassword};
use crate::error::{UserError, UserResult};

/// Result of checking a password against a stored hash
pub(crate) enum Verification {
    Rejected,
    /// `rehashed` carries a fresh hash when the stored one used outdated parameters
    Accepted { rehashed: Option<UserPassword> },
}

pub(crate) async fn hash(raw: RawPassword) -> UserResult<UserPassword> {
    tokio::task::spawn_blocking(move || raw.hash())
        .await
        .map_err(|e| UserError::Internal(format!("password hashing task failed: {e}")))
}

pub(crate) async fn verify(stored: UserPassword, raw: RawPassword) -> UserResult<Verification> {
    tokio::task::spawn_blocking(move || {
        if !stored.verify(&raw) {
            return Verification::Rejected;
        }
        let rehashed = stored.needs_rehash().then(|| raw.hash());
        Verification::Accepted { rehashed }
    })
    .await
    .map_err(|e| UserError::Internal(format!("password verification task failed: {e}")))
}
