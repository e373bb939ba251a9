//! User Entity
//!
//! Account data that is safe to hand to any layer. The credential hash
//! lives in [`UserCredentials`] and is only loaded for login.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::value_object::{email::Email, user_name::UserName, user_password::UserPassword};

/// User entity
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Database-assigned identifier
    pub id: UserId,
    /// User name (unique, for login and display)
    pub username: UserName,
    /// Email (unique, domain lowercased)
    pub email: Email,
    pub created_at: DateTime<Utc>,
}

/// Validated account waiting to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
}

/// A user together with their stored credential hash
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: UserPassword,
}
