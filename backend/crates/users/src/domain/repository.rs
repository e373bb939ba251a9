//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::UserId;
use kernel::page::Page;

use crate::domain::entity::user::{NewUser, User, UserCredentials};
use crate::domain::value_object::{user_name::UserName, user_password::UserPassword};
use crate::error::UserResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user
    ///
    /// A taken username or email yields `UserError::AlreadyExists`.
    async fn create(&self, user: &NewUser) -> UserResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> UserResult<Option<User>>;

    /// List users in ID order
    async fn list(&self, page: Page) -> UserResult<Vec<User>>;

    /// Delete a user; `false` if the row did not exist
    async fn delete(&self, id: UserId) -> UserResult<bool>;

    /// Replace the stored credential hash
    ///
    /// A missing row yields `UserError::NotFound`.
    async fn update_password_hash(&self, id: UserId, password_hash: &UserPassword)
    -> UserResult<()>;

    /// Load a user with their credential hash for login
    ///
    /// A stored hash that fails to parse yields `UserError::CorruptCredential`.
    async fn find_credentials(&self, username: &UserName) -> UserResult<Option<UserCredentials>>;
}
