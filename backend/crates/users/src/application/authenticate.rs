//! Authenticate Use Case
//!
//! Checks a username and password against the stored credential hash.
//! Unknown users, wrong passwords and unreadable hashes all produce the same
//! `InvalidCredentials` error, and all of them pay for one key derivation.
//! A hash stored with outdated parameters is replaced after a successful login.

use std::sync::Arc;

use crate::application::credentials::{self, Verification};
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{UserError, UserResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub username: String,
    pub password: String,
}

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> AuthenticateUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> UserResult<User> {
        let (Ok(username), Ok(raw)) = (
            UserName::new(&input.username),
            RawPassword::new(input.password),
        ) else {
            return Err(UserError::InvalidCredentials);
        };

        let found = match self.repo.find_credentials(&username).await {
            Ok(found) => found,
            Err(UserError::CorruptCredential(user_id)) => {
                tracing::error!(user_id = %user_id, "Malformed stored credential, rejecting login");
                None
            }
            Err(e) => return Err(e),
        };

        let Some(found) = found else {
            credentials::verify(UserPassword::decoy(), raw).await?;
            return Err(UserError::InvalidCredentials);
        };

        let Verification::Accepted { rehashed } =
            credentials::verify(found.password_hash, raw).await?
        else {
            return Err(UserError::InvalidCredentials);
        };

        let user = found.user;
        if let Some(upgraded) = rehashed {
            match self.repo.update_password_hash(user.id, &upgraded).await {
                Ok(()) => tracing::info!(user_id = %user.id, "Credential hash upgraded"),
                Err(e) => {
                    tracing::warn!(user_id = %user.id, error = %e, "Failed to upgrade credential hash")
                }
            }
        }
        tracing::info!(user_id = %user.id, "User authenticated");

        Ok(user)
    }
}
