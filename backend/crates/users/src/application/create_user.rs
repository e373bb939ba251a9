//! Create User Use Case
//!
//! Registers a new account.

use std::sync::Arc;

use crate::application::credentials;
use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    email::Email,
    user_name::UserName,
    user_password::RawPassword,
};
use crate::error::UserResult;

/// Create user input
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Create user use case
pub struct CreateUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> CreateUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateUserInput) -> UserResult<User> {
        let username = UserName::new(&input.username)?;
        let email = Email::new(&input.email)?;
        let raw = RawPassword::new(input.password)?;

        let password_hash = credentials::hash(raw).await?;

        let user = self
            .repo
            .create(&NewUser {
                username,
                email,
                password_hash,
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            username = %user.username,
            "User created"
        );

        Ok(user)
    }
}
