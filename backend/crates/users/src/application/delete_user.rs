//! Delete User Use Case
//!
//! Calculations owned by the user are kept with their owner cleared.

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::error::{UserError, UserResult};

/// Delete user use case
pub struct DeleteUserUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: UserId) -> UserResult<()> {
        if !self.repo.delete(id).await? {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }
}
