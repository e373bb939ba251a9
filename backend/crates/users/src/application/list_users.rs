//! List Users Use Case

use kernel::page::{Page, PageParams};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::UserResult;

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<UsersConfig>,
}

impl<R> ListUsersUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<UsersConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, params: PageParams) -> UserResult<Vec<User>> {
        let page = Page::from_params(
            params,
            self.config.default_page_size,
            self.config.max_page_size,
        );
        self.repo.list(page).await
    }
}
