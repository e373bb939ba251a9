//! List Calculations Use Case

use kernel::id::UserId;
use kernel::page::{Page, PageParams};
use std::sync::Arc;

use crate::application::config::CalculationsConfig;
use crate::domain::entities::Calculation;
use crate::domain::repository::CalculationRepository;
use crate::error::CalcResult;

/// Input DTO for list calculations
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCalculationsInput {
    pub user_id: Option<UserId>,
    pub page: PageParams,
}

/// List Calculations Use Case
pub struct ListCalculationsUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
    config: Arc<CalculationsConfig>,
}

impl<R> ListCalculationsUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CalculationsConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListCalculationsInput) -> CalcResult<Vec<Calculation>> {
        let page = Page::from_params(
            input.page,
            self.config.default_page_size,
            self.config.max_page_size,
        );
        self.repo.list(input.user_id, page).await
    }
}
