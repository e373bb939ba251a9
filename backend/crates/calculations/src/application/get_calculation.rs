//! Get Calculation Use Case

use kernel::id::CalculationId;
use std::sync::Arc;

use crate::domain::entities::Calculation;
use crate::domain::repository::CalculationRepository;
use crate::error::{CalcResult, CalculationError};

/// Get Calculation Use Case
pub struct GetCalculationUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> GetCalculationUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: CalculationId) -> CalcResult<Calculation> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(CalculationError::NotFound)
    }
}
