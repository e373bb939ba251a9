//! Delete Calculation Use Case

use kernel::id::CalculationId;
use std::sync::Arc;

use crate::domain::repository::CalculationRepository;
use crate::error::{CalcResult, CalculationError};

/// Delete Calculation Use Case
pub struct DeleteCalculationUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCalculationUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: CalculationId) -> CalcResult<()> {
        if !self.repo.delete(id).await? {
            return Err(CalculationError::NotFound);
        }

        tracing::info!(calculation_id = %id, "Calculation deleted");
        Ok(())
    }
}
