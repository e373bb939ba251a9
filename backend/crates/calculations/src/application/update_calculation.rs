//! Update Calculation Use Case

use kernel::id::CalculationId;
use std::sync::Arc;

use crate::domain::entities::Calculation;
use crate::domain::repository::CalculationRepository;
use crate::domain::services::prepare;
use crate::error::{CalcResult, CalculationError};

/// Input DTO for update calculation
#[derive(Debug, Clone)]
pub struct UpdateCalculationInput {
    pub a: f64,
    pub b: f64,
    pub calc_type: String,
}

/// Update Calculation Use Case
///
/// Replaces operands and tag and recomputes the result. Ownership is kept.
pub struct UpdateCalculationUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCalculationUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        id: CalculationId,
        input: UpdateCalculationInput,
    ) -> CalcResult<Calculation> {
        let evaluated = prepare(input.a, input.b, &input.calc_type)?;

        let calculation = self
            .repo
            .update(id, &evaluated)
            .await?
            .ok_or(CalculationError::NotFound)?;

        tracing::info!(
            calculation_id = %calculation.id,
            calc_type = %calculation.calc_type,
            "Calculation updated"
        );

        Ok(calculation)
    }
}
