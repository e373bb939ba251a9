//! Create Calculation Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::Calculation;
use crate::domain::repository::CalculationRepository;
use crate::domain::services::prepare;
use crate::error::CalcResult;

/// Input DTO for create calculation
#[derive(Debug, Clone)]
pub struct CreateCalculationInput {
    pub a: f64,
    pub b: f64,
    /// Raw operation tag, resolved by the use case
    pub calc_type: String,
    pub user_id: Option<UserId>,
}

/// Create Calculation Use Case
pub struct CreateCalculationUseCase<R>
where
    R: CalculationRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCalculationUseCase<R>
where
    R: CalculationRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate, evaluate, then persist
    ///
    /// Nothing is written unless evaluation succeeded.
    pub async fn execute(&self, input: CreateCalculationInput) -> CalcResult<Calculation> {
        let evaluated = prepare(input.a, input.b, &input.calc_type)?;

        let calculation = self.repo.create(&evaluated, input.user_id).await?;

        tracing::info!(
            calculation_id = %calculation.id,
            calc_type = %calculation.calc_type,
            user_id = ?calculation.user_id.map(|id| id.get()),
            "Calculation created"
        );

        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CalculationType;
    use crate::error::CalculationError;
    use crate::infra::memory::InMemoryCalculationRepository;

    fn input(a: f64, b: f64, calc_type: &str) -> CreateCalculationInput {
        CreateCalculationInput {
            a,
            b,
            calc_type: calc_type.to_string(),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_divide_scenario_stores_result() {
        let repo = Arc::new(InMemoryCalculationRepository::default());
        let use_case = CreateCalculationUseCase::new(repo.clone());

        let calculation = use_case.execute(input(9.0, 3.0, "divide")).await.unwrap();

        assert_eq!(calculation.result, Some(3.0));
        assert_eq!(calculation.calc_type, CalculationType::Divide);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_division_by_zero_stores_nothing() {
        let repo = Arc::new(InMemoryCalculationRepository::default());
        let use_case = CreateCalculationUseCase::new(repo.clone());

        let err = use_case.execute(input(1.0, 0.0, "divide")).await.unwrap_err();

        assert!(matches!(err, CalculationError::DivisionByZero));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_operation_stores_nothing() {
        let repo = Arc::new(InMemoryCalculationRepository::default());
        let use_case = CreateCalculationUseCase::new(repo.clone());

        let err = use_case.execute(input(1.0, 2.0, "modulo")).await.unwrap_err();

        assert!(matches!(err, CalculationError::UnknownOperation(_)));
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_owner_is_recorded() {
        let repo = Arc::new(InMemoryCalculationRepository::with_users([UserId::from_i64(4)]));
        let use_case = CreateCalculationUseCase::new(repo.clone());

        let calculation = use_case
            .execute(CreateCalculationInput {
                user_id: Some(UserId::from_i64(4)),
                ..input(2.0, 3.0, "add")
            })
            .await
            .unwrap();
        assert_eq!(calculation.user_id, Some(UserId::from_i64(4)));

        let err = use_case
            .execute(CreateCalculationInput {
                user_id: Some(UserId::from_i64(99)),
                ..input(2.0, 3.0, "add")
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CalculationError::OwnerNotFound));
        assert_eq!(repo.len(), 1);
    }
}
