//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use kernel::id::{CalculationId, UserId};
use kernel::page::Page;

use crate::domain::entities::{Calculation, EvaluatedCalculation};
use crate::error::CalcResult;

/// Calculation repository trait
#[trait_variant::make(CalculationRepository: Send)]
pub trait LocalCalculationRepository {
    /// Insert an evaluated calculation and return the stored row
    async fn create(
        &self,
        calculation: &EvaluatedCalculation,
        user_id: Option<UserId>,
    ) -> CalcResult<Calculation>;

    /// Find calculation by ID
    async fn find_by_id(&self, id: CalculationId) -> CalcResult<Option<Calculation>>;

    /// List calculations in ID order, optionally restricted to one owner
    async fn list(&self, user_id: Option<UserId>, page: Page) -> CalcResult<Vec<Calculation>>;

    /// Replace operands, tag and result; `None` if the row does not exist
    async fn update(
        &self,
        id: CalculationId,
        calculation: &EvaluatedCalculation,
    ) -> CalcResult<Option<Calculation>>;

    /// Delete a calculation; `false` if the row did not exist
    async fn delete(&self, id: CalculationId) -> CalcResult<bool>;
}
