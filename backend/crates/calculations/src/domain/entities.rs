//! Domain Entities
//!
//! Core business entities for the calculation domain.

use chrono::{DateTime, Utc};
use kernel::id::{CalculationId, UserId};

use crate::domain::value_objects::{CalculationRequest, CalculationResult, CalculationType};

/// Persisted calculation record
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub id: CalculationId,
    pub a: f64,
    pub b: f64,
    pub calc_type: CalculationType,
    /// Nullable in storage; every row written by this service has one
    pub result: Option<f64>,
    /// Owning user, if any
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

/// A validated request together with its evaluated result
///
/// This is the only thing repositories accept for writes, so a row can
/// never be stored without having passed evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluatedCalculation {
    pub request: CalculationRequest,
    pub result: CalculationResult,
}

impl EvaluatedCalculation {
    pub fn a(&self) -> f64 {
        self.request.a()
    }

    pub fn b(&self) -> f64 {
        self.request.b()
    }

    pub fn calc_type(&self) -> CalculationType {
        self.request.calc_type()
    }

    pub fn value(&self) -> f64 {
        self.result.value
    }
}
