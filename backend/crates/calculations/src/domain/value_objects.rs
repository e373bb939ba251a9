//! Domain Value Objects
//!
//! Immutable value types for the calculation domain.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::CalculationError;

/// Operation tag
///
/// The set is closed: a fifth operation is a code change, not a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationType {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl CalculationType {
    pub const ALL: [CalculationType; 4] = [
        CalculationType::Add,
        CalculationType::Subtract,
        CalculationType::Multiply,
        CalculationType::Divide,
    ];

    /// Canonical wire/database tag
    pub const fn as_str(&self) -> &'static str {
        match self {
            CalculationType::Add => "add",
            CalculationType::Subtract => "subtract",
            CalculationType::Multiply => "multiply",
            CalculationType::Divide => "divide",
        }
    }
}

impl FromStr for CalculationType {
    type Err = CalculationError;

    /// Exact, case-sensitive match on the canonical tag
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        CalculationType::ALL
            .into_iter()
            .find(|op| op.as_str() == tag)
            .ok_or_else(|| CalculationError::UnknownOperation(tag.to_owned()))
    }
}

impl fmt::Display for CalculationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated calculation input
///
/// Construction enforces `b != 0` for divide; evaluation checks it again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    a: f64,
    b: f64,
    calc_type: CalculationType,
}

impl CalculationRequest {
    pub fn new(a: f64, b: f64, calc_type: CalculationType) -> Result<Self, CalculationError> {
        if calc_type == CalculationType::Divide && b == 0.0 {
            return Err(CalculationError::DivisionByZero);
        }
        Ok(Self { a, b, calc_type })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn calc_type(&self) -> CalculationType {
        self.calc_type
    }
}

/// Value produced by evaluating a request, with the tag that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationResult {
    pub value: f64,
    pub calc_type: CalculationType,
}
