//! Domain Services
//!
//! Pure calculation logic: strategy resolution and evaluation.
//!
//! Arithmetic is IEEE-754 binary64 with the default round-to-nearest,
//! ties-to-even mode. No further rounding is applied.

use crate::domain::entities::EvaluatedCalculation;
use crate::domain::value_objects::{CalculationRequest, CalculationResult, CalculationType};
use crate::error::CalculationError;

/// Select the strategy for an operation tag
pub fn resolve(tag: &str) -> Result<CalculationType, CalculationError> {
    tag.parse()
}

impl CalculationType {
    /// Apply this operation to two operands
    ///
    /// Divide checks for a zero divisor before dividing, independent of any
    /// validation done when the request was built.
    pub fn compute(self, a: f64, b: f64) -> Result<f64, CalculationError> {
        match self {
            CalculationType::Add => Ok(a + b),
            CalculationType::Subtract => Ok(a - b),
            CalculationType::Multiply => Ok(a * b),
            CalculationType::Divide => {
                if b == 0.0 {
                    return Err(CalculationError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

/// Evaluate a validated request
///
/// Overflow to infinity (or NaN) is reported rather than returned.
pub fn evaluate(request: &CalculationRequest) -> Result<CalculationResult, CalculationError> {
    let calc_type = request.calc_type();
    let value = calc_type.compute(request.a(), request.b())?;
    if !value.is_finite() {
        return Err(CalculationError::NonFiniteResult(calc_type));
    }
    Ok(CalculationResult { value, calc_type })
}

/// Resolve, validate and evaluate raw input in one step
pub fn prepare(a: f64, b: f64, tag: &str) -> Result<EvaluatedCalculation, CalculationError> {
    let calc_type = resolve(tag)?;
    let request = CalculationRequest::new(a, b, calc_type)?;
    let result = evaluate(&request)?;
    Ok(EvaluatedCalculation { request, result })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compute(tag: &str, a: f64, b: f64) -> Result<f64, CalculationError> {
        resolve(tag)?.compute(a, b)
    }

    #[test]
    fn test_resolve_known_tags() {
        assert_eq!(resolve("add").unwrap(), CalculationType::Add);
        assert_eq!(resolve("subtract").unwrap(), CalculationType::Subtract);
        assert_eq!(resolve("multiply").unwrap(), CalculationType::Multiply);
        assert_eq!(resolve("divide").unwrap(), CalculationType::Divide);
    }

    #[test]
    fn test_resolve_unknown_tag() {
        assert!(matches!(
            resolve("modulo"),
            Err(CalculationError::UnknownOperation(tag)) if tag == "modulo"
        ));
    }

    #[test]
    fn test_compute_table() {
        assert_eq!(compute("add", 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(compute("subtract", 5.0, 2.0).unwrap(), 3.0);
        assert_eq!(compute("multiply", 4.0, 5.0).unwrap(), 20.0);
        assert_eq!(compute("divide", 10.0, 2.0).unwrap(), 5.0);
    }

    #[test]
    fn test_compute_negative_and_fractional() {
        assert_eq!(compute("add", -5.0, 3.0).unwrap(), -2.0);
        assert_eq!(compute("subtract", 2.0, 5.0).unwrap(), -3.0);
        assert_eq!(compute("multiply", -1.5, 4.0).unwrap(), -6.0);
        assert_eq!(compute("divide", 1.0, 4.0).unwrap(), 0.25);
        // binary64 rounding, not decimal
        assert_eq!(compute("add", 0.1, 0.2).unwrap(), 0.1_f64 + 0.2_f64);
    }

    #[test]
    fn test_divide_by_zero() {
        assert!(matches!(
            compute("divide", 7.0, 0.0),
            Err(CalculationError::DivisionByZero)
        ));
        assert!(matches!(
            compute("divide", 7.0, -0.0),
            Err(CalculationError::DivisionByZero)
        ));
        assert!(matches!(
            compute("divide", 0.0, 0.0),
            Err(CalculationError::DivisionByZero)
        ));
    }

    #[test]
    fn test_zero_b_is_fine_outside_divide() {
        assert_eq!(compute("add", 7.0, 0.0).unwrap(), 7.0);
        assert_eq!(compute("subtract", 7.0, 0.0).unwrap(), 7.0);
        assert_eq!(compute("multiply", 7.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_compute_is_idempotent() {
        for op in CalculationType::ALL {
            let first = op.compute(9.0, 3.0).unwrap();
            let second = op.compute(9.0, 3.0).unwrap();
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn test_evaluate_tags_result() {
        let request = CalculationRequest::new(9.0, 3.0, CalculationType::Divide).unwrap();
        let result = evaluate(&request).unwrap();
        assert_eq!(result.value, 3.0);
        assert_eq!(result.calc_type, CalculationType::Divide);
    }

    #[test]
    fn test_evaluate_rejects_overflow() {
        let request = CalculationRequest::new(f64::MAX, 10.0, CalculationType::Multiply).unwrap();
        assert!(matches!(
            evaluate(&request),
            Err(CalculationError::NonFiniteResult(CalculationType::Multiply))
        ));

        let request = CalculationRequest::new(f64::MAX, f64::MAX, CalculationType::Add).unwrap();
        assert!(evaluate(&request).is_err());
    }

    #[test]
    fn test_prepare() {
        let evaluated = prepare(9.0, 3.0, "divide").unwrap();
        assert_eq!(evaluated.request.a(), 9.0);
        assert_eq!(evaluated.result.value, 3.0);

        assert!(matches!(
            prepare(1.0, 0.0, "divide"),
            Err(CalculationError::DivisionByZero)
        ));
        assert!(matches!(
            prepare(1.0, 2.0, "power"),
            Err(CalculationError::UnknownOperation(_))
        ));
    }
}
