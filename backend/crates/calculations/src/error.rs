//! Calculation Error Types
//!
//! Calculation-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::value_objects::CalculationType;

/// Calculation-specific result type alias
pub type CalcResult<T> = Result<T, CalculationError>;

/// Calculation-specific error variants
#[derive(Debug, Error)]
pub enum CalculationError {
    /// Operation tag outside the closed set
    #[error("Unknown operation '{0}'; expected one of add, subtract, multiply, divide")]
    UnknownOperation(String),

    /// Divide requested with a zero divisor
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    /// Finite operands produced an infinite or NaN result
    #[error("Result of {0} is not a finite number")]
    NonFiniteResult(CalculationType),

    /// Calculation record not found
    #[error("Calculation not found.")]
    NotFound,

    /// `user_id` does not reference an existing user
    #[error("Owning user does not exist.")]
    OwnerNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CalculationError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CalculationError::UnknownOperation(_)
            | CalculationError::DivisionByZero
            | CalculationError::NonFiniteResult(_)
            | CalculationError::OwnerNotFound => StatusCode::UNPROCESSABLE_ENTITY,
            CalculationError::NotFound => StatusCode::NOT_FOUND,
            CalculationError::Database(_) | CalculationError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalculationError::UnknownOperation(_)
            | CalculationError::DivisionByZero
            | CalculationError::NonFiniteResult(_)
            | CalculationError::OwnerNotFound => ErrorKind::UnprocessableEntity,
            CalculationError::NotFound => ErrorKind::NotFound,
            CalculationError::Database(_) | CalculationError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    ///
    /// Server-side failures get a generic message; their details only go to
    /// the log.
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            return AppError::new(kind, "Internal server error");
        }
        match self {
            CalculationError::DivisionByZero => {
                AppError::new(kind, self.to_string()).with_action("Use a non-zero value for b")
            }
            _ => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            CalculationError::Database(e) => {
                tracing::error!(error = %e, "Calculation database error");
            }
            CalculationError::Internal(msg) => {
                tracing::error!(message = %msg, "Calculation internal error");
            }
            _ => {
                tracing::debug!(error = %self, "Calculation rejected");
            }
        }
    }
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for CalculationError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
