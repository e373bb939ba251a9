//! User Error Types
//!
//! This module provides user-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use kernel::id::UserId;
use thiserror::Error;

/// User-specific result type alias
pub type UserResult<T> = Result<T, UserError>;

/// User-specific error variants
#[derive(Debug, Error)]
pub enum UserError {
    /// Username, email or password failed validation
    #[error("{0}")]
    InvalidInput(String),

    /// Unique constraint on username or email
    #[error("Username or email already exists.")]
    AlreadyExists,

    /// User not found
    #[error("User not found.")]
    NotFound,

    /// Unknown username or wrong password
    #[error("Invalid username or password.")]
    InvalidCredentials,

    /// Stored credential hash could not be parsed
    #[error("Stored credential for user {0} is malformed")]
    CorruptCredential(UserId),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            UserError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            UserError::AlreadyExists => StatusCode::BAD_REQUEST,
            UserError::NotFound => StatusCode::NOT_FOUND,
            UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            UserError::CorruptCredential(_) | UserError::Database(_) | UserError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            UserError::InvalidInput(_) => ErrorKind::UnprocessableEntity,
            UserError::AlreadyExists => ErrorKind::BadRequest,
            UserError::NotFound => ErrorKind::NotFound,
            UserError::InvalidCredentials => ErrorKind::Unauthorized,
            UserError::CorruptCredential(_) | UserError::Database(_) | UserError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        let kind = self.kind();
        if kind.is_server_error() {
            return AppError::new(kind, "Internal server error");
        }
        match self {
            UserError::AlreadyExists => AppError::new(kind, self.to_string())
                .with_action("Choose a different username or email"),
            _ => AppError::new(kind, self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            UserError::Database(e) => {
                tracing::error!(error = %e, "User database error");
            }
            UserError::Internal(msg) => {
                tracing::error!(message = %msg, "User internal error");
            }
            UserError::CorruptCredential(user_id) => {
                tracing::error!(user_id = %user_id, "Malformed stored credential");
            }
            UserError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "User request rejected");
            }
        }
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(UserError, StatusCode)> = vec![
            (
                UserError::InvalidInput("Email cannot be empty".into()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (UserError::AlreadyExists, StatusCode::BAD_REQUEST),
            (UserError::NotFound, StatusCode::NOT_FOUND),
            (UserError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                UserError::CorruptCredential(UserId::from_i64(1)),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                UserError::Internal("join".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            assert_eq!(error.into_response().status(), expected_status);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(UserError::NotFound.to_string(), "User not found.");
        assert_eq!(
            UserError::AlreadyExists.to_app_error().message(),
            "Username or email already exists."
        );
        assert_eq!(
            UserError::CorruptCredential(UserId::from_i64(9))
                .to_app_error()
                .message(),
            "Internal server error"
        );
    }
}
