//! Request/Response DTOs

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use kernel::page::PageParams;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::application::{AuthenticateInput, CreateUserInput};
use crate::domain::entity::user::User;

/// POST /users request
#[derive(Clone, Deserialize)]
pub struct UserCreateRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for UserCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreateRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl From<UserCreateRequest> for CreateUserInput {
    fn from(req: UserCreateRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
        }
    }
}

/// POST /users/login request
#[derive(Clone, Deserialize)]
pub struct UserLoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for UserLoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserLoginRequest")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl From<UserLoginRequest> for AuthenticateInput {
    fn from(req: UserLoginRequest) -> Self {
        Self {
            username: req.username,
            password: req.password,
        }
    }
}

/// GET /users query
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListUsersQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl From<ListUsersQuery> for PageParams {
    fn from(query: ListUsersQuery) -> Self {
        Self {
            offset: query.offset,
            limit: query.limit,
        }
    }
}

/// Public view of a user; carries no credential material
#[derive(Debug, Clone, Serialize)]
pub struct UserRead {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserRead {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username.into_inner(),
            email: user.email.into_inner(),
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_create_request_debug_hides_password() {
        let req: UserCreateRequest = serde_json::from_str(
            r#"{"username":"alice","email":"a@example.com","password":"hunter2"}"#,
        )
        .unwrap();

        let debug = format!("{req:?}");
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_create_request_requires_password() {
        assert!(
            serde_json::from_str::<UserCreateRequest>(r#"{"username":"a","email":"a@example.com"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_user_read_fields() {
        let read = UserRead {
            id: UserId::from_i64(3),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap(),
        };

        let json = serde_json::to_value(&read).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 4);
        assert_eq!(json["id"], 3);
        assert_eq!(json["username"], "alice");
        assert!(!object.contains_key("password"));
        assert!(!object.contains_key("password_hash"));
    }
}
