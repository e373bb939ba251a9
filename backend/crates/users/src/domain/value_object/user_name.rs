//! User Name Value Object
//!
//! The login handle. Stored exactly as given after trimming surrounding
//! whitespace; comparison is case-sensitive.

use std::fmt;

use crate::error::{UserError, UserResult};

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 50;

/// Validated user name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserName(String);

impl UserName {
    /// Create a new user name with validation
    ///
    /// ## Invariants
    /// - 1 to 50 characters after trimming
    /// - no control characters
    pub fn new(raw: impl AsRef<str>) -> UserResult<Self> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(UserError::InvalidInput("Username cannot be empty".into()));
        }

        let length = name.chars().count();
        if length > USER_NAME_MAX_LENGTH {
            return Err(UserError::InvalidInput(format!(
                "Username must be at most {USER_NAME_MAX_LENGTH} characters (got {length})"
            )));
        }

        if name.chars().any(char::is_control) {
            return Err(UserError::InvalidInput(
                "Username contains invalid characters".into(),
            ));
        }

        Ok(Self(name.to_owned()))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(name: String) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
