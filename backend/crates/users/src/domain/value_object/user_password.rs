//! User Password Value Object
//!
//! Domain wrappers over `platform::password`. The plaintext never outlives
//! the request and the encoded hash is never rendered in `Debug`.

use platform::password::{ClearTextPassword, CredentialHash, PasswordHashError};
use std::fmt;

use crate::error::{UserError, UserResult};

/// Raw password from user input
///
/// Memory is zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Only an empty password is rejected; the value is otherwise used as-is
    pub fn new(raw: String) -> UserResult<Self> {
        ClearTextPassword::new(raw)
            .map(Self)
            .map_err(|_| UserError::InvalidInput("Password cannot be empty".into()))
    }

    /// Hash with a fresh salt
    ///
    /// CPU-bound; call from a blocking context.
    pub fn hash(&self) -> UserPassword {
        UserPassword(self.0.hash())
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

/// Stored credential hash
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(CredentialHash);

impl UserPassword {
    /// Parse a stored hash
    pub fn from_db(encoded: &str) -> Result<Self, PasswordHashError> {
        CredentialHash::parse(encoded).map(Self)
    }

    /// Stand-in verified when no stored hash is available
    pub fn decoy() -> Self {
        Self(CredentialHash::decoy().clone())
    }

    /// Encoded form for storage
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// CPU-bound; call from a blocking context.
    pub fn verify(&self, raw: &RawPassword) -> bool {
        self.0.verify(&raw.0)
    }

    pub fn needs_rehash(&self) -> bool {
        self.0.needs_rehash()
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UserPassword").field(&"[REDACTED]").finish()
    }
}
