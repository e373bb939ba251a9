//! Email Value Object
//!
//! Shape check only; ownership of the address is never verified.

use std::fmt;

use crate::error::{UserError, UserResult};

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Maximum local-part length (per RFC 5321)
const LOCAL_PART_MAX_LENGTH: usize = 64;

/// Email address value object
///
/// The domain is lowercased; the local part is kept as typed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(raw: impl AsRef<str>) -> UserResult<Self> {
        let email = normalize(raw.as_ref().trim());

        if email.is_empty() {
            return Err(UserError::InvalidInput("Email cannot be empty".into()));
        }

        if email.chars().count() > EMAIL_MAX_LENGTH {
            return Err(UserError::InvalidInput(format!(
                "Email must be at most {EMAIL_MAX_LENGTH} characters"
            )));
        }

        if !is_valid_shape(&email) {
            return Err(UserError::InvalidInput(
                "Email must look like local@domain.tld".into(),
            ));
        }

        Ok(Self(email))
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: String) -> Self {
        Self(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn normalize(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// `local@domain.tld` with a dotted, hyphen-safe ASCII domain
fn is_valid_shape(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty()
        || local.chars().count() > LOCAL_PART_MAX_LENGTH
        || local.contains(char::is_whitespace)
    {
        return false;
    }

    if domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
