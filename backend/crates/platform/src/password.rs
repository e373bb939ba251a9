//! Credential Hashing and Verification
//!
//! Salted, iterated PBKDF2-HMAC-SHA256 with a self-describing encoding:
//!
//! ```text
//! {iterations}${salt_base64}${digest_base64}
//! ```
//!
//! - 16-byte salt from the OS CSPRNG, fresh for every hash
//! - 32-byte derived key
//! - Constant-time digest comparison
//! - Zeroization of the clear text on drop
//!
//! Neither the clear text nor the encoded hash is ever passed to `tracing`.

use std::fmt;
use std::sync::LazyLock;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::{
    PBKDF2_SHA256_LEN, constant_time_eq, from_base64, pbkdf2_sha256, random_bytes, to_base64,
};

// ============================================================================
// Constants
// ============================================================================

/// PBKDF2 iteration count for newly produced hashes
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes
pub const SALT_LEN: usize = 16;

/// Upper bound accepted when decoding a stored hash.
/// A tampered row must not be able to pin a worker for minutes.
pub const MAX_ITERATIONS: u32 = 10_000_000;

const FIELD_SEPARATOR: char = '$';

static DECOY: LazyLock<CredentialHash> = LazyLock::new(|| {
    CredentialHash::derive(&random_bytes(SALT_LEN), random_bytes(SALT_LEN), PBKDF2_ITERATIONS)
});

// ============================================================================
// Error Types
// ============================================================================

/// Credential hashing/verification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordHashError {
    /// The clear text is not acceptable for hashing (empty)
    #[error("Password must not be empty")]
    InvalidCredential,

    /// The encoded hash cannot be split into iterations/salt/digest
    #[error("Invalid password hash format")]
    MalformedHash,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::ClearTextPassword;
///
/// let password = ClearTextPassword::new("my_secure_password".to_string()).unwrap();
/// let hashed = password.hash();
/// assert!(hashed.verify(&password));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a clear text credential
    ///
    /// The only rejected input is the empty string. No normalization is
    /// applied: the bytes hashed are exactly the UTF-8 bytes received.
    pub fn new(raw: String) -> Result<Self, PasswordHashError> {
        if raw.is_empty() {
            return Err(PasswordHashError::InvalidCredential);
        }
        Ok(Self(raw))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash with a fresh random salt at [`PBKDF2_ITERATIONS`]
    pub fn hash(&self) -> CredentialHash {
        CredentialHash::derive(self.as_bytes(), random_bytes(SALT_LEN), PBKDF2_ITERATIONS)
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Credential Hash (Safe to store)
// ============================================================================

/// Decoded credential hash
///
/// Holds the parsed salt, iteration count and digest alongside the encoded
/// form that is written to storage.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialHash {
    iterations: u32,
    salt: Vec<u8>,
    digest: [u8; PBKDF2_SHA256_LEN],
    encoded: String,
}

impl CredentialHash {
    fn derive(password: &[u8], salt: Vec<u8>, iterations: u32) -> Self {
        let digest = pbkdf2_sha256(password, &salt, iterations);
        let encoded = format!(
            "{iterations}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            to_base64(&salt),
            to_base64(&digest)
        );
        Self {
            iterations,
            salt,
            digest,
            encoded,
        }
    }

    /// Decode a stored hash
    ///
    /// Rejects anything that is not exactly three `$`-separated fields, an
    /// iteration count outside `1..=MAX_ITERATIONS`, an empty salt, or a
    /// digest that is not 32 bytes.
    pub fn parse(encoded: &str) -> Result<Self, PasswordHashError> {
        let mut fields = encoded.split(FIELD_SEPARATOR);
        let (Some(iterations), Some(salt), Some(digest), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(PasswordHashError::MalformedHash);
        };

        let iterations: u32 = iterations
            .parse()
            .map_err(|_| PasswordHashError::MalformedHash)?;
        if iterations == 0 || iterations > MAX_ITERATIONS {
            return Err(PasswordHashError::MalformedHash);
        }

        let salt = from_base64(salt).map_err(|_| PasswordHashError::MalformedHash)?;
        if salt.is_empty() {
            return Err(PasswordHashError::MalformedHash);
        }

        let digest: [u8; PBKDF2_SHA256_LEN] = from_base64(digest)
            .map_err(|_| PasswordHashError::MalformedHash)?
            .try_into()
            .map_err(|_| PasswordHashError::MalformedHash)?;

        Ok(Self {
            iterations,
            salt,
            digest,
            encoded: encoded.to_owned(),
        })
    }

    /// Encoded form for storage
    pub fn as_str(&self) -> &str {
        &self.encoded
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Verify a password against this hash
    ///
    /// Re-derives with the embedded salt and iteration count; the digest
    /// comparison does not stop at the first differing byte.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        self.verify_bytes(password.as_bytes())
    }

    /// Hash at the current parameters that no caller knows the password of
    ///
    /// Verifying against it costs the same as verifying a real hash, so a
    /// lookup miss can be made as slow as a wrong password.
    pub fn decoy() -> &'static CredentialHash {
        &DECOY
    }

    fn verify_bytes(&self, password: &[u8]) -> bool {
        let candidate = pbkdf2_sha256(password, &self.salt, self.iterations);
        constant_time_eq(&candidate, &self.digest)
    }

    /// True when the hash was produced with fewer iterations than
    /// [`PBKDF2_ITERATIONS`]
    pub fn needs_rehash(&self) -> bool {
        self.iterations < PBKDF2_ITERATIONS
    }
}

impl fmt::Debug for CredentialHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialHash")
            .field("iterations", &self.iterations)
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Hash a clear text credential
///
/// Fails only for the empty string.
pub fn hash_password(plain: &str) -> Result<CredentialHash, PasswordHashError> {
    if plain.is_empty() {
        return Err(PasswordHashError::InvalidCredential);
    }
    let salt = random_bytes(SALT_LEN);
    Ok(CredentialHash::derive(
        plain.as_bytes(),
        salt,
        PBKDF2_ITERATIONS,
    ))
}

/// Check a clear text credential against an encoded hash
///
/// Returns `false` for a malformed hash instead of failing.
pub fn verify_password(plain: &str, encoded: &str) -> bool {
    match CredentialHash::parse(encoded) {
        Ok(hash) => hash.verify_bytes(plain.as_bytes()),
        Err(_) => false,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("anothersecret").unwrap();
        assert!(verify_password("anothersecret", hashed.as_str()));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hashed = hash_password("correct").unwrap();
        assert!(!verify_password("incorrect", hashed.as_str()));
        assert!(!verify_password("Correct", hashed.as_str()));
        assert!(!verify_password("", hashed.as_str()));
    }

    #[test]
    fn test_hash_differs_from_plain() {
        let hashed = hash_password("mysecretpassword").unwrap();
        assert_ne!(hashed.as_str(), "mysecretpassword");
        assert!(!hashed.as_str().contains("mysecretpassword"));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = hash_password("repeat-me").unwrap();
        let second = hash_password("repeat-me").unwrap();

        assert_ne!(first.as_str(), second.as_str());
        assert!(verify_password("repeat-me", first.as_str()));
        assert!(verify_password("repeat-me", second.as_str()));
    }

    #[test]
    fn test_empty_password_rejected() {
        assert_eq!(
            hash_password("").unwrap_err(),
            PasswordHashError::InvalidCredential
        );
        assert_eq!(
            ClearTextPassword::new(String::new()).unwrap_err(),
            PasswordHashError::InvalidCredential
        );
    }

    #[test]
    fn test_whitespace_and_unicode_accepted() {
        for plain in [" ", "\t", "パスワード", "emoji 🔐 pass"] {
            let hashed = hash_password(plain).unwrap();
            assert!(verify_password(plain, hashed.as_str()));
        }
    }

    #[test]
    fn test_encoding_layout() {
        let hashed = hash_password("layout").unwrap();
        let fields: Vec<&str> = hashed.as_str().split('$').collect();

        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0], PBKDF2_ITERATIONS.to_string());
        assert_eq!(from_base64(fields[1]).unwrap().len(), SALT_LEN);
        assert_eq!(from_base64(fields[2]).unwrap().len(), PBKDF2_SHA256_LEN);
        assert_eq!(hashed.iterations(), PBKDF2_ITERATIONS);
        assert!(!hashed.needs_rehash());
    }

    #[test]
    fn test_verifies_hash_with_foreign_parameters() {
        // Produced elsewhere with the same scheme but a lower cost
        let salt = b"fixed-salt-value".to_vec();
        let legacy = CredentialHash::derive(b"legacy", salt, 1_000);

        assert!(verify_password("legacy", legacy.as_str()));
        assert!(!verify_password("legacy!", legacy.as_str()));

        let parsed = CredentialHash::parse(legacy.as_str()).unwrap();
        assert_eq!(parsed.iterations(), 1_000);
        assert!(parsed.needs_rehash());
    }

    #[test]
    fn test_malformed_hashes_verify_false() {
        let good = hash_password("secret").unwrap();
        let fields: Vec<&str> = good.as_str().split('$').collect();
        let short_digest = to_base64(&[0u8; 16]);

        let malformed = [
            String::new(),
            "not_a_valid_hash".to_string(),
            format!("{}${}", fields[0], fields[1]),
            format!("{}$extra", good.as_str()),
            format!("abc${}${}", fields[1], fields[2]),
            format!("0${}${}", fields[1], fields[2]),
            format!("-5${}${}", fields[1], fields[2]),
            format!("{}${}${}", u64::from(MAX_ITERATIONS) + 1, fields[1], fields[2]),
            format!("{}$!!!${}", fields[0], fields[2]),
            format!("{}$${}", fields[0], fields[2]),
            format!("{}${}$%%%", fields[0], fields[1]),
            format!("{}${}${}", fields[0], fields[1], short_digest),
        ];

        for encoded in &malformed {
            assert!(!verify_password("secret", encoded), "accepted {encoded:?}");
            assert_eq!(
                CredentialHash::parse(encoded).unwrap_err(),
                PasswordHashError::MalformedHash
            );
        }
    }

    #[test]
    fn test_clear_text_hash_and_verify() {
        let password = ClearTextPassword::new("TestPassword123!".to_string()).unwrap();
        let hashed = password.hash();

        assert!(hashed.verify(&password));

        let wrong = ClearTextPassword::new("WrongPassword123!".to_string()).unwrap();
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_decoy_uses_current_parameters() {
        let decoy = CredentialHash::decoy();

        assert_eq!(decoy.iterations(), PBKDF2_ITERATIONS);
        assert!(!decoy.needs_rehash());
        assert!(std::ptr::eq(decoy, CredentialHash::decoy()));
        assert!(CredentialHash::parse(decoy.as_str()).is_ok());

        let password = ClearTextPassword::new("decoy-guess".to_string()).unwrap();
        assert!(!decoy.verify(&password));
    }

    #[test]
    fn test_parse_roundtrip_preserves_encoding() {
        let hashed = hash_password("roundtrip").unwrap();
        let restored = CredentialHash::parse(hashed.as_str()).unwrap();

        assert_eq!(restored, hashed);
        assert!(verify_password("roundtrip", restored.as_str()));
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string()).unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = password.hash();
        let debug_output = format!("{:?}", hashed);
        assert!(debug_output.contains("[HASH]"));
        assert!(!debug_output.contains(hashed.as_str()));
    }
}
