//! Cryptographic Utilities

use base64::{Engine, engine::general_purpose};
use rand::{RngCore, rngs::OsRng};
use sha2::Sha256;

/// Length of a PBKDF2-HMAC-SHA256 derived key (one SHA-256 block)
pub const PBKDF2_SHA256_LEN: usize = 32;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Encode bytes as base64 (standard alphabet, padded)
pub fn to_base64(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Decode base64 to bytes
pub fn from_base64(s: &str) -> Result<Vec<u8>, base64::DecodeError> {
    general_purpose::STANDARD.decode(s)
}

/// Derive a key with PBKDF2-HMAC-SHA256
pub fn pbkdf2_sha256(password: &[u8], salt: &[u8], iterations: u32) -> [u8; PBKDF2_SHA256_LEN] {
    pbkdf2::pbkdf2_hmac_array::<Sha256, PBKDF2_SHA256_LEN>(password, salt, iterations)
}

/// Constant-time comparison to prevent timing attacks
///
/// Only the length check returns early; lengths are not secret.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}
