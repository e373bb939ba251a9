//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (PBKDF2-HMAC-SHA256, Base64, secure random)
//! - Credential hashing and verification
//!
//! Everything here is pure and stateless; callers own persistence.

pub mod crypto;
pub mod password;
