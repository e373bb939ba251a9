//! Infrastructure Layer
//!
//! Repository implementations.

#[cfg(test)]
pub mod memory;
pub mod postgres;
