//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Calculation, EvaluatedCalculation)
//! - Domain value objects (CalculationType, CalculationRequest, CalculationResult)
//! - Domain services (strategy resolution and evaluation)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use services::{evaluate, prepare, resolve};
