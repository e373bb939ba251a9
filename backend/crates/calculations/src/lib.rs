//! Calculations Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Operation tags, evaluation, entities, repository trait
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! A calculation is evaluated before it is stored. A request that fails
//! validation or evaluation never reaches the repository.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CalculationsConfig;
pub use domain::value_objects::CalculationType;
pub use error::{CalcResult, CalculationError};
pub use infra::postgres::PgCalculationRepository;
pub use presentation::router::{calculations_router, calculations_router_generic};
