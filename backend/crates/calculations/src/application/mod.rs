//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod create_calculation;
pub mod delete_calculation;
pub mod get_calculation;
pub mod list_calculations;
pub mod update_calculation;

pub use config::CalculationsConfig;
pub use create_calculation::{CreateCalculationInput, CreateCalculationUseCase};
pub use delete_calculation::DeleteCalculationUseCase;
pub use get_calculation::GetCalculationUseCase;
pub use list_calculations::{ListCalculationsInput, ListCalculationsUseCase};
pub use update_calculation::{UpdateCalculationInput, UpdateCalculationUseCase};
