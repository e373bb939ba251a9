//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
mod credentials;
pub mod create_user;
pub mod delete_user;
pub mod get_user;
pub mod list_users;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateUseCase};
pub use config::UsersConfig;
pub use create_user::{CreateUserInput, CreateUserUseCase};
pub use delete_user::DeleteUserUseCase;
pub use get_user::GetUserUseCase;
pub use list_users::ListUsersUseCase;
