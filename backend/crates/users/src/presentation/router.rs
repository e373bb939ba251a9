//! Users Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, UsersAppState};

/// Create the users router with PostgreSQL repository
pub fn users_router(repo: PgUserRepository, config: UsersConfig) -> Router {
    users_router_generic(repo, config)
}

/// Create a generic users router for any repository implementation
///
/// Collection routes answer with and without the trailing slash.
pub fn users_router_generic<R>(repo: R, config: UsersConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = UsersAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let collection = get(handlers::list_users::<R>).post(handlers::create_user::<R>);

    Router::new()
        .route("/users", collection.clone())
        .route("/users/", collection)
        .route("/users/login", post(handlers::login::<R>))
        .route(
            "/users/{id}",
            get(handlers::get_user::<R>).delete(handlers::delete_user::<R>),
        )
        .with_state(state)
}
