//! Calculations Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::CalculationsConfig;
use crate::domain::repository::CalculationRepository;
use crate::infra::postgres::PgCalculationRepository;
use crate::presentation::handlers::{self, CalculationsAppState};

/// Create the calculations router with PostgreSQL repository
pub fn calculations_router(repo: PgCalculationRepository, config: CalculationsConfig) -> Router {
    calculations_router_generic(repo, config)
}

/// Create a generic calculations router for any repository implementation
///
/// Collection routes answer with and without the trailing slash.
pub fn calculations_router_generic<R>(repo: R, config: CalculationsConfig) -> Router
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let state = CalculationsAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    let collection =
        get(handlers::list_calculations::<R>).post(handlers::create_calculation::<R>);

    Router::new()
        .route("/calculations", collection.clone())
        .route("/calculations/", collection)
        .route(
            "/calculations/{id}",
            get(handlers::get_calculation::<R>)
                .put(handlers::update_calculation::<R>)
                .delete(handlers::delete_calculation::<R>),
        )
        .with_state(state)
}
