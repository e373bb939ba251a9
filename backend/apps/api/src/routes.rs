//! Service-level routes and router assembly

use axum::extract::State;
use axum::http::{HeaderValue, Method, header};
use axum::{Json, Router, routing::get};
use calculations::{CalculationsConfig, PgCalculationRepository, calculations_router};
use kernel::error::app_error::{AppError, AppResult};
use serde_json::{Value, json};
use sqlx::PgPool;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use users::{PgUserRepository, UsersConfig, users_router};

/// Full application router over a shared pool
pub fn app(pool: PgPool, origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .merge(service_router(pool.clone()))
        .merge(users_router(
            PgUserRepository::new(pool.clone()),
            UsersConfig::default(),
        ))
        .merge(calculations_router(
            PgCalculationRepository::new(pool),
            CalculationsConfig::default(),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors(origins))
}

/// `/` and `/health`
pub fn service_router(pool: PgPool) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(pool)
}

fn cors(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}

/// GET /
async fn root() -> Json<Value> {
    Json(json!({ "message": "Secure User API is running" }))
}

/// GET /health
async fn health(State(pool): State<PgPool>) -> AppResult<Json<Value>> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&pool)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "Health check failed");
            AppError::service_unavailable("Database unavailable")
        })?;

    Ok(Json(json!({ "status": "ok" })))
}
