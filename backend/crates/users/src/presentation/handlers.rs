//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{AppJson, AppPath, AppQuery};
use kernel::id::UserId;
use std::sync::Arc;

use crate::application::config::UsersConfig;
use crate::application::{
    AuthenticateUseCase, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::UserResult;
use crate::presentation::dto::{ListUsersQuery, UserCreateRequest, UserLoginRequest, UserRead};

/// Shared state for user handlers
#[derive(Clone)]
pub struct UsersAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<UsersConfig>,
}

/// POST /users
pub async fn create_user<R>(
    State(state): State<UsersAppState<R>>,
    AppJson(req): AppJson<UserCreateRequest>,
) -> UserResult<(StatusCode, Json<UserRead>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateUserUseCase::new(state.repo.clone());
    let user = use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /users
pub async fn list_users<R>(
    State(state): State<UsersAppState<R>>,
    AppQuery(query): AppQuery<ListUsersQuery>,
) -> UserResult<Json<Vec<UserRead>>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone(), state.config.clone());
    let users = use_case.execute(query.into()).await?;

    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// GET /users/{id}
pub async fn get_user<R>(
    State(state): State<UsersAppState<R>>,
    AppPath(id): AppPath<UserId>,
) -> UserResult<Json<UserRead>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetUserUseCase::new(state.repo.clone());
    let user = use_case.execute(id).await?;

    Ok(Json(user.into()))
}

/// DELETE /users/{id}
pub async fn delete_user<R>(
    State(state): State<UsersAppState<R>>,
    AppPath(id): AppPath<UserId>,
) -> UserResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteUserUseCase::new(state.repo.clone());
    use_case.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// POST /users/login
pub async fn login<R>(
    State(state): State<UsersAppState<R>>,
    AppJson(req): AppJson<UserLoginRequest>,
) -> UserResult<Json<UserRead>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = AuthenticateUseCase::new(state.repo.clone());
    let user = use_case.execute(req.into()).await?;

    Ok(Json(user.into()))
}
