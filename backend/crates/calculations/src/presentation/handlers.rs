//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use kernel::extract::{AppJson, AppPath, AppQuery};
use kernel::id::CalculationId;
use std::sync::Arc;

use crate::application::config::CalculationsConfig;
use crate::application::create_calculation::CreateCalculationUseCase;
use crate::application::delete_calculation::DeleteCalculationUseCase;
use crate::application::get_calculation::GetCalculationUseCase;
use crate::application::list_calculations::ListCalculationsUseCase;
use crate::application::update_calculation::UpdateCalculationUseCase;
use crate::domain::repository::CalculationRepository;
use crate::error::CalcResult;
use crate::presentation::dto::{
    CalculationCreateRequest, CalculationResponse, CalculationUpdateRequest,
    ListCalculationsQuery,
};

/// Shared state for calculation handlers
#[derive(Clone)]
pub struct CalculationsAppState<R>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<CalculationsConfig>,
}

/// POST /calculations
pub async fn create_calculation<R>(
    State(state): State<CalculationsAppState<R>>,
    AppJson(req): AppJson<CalculationCreateRequest>,
) -> CalcResult<(StatusCode, Json<CalculationResponse>)>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = CreateCalculationUseCase::new(state.repo.clone());
    let calculation = use_case.execute(req.into()).await?;

    Ok((StatusCode::CREATED, Json(calculation.into())))
}

/// GET /calculations
pub async fn list_calculations<R>(
    State(state): State<CalculationsAppState<R>>,
    AppQuery(query): AppQuery<ListCalculationsQuery>,
) -> CalcResult<Json<Vec<CalculationResponse>>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListCalculationsUseCase::new(state.repo.clone(), state.config.clone());
    let calculations = use_case.execute(query.into()).await?;

    Ok(Json(calculations.into_iter().map(Into::into).collect()))
}

/// GET /calculations/{id}
pub async fn get_calculation<R>(
    State(state): State<CalculationsAppState<R>>,
    AppPath(id): AppPath<CalculationId>,
) -> CalcResult<Json<CalculationResponse>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = GetCalculationUseCase::new(state.repo.clone());
    let calculation = use_case.execute(id).await?;

    Ok(Json(calculation.into()))
}

/// PUT /calculations/{id}
pub async fn update_calculation<R>(
    State(state): State<CalculationsAppState<R>>,
    AppPath(id): AppPath<CalculationId>,
    AppJson(req): AppJson<CalculationUpdateRequest>,
) -> CalcResult<Json<CalculationResponse>>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = UpdateCalculationUseCase::new(state.repo.clone());
    let calculation = use_case.execute(id, req.into()).await?;

    Ok(Json(calculation.into()))
}

/// DELETE /calculations/{id}
pub async fn delete_calculation<R>(
    State(state): State<CalculationsAppState<R>>,
    AppPath(id): AppPath<CalculationId>,
) -> CalcResult<StatusCode>
where
    R: CalculationRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteCalculationUseCase::new(state.repo.clone());
    use_case.execute(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
