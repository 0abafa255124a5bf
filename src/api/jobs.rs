//! Job procedures

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::{resolve_company, ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::models::job::{CreateJobRequest, Job, UpdateJobRequest};
use crate::models::user::UserRole;
use crate::utils::errors::FairHubError;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub event_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub requirements: Option<String>,
    pub company_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub job_id: i64,
    #[serde(flatten)]
    pub fields: UpdateJobRequest,
}

#[derive(Debug, Deserialize)]
pub struct JobIdParams {
    pub job_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub event_id: Option<i64>,
    pub company_id: Option<i64>,
}

/// Check the caller owns the job's company, or is an admin
async fn authorize_job_access(
    state: &AppState,
    user: &AuthUser,
    job: &Job,
) -> ApiResult<()> {
    let company = state
        .services
        .company_service
        .get_company(job.company_id)
        .await?;
    if company.owner_id != user.id {
        user.require_admin()?;
    }
    Ok(())
}

/// `jobs.create` (company)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateRequest>,
) -> ApiResult<Json<Job>> {
    user.require_role(UserRole::Company)?;
    let company = resolve_company(&state, &user, request.company_id).await?;

    let job = state
        .services
        .job_service
        .create_job(CreateJobRequest {
            company_id: company.id,
            event_id: request.event_id,
            title: request.title,
            description: request.description,
            requirements: request.requirements,
        })
        .await?;
    Ok(Json(job))
}

/// `jobs.update` (owner or admin)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<UpdateRequest>,
) -> ApiResult<Json<Job>> {
    let job = state.services.job_service.get_job(request.job_id).await?;
    authorize_job_access(&state, &user, &job).await?;

    let updated = state
        .services
        .job_service
        .update_job(request.job_id, request.fields)
        .await?;
    Ok(Json(updated))
}

/// `jobs.delete` (owner or admin)
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<JobIdParams>,
) -> ApiResult<Json<serde_json::Value>> {
    let job = state.services.job_service.get_job(request.job_id).await?;
    authorize_job_access(&state, &user, &job).await?;

    state.services.job_service.delete_job(request.job_id).await?;
    Ok(Json(serde_json::json!({ "deleted": request.job_id })))
}

/// `jobs.list` by event or company
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Job>>> {
    let jobs = match (params.event_id, params.company_id) {
        (Some(event_id), _) => state.services.job_service.list_by_event(event_id).await?,
        (None, Some(company_id)) => {
            state
                .services
                .job_service
                .list_by_company(company_id)
                .await?
        }
        (None, None) => {
            return Err(FairHubError::InvalidInput(
                "event_id or company_id is required".to_string(),
            )
            .into())
        }
    };
    Ok(Json(jobs))
}

/// `jobs.get`
pub async fn get_job(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<JobIdParams>,
) -> ApiResult<Json<Job>> {
    let job = state.services.job_service.get_job(params.job_id).await?;
    Ok(Json(job))
}
