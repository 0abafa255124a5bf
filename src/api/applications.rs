//! Application procedures: seeker applications and reviewer decisions

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::{ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::models::application::{
    Application, ApplicationStatus, ApplicationStatusChange, CreateApplicationRequest,
};
use crate::models::user::UserRole;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub job_id: i64,
    pub cover_letter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobIdParams {
    pub job_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetStatusRequest {
    pub application_id: i64,
    pub status: ApplicationStatus,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub application_id: i64,
}

/// Check the caller may review applications for a job: the owner of the
/// posting company, or an admin
async fn authorize_reviewer(state: &AppState, user: &AuthUser, job_id: i64) -> ApiResult<()> {
    let job = state.services.job_service.get_job(job_id).await?;
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

/// `applications.create` (job seeker)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateRequest>,
) -> ApiResult<Json<Application>> {
    user.require_role(UserRole::JobSeeker)?;

    let application = state
        .services
        .application_service
        .create_application(CreateApplicationRequest {
            job_id: request.job_id,
            job_seeker_id: user.id,
            cover_letter: request.cover_letter,
        })
        .await?;
    Ok(Json(application))
}

/// `applications.listForJob` (company reviewer)
pub async fn list_for_job(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<JobIdParams>,
) -> ApiResult<Json<Vec<Application>>> {
    authorize_reviewer(&state, &user, params.job_id).await?;

    let applications = state
        .services
        .application_service
        .list_for_job(params.job_id)
        .await?;
    Ok(Json(applications))
}

/// `applications.listMine` (seeker)
pub async fn list_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<Application>>> {
    let applications = state
        .services
        .application_service
        .list_for_seeker(user.id)
        .await?;
    Ok(Json(applications))
}

/// `applications.setStatus` (company reviewer)
pub async fn set_status(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<SetStatusRequest>,
) -> ApiResult<Json<Application>> {
    let application = state
        .services
        .application_service
        .get_application(request.application_id)
        .await?;
    authorize_reviewer(&state, &user, application.job_id).await?;

    let updated = state
        .services
        .application_service
        .set_status(request.application_id, request.status, user.id)
        .await?;
    Ok(Json(updated))
}

/// `applications.history` (reviewer or the applicant)
pub async fn history(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<HistoryParams>,
) -> ApiResult<Json<Vec<ApplicationStatusChange>>> {
    let application = state
        .services
        .application_service
        .get_application(params.application_id)
        .await?;

    if application.job_seeker_id != user.id {
        authorize_reviewer(&state, &user, application.job_id).await?;
    }

    let changes = state
        .services
        .application_service
        .status_history(params.application_id)
        .await?;
    Ok(Json(changes))
}
