//! Profile procedures for job seekers and companies

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::{resolve_company, ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::models::profile::{
    CompanyProfile, JobSeekerProfile, UpsertCompanyProfileRequest, UpsertJobSeekerProfileRequest,
};
use crate::models::user::UserRole;
use crate::utils::errors::FairHubError;

#[derive(Debug, Deserialize)]
pub struct CompanyParams {
    pub company_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpsertCompanyRequest {
    pub company_id: Option<i64>,
    #[serde(flatten)]
    pub fields: UpsertCompanyProfileRequest,
}

/// `profile.getMine` (seeker)
pub async fn get_mine(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<JobSeekerProfile>> {
    user.require_role(UserRole::JobSeeker)?;
    let profile = state
        .services
        .db
        .profiles
        .find_seeker_profile(user.id)
        .await?
        .ok_or_else(|| FairHubError::NotFound("Profile not set".to_string()))?;
    Ok(Json(profile))
}

/// `profile.upsertMine` (seeker)
pub async fn upsert_mine(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<UpsertJobSeekerProfileRequest>,
) -> ApiResult<Json<JobSeekerProfile>> {
    user.require_role(UserRole::JobSeeker)?;

    // A referenced resume must exist in the blob store
    if let Some(hash) = &request.resume_hash {
        if !state.services.blob_store.exists(hash).await? {
            return Err(
                FairHubError::InvalidInput(format!("Unknown resume hash: {}", hash)).into(),
            );
        }
    }

    let profile = state
        .services
        .db
        .profiles
        .upsert_seeker_profile(user.id, request)
        .await?;
    Ok(Json(profile))
}

/// `profile.company`
pub async fn company(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<CompanyParams>,
) -> ApiResult<Json<CompanyProfile>> {
    let profile = state
        .services
        .company_service
        .get_profile(params.company_id)
        .await?
        .ok_or_else(|| FairHubError::NotFound("Profile not set".to_string()))?;
    Ok(Json(profile))
}

/// `profile.upsertCompany` (owner or admin)
pub async fn upsert_company(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<UpsertCompanyRequest>,
) -> ApiResult<Json<CompanyProfile>> {
    user.require_role(UserRole::Company)?;
    let company = resolve_company(&state, &user, request.company_id).await?;

    if let Some(hash) = &request.fields.logo_hash {
        if !state.services.blob_store.exists(hash).await? {
            return Err(
                FairHubError::InvalidInput(format!("Unknown logo hash: {}", hash)).into(),
            );
        }
    }

    let profile = state
        .services
        .company_service
        .upsert_profile(company.id, request.fields)
        .await?;
    Ok(Json(profile))
}
