//! Company procedures

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::api::{resolve_company, ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::models::company::{
    Company, CompanyWithStats, CreateCompanyRequest, UpdateCompanyRequest,
};
use crate::models::user::UserRole;
use crate::utils::errors::FairHubError;

#[derive(Debug, Deserialize)]
pub struct CreateRequest {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    /// Admins may create a company for another user
    pub owner_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRequest {
    pub company_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub company_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    50
}

/// `companies.create` (company or admin)
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<CreateRequest>,
) -> ApiResult<Json<Company>> {
    user.require_role(UserRole::Company)?;

    let owner_id = match request.owner_id {
        Some(other) if other != user.id => {
            user.require_admin()?;
            other
        }
        _ => user.id,
    };

    let company = state
        .services
        .company_service
        .create_company(CreateCompanyRequest {
            name: request.name,
            description: request.description,
            website: request.website,
            owner_id,
        })
        .await?;
    Ok(Json(company))
}

/// `companies.update` (owner or admin)
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<UpdateRequest>,
) -> ApiResult<Json<Company>> {
    let company = resolve_company(&state, &user, request.company_id).await?;

    let updated = state
        .services
        .company_service
        .update_company(
            company.id,
            UpdateCompanyRequest {
                name: request.name,
                description: request.description,
                website: request.website,
            },
        )
        .await?;
    Ok(Json(updated))
}

/// `companies.delete` (owner or admin)
pub async fn delete(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<DeleteRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let company = state
        .services
        .company_service
        .get_company(request.company_id)
        .await?;
    if company.owner_id != user.id {
        user.require_admin()?;
    }

    state
        .services
        .company_service
        .delete_company(company.id)
        .await?;
    Ok(Json(serde_json::json!({ "deleted": company.id })))
}

/// `companies.list`
pub async fn list(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<Company>>> {
    let companies = state
        .services
        .company_service
        .list_companies(params.limit, params.offset)
        .await?;
    Ok(Json(companies))
}

/// `companies.findAllWithStats` (admin)
pub async fn find_all_with_stats(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<Vec<CompanyWithStats>>> {
    user.require_admin()?;
    let companies = state.services.company_service.list_with_stats().await?;
    Ok(Json(companies))
}

/// `companies.mine`: the company owned by the caller
pub async fn mine(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Company>> {
    let company = state
        .services
        .company_service
        .get_company_for_owner(user.id)
        .await?
        .ok_or_else(|| FairHubError::NotFound("Caller does not own a company".to_string()))?;
    Ok(Json(company))
}
