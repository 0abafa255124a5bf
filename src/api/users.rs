//! User procedures: registration, login, account administration

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::{ApiResult, AppState};
use crate::middleware::AuthUser;
use crate::models::user::{User, UserRole};

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
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

#[derive(Debug, Deserialize)]
pub struct SetActiveRequest {
    pub user_id: i64,
    pub is_active: bool,
}

/// `users.register` (public)
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiResult<Json<User>> {
    if request.role == UserRole::Admin {
        return Err(crate::utils::errors::FairHubError::InvalidInput(
            "Admin accounts cannot be self-registered".to_string(),
        )
        .into());
    }
    let user = state
        .services
        .user_service
        .register(
            &request.email,
            &request.password,
            &request.full_name,
            request.role,
        )
        .await?;
    Ok(Json(user))
}

/// `users.login` (public)
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let (user, token) = state
        .services
        .user_service
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(LoginResponse { token, user }))
}

/// `users.me`: the calling account
pub async fn me(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<User>> {
    let user = state.services.user_service.get_user(user.id).await?;
    Ok(Json(user))
}

/// `users.list` (admin)
pub async fn list(
    State(state): State<AppState>,
    user: AuthUser,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<Vec<User>>> {
    user.require_admin()?;
    let users = state
        .services
        .user_service
        .list_users(params.limit, params.offset)
        .await?;
    Ok(Json(users))
}

/// `users.setActive` (admin)
pub async fn set_active(
    State(state): State<AppState>,
    user: AuthUser,
    Json(request): Json<SetActiveRequest>,
) -> ApiResult<Json<User>> {
    user.require_admin()?;
    let updated = state
        .services
        .user_service
        .set_active(request.user_id, request.is_active, user.id)
        .await?;
    Ok(Json(updated))
}
